//! # Blog Shared
//!
//! Request and response types that cross the HTTP boundary.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
