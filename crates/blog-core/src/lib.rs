//! # Blog Core
//!
//! The domain layer of the blog API.
//! This crate contains the post model, the repository port and the
//! `PostStore` service; it has no HTTP or storage dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::PostStore;
