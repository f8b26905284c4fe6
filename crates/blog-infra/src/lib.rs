//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! Only the in-memory post repository exists today; posts are lost on
//! process restart.

pub mod posts;

pub use posts::InMemoryPostRepository;
