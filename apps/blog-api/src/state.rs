//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostStore;
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostStore,
}

impl AppState {
    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        tracing::info!("Using in-memory post repository; posts are lost on restart");
        Self::with_repository(Arc::new(InMemoryPostRepository::new()))
    }

    /// State backed by any repository implementation.
    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostStore::new(repo),
        }
    }
}
