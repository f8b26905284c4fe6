use async_trait::async_trait;

use crate::domain::{Post, PostChanges, PostDraft, PostId};
use crate::error::RepoError;

/// Post repository - storage backend for the post store.
///
/// Implementations keep posts in creation order and assign ids from a
/// sequence that is only rewound by `clear`.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in creation order.
    async fn all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Assign the next id and append the post.
    async fn insert(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Apply changes in place. Returns `None` if the id is unknown.
    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Option<Post>, RepoError>;

    /// Remove a post. Returns `None` if the id is unknown.
    async fn remove(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Posts whose title or content contains `needle`, ignoring case.
    async fn find_matching(&self, needle: &str) -> Result<Vec<Post>, RepoError>;

    async fn count(&self) -> Result<usize, RepoError>;

    /// Drop every post and restart the id sequence.
    async fn clear(&self) -> Result<(), RepoError>;
}
