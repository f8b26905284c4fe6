//! Post store - validation and business rules over a `PostRepository`.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostChanges, PostId};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// The post store used by the HTTP layer.
///
/// Cheap to clone; all clones share the same repository.
#[derive(Clone)]
pub struct PostStore {
    repo: Arc<dyn PostRepository>,
}

impl PostStore {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// All posts in creation order.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.all().await?)
    }

    /// Validate the input and append a new post.
    pub async fn create(&self, input: NewPost) -> Result<Post, DomainError> {
        let draft = input.validate()?;
        Ok(self.repo.insert(draft).await?)
    }

    pub async fn get(&self, id: PostId) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Apply a partial update. An unknown id is reported before invalid input.
    pub async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, DomainError> {
        self.get(id).await?;
        let changes = changes.validate()?;

        // The post may be removed between the lookup and the write.
        self.repo
            .update(id, changes)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Remove a post, returning what was removed.
    pub async fn delete(&self, id: PostId) -> Result<Post, DomainError> {
        self.repo
            .remove(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Case-insensitive substring search over title and content.
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Post>, DomainError> {
        let query = query
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| DomainError::Validation("Search query is required".to_string()))?;

        Ok(self.repo.find_matching(query).await?)
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.repo.count().await?)
    }

    /// Remove every post and restart ids at 1.
    pub async fn reset(&self) -> Result<(), DomainError> {
        Ok(self.repo.clear().await?)
    }
}
