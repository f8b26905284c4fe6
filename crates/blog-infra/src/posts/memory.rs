//! In-memory post repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{Post, PostChanges, PostDraft, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

struct Posts {
    items: Vec<Post>,
    last_id: PostId,
}

/// In-memory post repository using a `Vec` behind an async RwLock.
///
/// Posts are kept in creation order. Ids come from a counter that is never
/// decremented by `remove`, so a deleted id is never handed out again until
/// `clear` starts a new sequence.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Posts>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Posts {
                items: Vec::new(),
                last_id: 0,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.items.clone())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.items.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let post = Post::new(store.last_id, draft);
        store.items.push(post.clone());

        tracing::debug!(post_id = post.id, "Post inserted");
        Ok(post)
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;

        let Some(post) = store.items.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        post.apply(changes);

        Ok(Some(post.clone()))
    }

    async fn remove(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;

        let Some(index) = store.items.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        Ok(Some(store.items.remove(index)))
    }

    async fn find_matching(&self, needle: &str) -> Result<Vec<Post>, RepoError> {
        let needle = needle.to_lowercase();
        let store = self.store.read().await;

        Ok(store
            .items
            .iter()
            .filter(|p| p.matches(&needle))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.store.read().await.items.len())
    }

    async fn clear(&self) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.items.clear();
        store.last_id = 0;

        tracing::debug!("Post repository cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use blog_core::PostStore;
    use blog_core::domain::NewPost;

    use super::*;

    fn draft(title: &str, content: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            content: content.to_string(),
            author: "Anonymous".to_string(),
        }
    }

    fn new_post(title: &str, content: &str) -> NewPost {
        NewPost {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            author: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryPostRepository::new();
        let first = repo.insert(draft("Post 1", "Conteúdo 1")).await.unwrap();
        let second = repo.insert(draft("Post 2", "Conteúdo 2")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_removed_ids_are_not_reused() {
        let repo = InMemoryPostRepository::new();
        let first = repo.insert(draft("Post 1", "")).await.unwrap();
        repo.remove(first.id).await.unwrap();

        let next = repo.insert(draft("Post 2", "")).await.unwrap();
        assert_eq!(next.id, 2);
        assert_eq!(repo.find_by_id(first.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_restarts_sequence() {
        let repo = InMemoryPostRepository::new();
        repo.insert(draft("Post 1", "")).await.unwrap();
        repo.insert(draft("Post 2", "")).await.unwrap();

        repo.clear().await.unwrap();
        assert!(repo.all().await.unwrap().is_empty());

        let post = repo.insert(draft("Post 3", "")).await.unwrap();
        assert_eq!(post.id, 1);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryPostRepository::new();
        let result = repo.update(9999, PostChanges::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_matching_keeps_store_order() {
        let repo = InMemoryPostRepository::new();
        repo.insert(draft("Python Tutorial", "Aprenda Python")).await.unwrap();
        repo.insert(draft("Flask Guide", "Guia do Flask")).await.unwrap();
        repo.insert(draft("Advanced", "python avançado")).await.unwrap();

        let ids: Vec<PostId> = repo
            .find_matching("PYTHON")
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_store_lifecycle() {
        let store = PostStore::new(Arc::new(InMemoryPostRepository::new()));

        let created = store.create(new_post("Hello", "World")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.author, "Anonymous");
        assert_eq!(store.get(1).await.unwrap(), created);

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let updated = store
            .update(
                1,
                PostChanges {
                    title: Some("Hi".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Hi");
        assert_eq!(updated.content, "World");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        store.delete(1).await.unwrap();
        assert!(store.get(1).await.is_err());
    }

    #[tokio::test]
    async fn test_store_rejections_leave_repository_unchanged() {
        let store = PostStore::new(Arc::new(InMemoryPostRepository::new()));
        store.create(new_post("Hello", "World")).await.unwrap();

        assert!(store.create(new_post("", "World")).await.is_err());
        assert!(store.get(2).await.is_err());
        assert!(store.delete(2).await.is_err());
        assert!(store.update(2, PostChanges::default()).await.is_err());

        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.get(1).await.unwrap().title, "Hello");
    }

    #[tokio::test]
    async fn test_store_search_and_reset() {
        let store = PostStore::new(Arc::new(InMemoryPostRepository::new()));
        store.create(new_post("Hello there", "first")).await.unwrap();
        store.create(new_post("Other", "say HELLO")).await.unwrap();
        store.create(new_post("Unrelated", "nothing")).await.unwrap();

        let hits = store.search(Some("hElLo")).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Hello there");

        store.reset().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(store.list().await.unwrap().is_empty());
    }
}
