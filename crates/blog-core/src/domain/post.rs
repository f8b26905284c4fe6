use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// Post identifier, assigned by the repository.
pub type PostId = u64;

/// Author recorded when a post is created without one.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Post entity - represents a blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a post from a validated draft with both timestamps set to now.
    pub fn new(id: PostId, draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the supplied fields and refresh `updated_at`.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(author) = changes.author {
            self.author = author;
        }
        self.touch();
    }

    /// `updated_at` never moves backwards, even if the wall clock does.
    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }

    /// Case-insensitive substring match over title and content.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// Raw input for creating a post.
///
/// Every field is optional so that validation can say what is missing
/// instead of failing at deserialization.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl NewPost {
    pub fn validate(self) -> Result<PostDraft, DomainError> {
        let title = required_title(self.title)?;
        let content = self
            .content
            .ok_or_else(|| DomainError::Validation("Content is required".to_string()))?;

        Ok(PostDraft {
            title,
            content,
            author: author_or_default(self.author),
        })
    }
}

/// Partial update - only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl PostChanges {
    /// Normalize the supplied fields; a supplied title may not be empty.
    pub fn validate(self) -> Result<Self, DomainError> {
        let title = match self.title {
            Some(title) => Some(required_title(Some(title))?),
            None => None,
        };

        Ok(Self {
            title,
            content: self.content,
            author: self.author.map(|a| author_or_default(Some(a))),
        })
    }
}

fn required_title(title: Option<String>) -> Result<String, DomainError> {
    match title.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => Ok(t.to_string()),
        _ => Err(DomainError::Validation("Title is required".to_string())),
    }
}

fn author_or_default(author: Option<String>) -> String {
    match author.as_deref().map(str::trim) {
        Some(a) if !a.is_empty() => a.to_string(),
        _ => DEFAULT_AUTHOR.to_string(),
    }
}
