use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured author of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Name as shown to API consumers: `"first last"`.
    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Post entity - a blog post as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub author: Author,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Input for a post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub author: Author,
    pub content: String,
}

impl Post {
    /// Materialize a new post, assigning its id and creation time.
    ///
    /// Only repositories call this; the id and timestamp are owned by the
    /// persistence layer.
    pub fn new(input: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            author: input.author,
            content: input.content,
            created_at: Utc::now(),
        }
    }

    /// Apply a partial update. `id` and `created_at` are never touched.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(first_name) = changes.author_first_name {
            self.author.first_name = first_name;
        }
        if let Some(last_name) = changes.author_last_name {
            self.author.last_name = last_name;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
    }
}

/// Partial update for a post. `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub author_first_name: Option<String>,
    pub author_last_name: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author_first_name.is_none()
            && self.author_last_name.is_none()
            && self.content.is_none()
    }
}
