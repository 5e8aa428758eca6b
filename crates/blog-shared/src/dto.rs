//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author as sent by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Request to create a post.
///
/// Every field is optional on the wire so that missing fields can be
/// reported together instead of failing deserialization on the first one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<AuthorRequest>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CreatePostRequest {
    /// Required fields absent from the request, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_none() {
            missing.push("title");
        }
        let author = self.author.as_ref();
        if author.and_then(|a| a.first_name.as_ref()).is_none() {
            missing.push("author.firstName");
        }
        if author.and_then(|a| a.last_name.as_ref()).is_none() {
            missing.push("author.lastName");
        }
        if self.content.is_none() {
            missing.push("content");
        }
        missing
    }
}

/// Request to update a post. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    /// When present, must match the id in the path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Public representation of a post.
///
/// The author is flattened to a `"first last"` display string. Unknown
/// fields are rejected so clients can validate the shape structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created: DateTime<Utc>,
}
