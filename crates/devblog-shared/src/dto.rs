//! Data Transfer Objects - request types for the API and HTML forms.
//!
//! Every field is optional: presence is checked by validation, not by
//! deserialization. An explicit JSON `null` is the same as an absent field.

use serde::{Deserialize, Serialize};

/// JSON body of `POST /api/posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl CreatePostRequest {
    /// True for `{}` and bodies that only carry unknown keys.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

/// JSON body of `PUT /api/posts/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Form body of `POST /create`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// `?q=` query string of the search routes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchQuery {
    /// The trimmed search term, or `None` when missing or blank.
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

/// `?created=1` flag set on the redirect after a successful form submission.
/// Any other value is ignored rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostViewQuery {
    #[serde(default)]
    pub created: Option<String>,
}

impl PostViewQuery {
    pub fn is_created(&self) -> bool {
        self.created.as_deref() == Some("1")
    }
}
