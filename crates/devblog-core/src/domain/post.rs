use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{ValidationErrors, ValidationIssue};

/// Identifier assigned by the post store. Starts at 1 and is never reused.
pub type PostId = u64;

/// Maximum title length, counted in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Author used for posts submitted through the HTML form without one.
pub const DEFAULT_FORM_AUTHOR: &str = "Anónimo";

/// Author used for posts submitted through the JSON API without one.
pub const DEFAULT_API_AUTHOR: &str = "API User";

/// Post entity - a single blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Build a post from validated input. Both timestamps are set to now.
    pub fn new(id: PostId, input: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: input.title,
            content: input.content,
            author: input.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Unset fields are left alone; `updated_at` is
    /// always refreshed.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        self.updated_at = Utc::now().max(self.created_at);
    }

    /// Case-insensitive substring match on title or content.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// Validated input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl NewPost {
    /// Trim and validate raw input.
    ///
    /// A missing or blank author falls back to `default_author`. All issues
    /// are collected rather than stopping at the first one.
    pub fn validate(
        title: Option<&str>,
        content: Option<&str>,
        author: Option<&str>,
        default_author: &str,
    ) -> Result<Self, ValidationErrors> {
        let title = title.unwrap_or_default().trim();
        let content = content.unwrap_or_default().trim();
        let author = match author.map(str::trim) {
            Some(author) if !author.is_empty() => author,
            _ => default_author,
        };

        let mut errors = ValidationErrors::default();
        if title.is_empty() {
            errors.push(ValidationIssue::TitleRequired);
        }
        if content.is_empty() {
            errors.push(ValidationIssue::ContentRequired);
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            errors.push(ValidationIssue::TitleTooLong);
        }

        errors.into_result(Self {
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
        })
    }
}

/// Partial update: `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    /// Trim and validate the supplied fields. Fields that are present must
    /// satisfy the same rules as on creation.
    pub fn validate(title: Option<&str>, content: Option<&str>) -> Result<Self, ValidationErrors> {
        let title = title.map(str::trim);
        let content = content.map(str::trim);

        let mut errors = ValidationErrors::default();
        if let Some(title) = title {
            if title.is_empty() {
                errors.push(ValidationIssue::TitleRequired);
            } else if title.chars().count() > TITLE_MAX_CHARS {
                errors.push(ValidationIssue::TitleTooLong);
            }
        }
        if content.is_some_and(str::is_empty) {
            errors.push(ValidationIssue::ContentRequired);
        }

        errors.into_result(Self {
            title: title.map(String::from),
            content: content.map(String::from),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new(
            1,
            NewPost {
                title: "Hello World".to_string(),
                content: "First post".to_string(),
                author: "Ana".to_string(),
            },
        )
    }

    #[test]
    fn test_new_post_sets_equal_timestamps() {
        let post = sample();
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_apply_title_only() {
        let mut post = sample();
        let before = post.clone();

        post.apply(PostPatch {
            title: Some("Hi".to_string()),
            content: None,
        });

        assert_eq!(post.title, "Hi");
        assert_eq!(post.content, before.content);
        assert_eq!(post.author, before.author);
        assert_eq!(post.created_at, before.created_at);
        assert!(post.updated_at >= before.updated_at);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let post = sample();
        assert!(post.matches("hello"));
        assert!(post.matches("first"));
        assert!(!post.matches("second"));
    }

    #[test]
    fn test_validate_defaults_blank_author() {
        let input = NewPost::validate(Some(" T "), Some(" C "), Some("   "), DEFAULT_FORM_AUTHOR)
            .unwrap();
        assert_eq!(input.title, "T");
        assert_eq!(input.content, "C");
        assert_eq!(input.author, "Anónimo");

        let input = NewPost::validate(Some("T"), Some("C"), None, DEFAULT_API_AUTHOR).unwrap();
        assert_eq!(input.author, "API User");
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let errors = NewPost::validate(None, Some("  "), None, DEFAULT_API_AUTHOR).unwrap_err();
        assert_eq!(
            errors.issues(),
            &[ValidationIssue::TitleRequired, ValidationIssue::ContentRequired]
        );
    }

    #[test]
    fn test_validate_title_length_counts_chars() {
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert!(NewPost::validate(Some(&title), Some("c"), None, DEFAULT_API_AUTHOR).is_ok());

        let title = "a".repeat(TITLE_MAX_CHARS + 1);
        let errors = NewPost::validate(Some(&title), Some("c"), None, DEFAULT_API_AUTHOR)
            .unwrap_err();
        assert_eq!(errors.issues(), &[ValidationIssue::TitleTooLong]);
    }

    #[test]
    fn test_patch_validate() {
        let patch = PostPatch::validate(Some(" New "), None).unwrap();
        assert_eq!(patch.title.as_deref(), Some("New"));
        assert!(patch.content.is_none());

        assert!(PostPatch::validate(None, None).unwrap().is_empty());

        let errors = PostPatch::validate(Some(""), Some(" ")).unwrap_err();
        assert_eq!(
            errors.issues(),
            &[ValidationIssue::TitleRequired, ValidationIssue::ContentRequired]
        );
    }

    #[test]
    fn test_post_serializes_with_iso_timestamps() {
        let post = sample();
        let value = serde_json::to_value(&post).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["title"], "Hello World");
        assert_eq!(value["author"], "Ana");
        let created = value["created_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(created).is_ok());
    }
}
