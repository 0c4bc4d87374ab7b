//! Domain entities - the core business objects.

mod post;
mod validation;

pub use post::{
    DEFAULT_API_AUTHOR, DEFAULT_FORM_AUTHOR, NewPost, Post, PostId, PostPatch, TITLE_MAX_CHARS,
};
pub use validation::{ValidationErrors, ValidationIssue};
