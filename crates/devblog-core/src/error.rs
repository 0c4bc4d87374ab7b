//! Domain-level error types.

use thiserror::Error;

use crate::domain::{PostId, ValidationErrors};

/// Domain errors - business rule failures raised by the request layer.
///
/// The post store never produces these itself: it reports absence through
/// `Option`/`bool` and callers lift that into `NotFound`.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post with id {id} not found")]
    NotFound { id: PostId },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Repository-level errors - backend failures unrelated to the request.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}
