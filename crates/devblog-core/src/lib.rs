//! # DevBlog Core
//!
//! The domain layer of DevBlog.
//! This crate contains the post model, input validation and the store port,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{ValidationErrors, ValidationIssue};
pub use error::{DomainError, RepoError};
