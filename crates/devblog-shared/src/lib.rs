//! # DevBlog Shared
//!
//! Wire types shared by the HTML and JSON surfaces: request DTOs and the
//! JSON response envelopes.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
