//! # DevBlog Infrastructure
//!
//! Concrete implementations of the ports defined in `devblog-core`.

pub mod store;

pub use store::InMemoryPostRepository;
