//! Application state - shared across all handlers.

use std::sync::Arc;

use devblog_core::ports::PostRepository;
use devblog_infra::InMemoryPostRepository;

/// Shared application state.
///
/// Built once at startup; every worker gets a clone pointing at the same store.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state backed by a fresh in-memory store.
    pub fn new() -> Self {
        tracing::info!("Using in-memory post store (data is not persisted)");
        Self::with_repository(Arc::new(InMemoryPostRepository::new()))
    }

    /// Build the application state around an existing store.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
