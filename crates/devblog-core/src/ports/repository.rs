use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId, PostPatch};
use crate::error::RepoError;

/// Post store - the authoritative registry of every post.
///
/// Absence is never an error: lookups return `None`, deletes return `false`.
/// `Err` is reserved for backend failures.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a new post under a freshly assigned id.
    async fn create(&self, input: NewPost) -> Result<Post, RepoError>;

    /// Snapshot of every post in creation order.
    async fn get_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn get_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Apply a partial update, returning the updated post.
    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Option<Post>, RepoError>;

    /// Remove a post. Returns whether it existed.
    async fn delete(&self, id: PostId) -> Result<bool, RepoError>;

    /// Posts whose title or content contains `query`, ignoring case, in
    /// creation order. `query` must not be empty.
    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError>;
}
