//! In-memory post store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use devblog_core::domain::{NewPost, Post, PostId, PostPatch};
use devblog_core::error::RepoError;
use devblog_core::ports::PostRepository;

struct StoreState {
    // Ids are handed out in increasing order, so key order is creation order.
    posts: BTreeMap<PostId, Post>,
    next_id: PostId,
}

/// In-memory post store using a single async RwLock around the map and
/// the id counter.
///
/// Writers hold the lock for the whole operation, so ids are never handed
/// out twice and readers never see a half-applied update.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    state: RwLock<StoreState>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                posts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, input: NewPost) -> Result<Post, RepoError> {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let post = Post::new(id, input);
        state.posts.insert(id, post.clone());

        tracing::debug!(post_id = id, "Post created");
        Ok(post)
    }

    async fn get_all(&self) -> Result<Vec<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(state.posts.values().cloned().collect())
    }

    async fn get_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let state = self.state.read().await;
        Ok(state.posts.get(&id).cloned())
    }

    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let mut state = self.state.write().await;

        let Some(post) = state.posts.get_mut(&id) else {
            tracing::debug!(post_id = id, "Update skipped, post not found");
            return Ok(None);
        };
        post.apply(patch);

        tracing::debug!(post_id = id, "Post updated");
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        let mut state = self.state.write().await;
        let removed = state.posts.remove(&id).is_some();

        tracing::debug!(post_id = id, removed, "Post delete");
        Ok(removed)
    }

    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError> {
        let needle = query.to_lowercase();
        let state = self.state.read().await;

        let results: Vec<Post> = state
            .posts
            .values()
            .filter(|post| post.matches(&needle))
            .cloned()
            .collect();

        tracing::debug!(matches = results.len(), "Post search");
        Ok(results)
    }
}
