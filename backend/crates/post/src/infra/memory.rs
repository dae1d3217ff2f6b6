//! In-memory Repository Implementation
//!
//! Same observable contract as [`PgPostRepository`](super::postgres::PgPostRepository).

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::PostId;
use crate::error::PostResult;

#[derive(Default)]
struct State {
    posts: Vec<Post>,
    last_id: i32,
}

#[derive(Clone, Default)]
pub struct MemoryPostRepository {
    state: Arc<RwLock<State>>,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn post_count(&self) -> usize {
        self.state.read().await.posts.len()
    }
}

impl PostRepository for MemoryPostRepository {
    async fn list_all(&self) -> PostResult<Vec<Post>> {
        // Ids are assigned in insertion order
        Ok(self.state.read().await.posts.clone())
    }

    async fn find_by_id(&self, id: PostId) -> PostResult<Option<Post>> {
        let state = self.state.read().await;
        Ok(state.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, title: &str) -> PostResult<Post> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let now = Utc::now();
        let post = Post {
            id: PostId::new(state.last_id),
            title: title.to_string(),
            created_at: now,
            updated_at: now,
        };
        state.posts.push(post.clone());
        Ok(post)
    }

    async fn update_title(&self, id: PostId, title: &str) -> PostResult<Option<Post>> {
        let mut state = self.state.write().await;
        let Some(post) = state.posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        post.title = title.to_string();
        post.updated_at = Utc::now();
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: PostId) -> PostResult<u64> {
        let mut state = self.state.write().await;
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        Ok((before - state.posts.len()) as u64)
    }
}
