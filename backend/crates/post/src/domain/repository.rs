//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::Post;
use crate::domain::value_objects::PostId;
use crate::error::PostResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// All posts ordered by id
    async fn list_all(&self) -> PostResult<Vec<Post>>;

    async fn find_by_id(&self, id: PostId) -> PostResult<Option<Post>>;

    /// Insert a post; id and timestamps are assigned by storage
    async fn create(&self, title: &str) -> PostResult<Post>;

    /// Replace the title and bump `updated_at`; `None` if the id is unknown
    async fn update_title(&self, id: PostId, title: &str) -> PostResult<Option<Post>>;

    /// Number of rows removed
    async fn delete(&self, id: PostId) -> PostResult<u64>;
}
