//! Update Post Use Case
//!
//! `title` is optional. Without it the post is returned as stored and
//! `updated_at` is left alone.

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::PostId;
use crate::error::PostResult;

pub struct UpdatePostUseCase<R>
where
    R: PostRepository,
{
    post_repo: Arc<R>,
}

impl<R> UpdatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(post_repo: Arc<R>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, id: PostId, title: Option<&str>) -> PostResult<Option<Post>> {
        let Some(title) = title else {
            return self.post_repo.find_by_id(id).await;
        };

        let updated = self.post_repo.update_title(id, title).await?;
        if updated.is_some() {
            tracing::info!(post_id = %id, "Post updated");
        }
        Ok(updated)
    }
}
