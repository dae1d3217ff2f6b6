//! Delete Post Use Case

use std::sync::Arc;

use crate::domain::repository::PostRepository;
use crate::domain::value_objects::PostId;
use crate::error::PostResult;

pub struct DeletePostUseCase<R>
where
    R: PostRepository,
{
    post_repo: Arc<R>,
}

impl<R> DeletePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(post_repo: Arc<R>) -> Self {
        Self { post_repo }
    }

    /// `true` once the delete ran, whether or not a row matched
    pub async fn execute(&self, id: PostId) -> PostResult<bool> {
        let deleted = self.post_repo.delete(id).await?;
        tracing::debug!(post_id = %id, rows = deleted, "Post delete executed");
        Ok(true)
    }
}
