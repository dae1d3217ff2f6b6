//! Find Post Use Case

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::PostId;
use crate::error::PostResult;

pub struct FindPostUseCase<R>
where
    R: PostRepository,
{
    post_repo: Arc<R>,
}

impl<R> FindPostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(post_repo: Arc<R>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, id: PostId) -> PostResult<Option<Post>> {
        self.post_repo.find_by_id(id).await
    }
}
