//! List Posts Use Case

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

pub struct ListPostsUseCase<R>
where
    R: PostRepository,
{
    post_repo: Arc<R>,
}

impl<R> ListPostsUseCase<R>
where
    R: PostRepository,
{
    pub fn new(post_repo: Arc<R>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self) -> PostResult<Vec<Post>> {
        self.post_repo.list_all().await
    }
}
