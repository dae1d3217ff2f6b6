//! Create Post Use Case

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    post_repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(post_repo: Arc<R>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, title: &str) -> PostResult<Post> {
        let post = self.post_repo.create(title).await?;
        tracing::info!(post_id = %post.id, "Post created");
        Ok(post)
    }
}
