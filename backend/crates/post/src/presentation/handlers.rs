//! Operation Handlers

use std::sync::Arc;

use crate::application::{
    CreatePostUseCase, DeletePostUseCase, FindPostUseCase, ListPostsUseCase, UpdatePostUseCase,
};
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::PostId;
use crate::error::PostResult;
use crate::presentation::dto::{CreatePostInput, PostDto, PostIdInput, UpdatePostInput};

/// Shared state for post handlers
pub struct PostAppState<R>
where
    R: PostRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> PostAppState<R>
where
    R: PostRepository + Send + Sync + 'static,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

impl<R> Clone for PostAppState<R>
where
    R: PostRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// `posts`
pub async fn posts<R>(state: &PostAppState<R>) -> PostResult<Vec<PostDto>>
where
    R: PostRepository + Send + Sync + 'static,
{
    let posts = ListPostsUseCase::new(state.repo.clone()).execute().await?;
    Ok(posts.into_iter().map(PostDto::from).collect())
}

/// `post`
pub async fn post<R>(state: &PostAppState<R>, input: PostIdInput) -> PostResult<Option<PostDto>>
where
    R: PostRepository + Send + Sync + 'static,
{
    let post = FindPostUseCase::new(state.repo.clone())
        .execute(PostId::new(input.id))
        .await?;
    Ok(post.map(PostDto::from))
}

/// `createPost`
pub async fn create_post<R>(state: &PostAppState<R>, input: CreatePostInput) -> PostResult<PostDto>
where
    R: PostRepository + Send + Sync + 'static,
{
    let post = CreatePostUseCase::new(state.repo.clone())
        .execute(&input.title)
        .await?;
    Ok(post.into())
}

/// `updatePost`
pub async fn update_post<R>(
    state: &PostAppState<R>,
    input: UpdatePostInput,
) -> PostResult<Option<PostDto>>
where
    R: PostRepository + Send + Sync + 'static,
{
    let post = UpdatePostUseCase::new(state.repo.clone())
        .execute(PostId::new(input.id), input.title.as_deref())
        .await?;
    Ok(post.map(PostDto::from))
}

/// `deletePost`
pub async fn delete_post<R>(state: &PostAppState<R>, input: PostIdInput) -> PostResult<bool>
where
    R: PostRepository + Send + Sync + 'static,
{
    DeletePostUseCase::new(state.repo.clone())
        .execute(PostId::new(input.id))
        .await
}
