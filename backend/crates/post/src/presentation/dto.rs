//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Post;

/// Variables of `post` and `deletePost`
#[derive(Debug, Clone, Deserialize)]
pub struct PostIdInput {
    pub id: i32,
}

/// Variables of `createPost`
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostInput {
    pub title: String,
}

/// Variables of `updatePost`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePostInput {
    pub id: i32,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.get(),
            created_at: post.created_at,
            updated_at: post.updated_at,
            title: post.title,
        }
    }
}
