//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::PostId;
use crate::error::PostResult;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn list_all(&self) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, created_at, updated_at FROM posts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn find_by_id(&self, id: PostId) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, created_at, updated_at FROM posts WHERE id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn create(&self, title: &str) -> PostResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title)
            VALUES ($1)
            RETURNING id, title, created_at, updated_at
            "#,
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_post())
    }

    async fn update_title(&self, id: PostId, title: &str) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET title = $2, updated_at = now()
            WHERE id = $1
            RETURNING id, title, created_at, updated_at
            "#,
        )
        .bind(id.get())
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn delete(&self, id: PostId) -> PostResult<u64> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i32,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: PostId::new(self.id),
            title: self.title,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
