//! PostgreSQL Repository Implementations
//!
//! `users` is a regular table. `sessions` is used as a key-value store:
//! the session id maps to a JSONB blob with an absolute expiry.

use std::time::Duration;

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use platform::password::HashedPassword;
use sqlx::PgPool;
use sqlx::types::Json;

use crate::domain::entity::{
    session::SessionData,
    user::{NewUser, User},
};
use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::value_object::{session_id::SessionId, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let result = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (user_name, password)
            VALUES ($1, $2)
            RETURNING id, user_name, password, created_at, updated_at
            "#,
        )
        .bind(&user.user_name)
        .bind(user.password.as_phc_string())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => row.into_user(),
            Err(e) => Err(insert_error(e)),
        }
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, user_name, password, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_user_name(&self, user_name: &str) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, user_name, password, created_at, updated_at
            FROM users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn list_all(&self) -> AuthResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, user_name, password, created_at, updated_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }
}

// ============================================================================
// Session Store Implementation
// ============================================================================

impl SessionStore for PgAuthRepository {
    async fn load(&self, session_id: &SessionId) -> AuthResult<Option<SessionData>> {
        let now_ms = Utc::now().timestamp_millis();

        let data = sqlx::query_scalar::<_, Json<SessionData>>(
            "SELECT data FROM sessions WHERE session_id = $1 AND expires_at_ms > $2",
        )
        .bind(session_id.as_str())
        .bind(now_ms)
        .fetch_optional(&self.pool)
        .await?;

        Ok(data.map(|Json(data)| data))
    }

    async fn save(
        &self,
        session_id: &SessionId,
        data: &SessionData,
        ttl: Duration,
    ) -> AuthResult<()> {
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let expires_at_ms = Utc::now().timestamp_millis().saturating_add(ttl_ms);

        sqlx::query(
            r#"
            INSERT INTO sessions (session_id, data, expires_at_ms)
            VALUES ($1, $2, $3)
            ON CONFLICT (session_id)
            DO UPDATE SET data = EXCLUDED.data, expires_at_ms = EXCLUDED.expires_at_ms
            "#,
        )
        .bind(session_id.as_str())
        .bind(Json(data))
        .bind(expires_at_ms)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn destroy(&self, session_id: &SessionId) -> AuthResult<()> {
        sqlx::query("DELETE FROM sessions WHERE session_id = $1")
            .bind(session_id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at_ms <= $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

/// `users.user_name` is the only unique column besides the key
fn insert_error(err: sqlx::Error) -> AuthError {
    if is_unique_violation(&err) {
        AuthError::UserNameTaken
    } else {
        AuthError::Database(err)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    user_name: String,
    password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password = HashedPassword::from_phc_string(self.password)?;

        Ok(User {
            id: UserId::new(self.id),
            user_name: self.user_name,
            password,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct PgCode(&'static str);

    impl fmt::Display for PgCode {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "error with SQLSTATE {}", self.0)
        }
    }

    impl StdError for PgCode {}

    impl sqlx::error::DatabaseError for PgCode {
        fn message(&self) -> &str {
            "constraint violated"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.0))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            match self.0 {
                "23505" => sqlx::error::ErrorKind::UniqueViolation,
                "23502" => sqlx::error::ErrorKind::NotNullViolation,
                _ => sqlx::error::ErrorKind::Other,
            }
        }
    }

    #[test]
    fn test_duplicate_insert_is_user_name_taken() {
        let err = insert_error(sqlx::Error::Database(Box::new(PgCode("23505"))));
        assert!(matches!(err, AuthError::UserNameTaken));
    }

    #[test]
    fn test_other_insert_failures_stay_database_errors() {
        let err = insert_error(sqlx::Error::Database(Box::new(PgCode("23502"))));
        assert!(matches!(err, AuthError::Database(_)));

        let err = insert_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AuthError::Database(sqlx::Error::PoolTimedOut)));
    }
}
