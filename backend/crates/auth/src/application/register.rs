//! Register Use Case
//!
//! Creates a user account and signs the session in as that user.

use std::sync::Arc;

use crate::application::user_response::UserResponse;
use crate::domain::entity::{session::Session, user::NewUser};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

/// Field name reported for a duplicate user name
pub const DUPLICATE_FIELD: &str = "username";
const DUPLICATE_MESSAGE: &str = "username already taken";

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(
        &self,
        credentials: Credentials,
        session: &mut Session,
    ) -> AuthResult<UserResponse> {
        if let Err(field_error) = credentials.validate_for_registration() {
            return Ok(field_error.into());
        }

        let Credentials {
            user_name,
            password,
        } = credentials;

        // Argon2 blocks for tens of milliseconds
        let password = tokio::task::spawn_blocking(move || password.hash())
            .await
            .map_err(|e| AuthError::Internal(format!("hashing task failed: {e}")))??;

        let new_user = NewUser {
            user_name,
            password,
        };

        let user = match self.user_repo.create(&new_user).await {
            Ok(user) => user,
            Err(AuthError::UserNameTaken) => {
                tracing::debug!(user_name = %new_user.user_name, "User name already taken");
                return Ok(UserResponse::field_error(DUPLICATE_FIELD, DUPLICATE_MESSAGE));
            }
            Err(e) => return Err(e),
        };

        session.set_user_id(user.id);

        tracing::info!(user_id = %user.id, user_name = %user.user_name, "User registered");

        Ok(UserResponse::User(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::credentials::{PASSWORD_FIELD, USER_NAME_FIELD};
    use crate::infra::memory::MemoryAuthRepository;

    async fn register(
        repo: &Arc<MemoryAuthRepository>,
        user_name: &str,
        password: &str,
    ) -> (UserResponse, Session) {
        let mut session = Session::fresh();
        let response = RegisterUseCase::new(repo.clone())
            .execute(
                Credentials::new(user_name.to_string(), password.to_string()),
                &mut session,
            )
            .await
            .unwrap();
        (response, session)
    }

    #[tokio::test]
    async fn test_short_user_name_inserts_nothing() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let (response, session) = register(&repo, "ab", "password123").await;

        assert_eq!(response.errors()[0].field, USER_NAME_FIELD);
        assert_eq!(repo.user_count().await, 0);
        assert!(session.is_fresh());
    }

    #[tokio::test]
    async fn test_short_password() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let (response, _) = register(&repo, "alice", "pw").await;

        assert_eq!(response.errors()[0].field, PASSWORD_FIELD);
        assert_eq!(repo.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_success_signs_session_in() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let (response, session) = register(&repo, "alice", "password123").await;

        let user = response.user().expect("user registered");
        assert_eq!(user.user_name, "alice");
        assert_eq!(session.user_id(), Some(user.id));
        assert!(session.is_modified());
    }

    #[tokio::test]
    async fn test_password_is_stored_hashed() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let (response, _) = register(&repo, "alice", "password123").await;

        let user = response.user().unwrap();
        assert_ne!(user.password.as_phc_string(), "password123");
        assert!(user.password.as_phc_string().starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_duplicate_user_name() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let (first, _) = register(&repo, "alice", "password123").await;
        assert!(first.user().is_some());

        let (second, session) = register(&repo, "alice", "different").await;
        let errors = second.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "username");
        assert_eq!(errors[0].message, "username already taken");

        assert_eq!(repo.user_count().await, 1);
        assert_eq!(session.user_id(), None);
    }

    #[tokio::test]
    async fn test_registration_scenario() {
        let repo = Arc::new(MemoryAuthRepository::new());

        let (short, _) = register(&repo, "ab", "password123").await;
        assert_eq!(short.errors()[0].field, "userName");

        let (ok, _) = register(&repo, "alice", "password123").await;
        assert_eq!(ok.user().unwrap().user_name, "alice");

        let (dup, _) = register(&repo, "alice", "different").await;
        assert_eq!(dup.errors()[0].field, "username");
        assert_eq!(dup.errors()[0].message, "username already taken");
    }
}
