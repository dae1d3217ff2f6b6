//! Login Use Case
//!
//! Verifies credentials and signs the session in.

use std::sync::Arc;

use crate::application::user_response::UserResponse;
use crate::domain::entity::session::Session;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::credentials::{Credentials, USER_NAME_FIELD};
use crate::error::{AuthError, AuthResult};

const UNKNOWN_USER_MESSAGE: &str = "user not found";
// Attached to the userName field, like the unknown-user case
const WRONG_PASSWORD_MESSAGE: &str = "Password not correct";

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> LoginUseCase<U>
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
        let Some(user) = self
            .user_repo
            .find_by_user_name(&credentials.user_name)
            .await?
        else {
            return Ok(UserResponse::field_error(USER_NAME_FIELD, UNKNOWN_USER_MESSAGE));
        };

        let stored = user.password.clone();
        let password = credentials.password;
        let valid = tokio::task::spawn_blocking(move || stored.verify(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("verification task failed: {e}")))??;

        if !valid {
            tracing::warn!(user_id = %user.id, "Invalid login attempt");
            return Ok(UserResponse::field_error(USER_NAME_FIELD, WRONG_PASSWORD_MESSAGE));
        }

        session.set_user_id(user.id);

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(UserResponse::User(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::RegisterUseCase;
    use crate::infra::memory::MemoryAuthRepository;

    async fn seeded_repo() -> Arc<MemoryAuthRepository> {
        let repo = Arc::new(MemoryAuthRepository::new());
        RegisterUseCase::new(repo.clone())
            .execute(
                Credentials::new("alice".to_string(), "password123".to_string()),
                &mut Session::fresh(),
            )
            .await
            .unwrap();
        repo
    }

    async fn login(
        repo: &Arc<MemoryAuthRepository>,
        user_name: &str,
        password: &str,
        session: &mut Session,
    ) -> UserResponse {
        LoginUseCase::new(repo.clone())
            .execute(
                Credentials::new(user_name.to_string(), password.to_string()),
                session,
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_unknown_user_leaves_session_untouched() {
        let repo = seeded_repo().await;
        let mut session = Session::fresh();

        let response = login(&repo, "bob", "password123", &mut session).await;

        assert_eq!(response.errors()[0].field, "userName");
        assert_eq!(response.errors()[0].message, "user not found");
        assert!(session.is_fresh());
        assert_eq!(session.user_id(), None);
    }

    #[tokio::test]
    async fn test_wrong_password_reported_on_user_name() {
        let repo = seeded_repo().await;
        let mut session = Session::fresh();

        let response = login(&repo, "alice", "wrong-password", &mut session).await;

        assert_eq!(response.errors()[0].field, "userName");
        assert_eq!(response.errors()[0].message, "Password not correct");
        assert_eq!(session.user_id(), None);
    }

    #[tokio::test]
    async fn test_correct_login_sets_user_id() {
        let repo = seeded_repo().await;
        let mut session = Session::fresh();

        let response = login(&repo, "alice", "password123", &mut session).await;

        let user = response.user().expect("logged in");
        assert_eq!(user.user_name, "alice");
        assert_eq!(session.user_id(), Some(user.id));
        assert!(session.is_modified());
    }

    #[tokio::test]
    async fn test_login_does_not_apply_registration_length_rules() {
        let repo = seeded_repo().await;
        let mut session = Session::fresh();

        let response = login(&repo, "al", "pw", &mut session).await;
        assert_eq!(response.errors()[0].message, "user not found");
    }
}
