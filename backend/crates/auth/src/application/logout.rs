//! Logout Use Case
//!
//! Destroys the session record. The session is marked destroyed even when
//! the store fails, so the cookie is always cleared.

use std::sync::Arc;

use crate::domain::entity::session::Session;
use crate::domain::repository::SessionStore;

pub struct LogoutUseCase<S>
where
    S: SessionStore,
{
    session_store: Arc<S>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: Arc<S>) -> Self {
        Self { session_store }
    }

    /// ## Returns
    /// * `true` - The record is gone (or was never stored)
    /// * `false` - The store refused; the failure is logged
    pub async fn execute(&self, session: &mut Session) -> bool {
        let user_id = session.user_id();

        let destroyed = if session.is_fresh() {
            // Never stored, nothing to delete
            true
        } else {
            match self.session_store.destroy(session.id()).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to destroy session");
                    false
                }
            }
        };

        session.mark_destroyed();

        if destroyed {
            tracing::info!(user_id = ?user_id.map(|id| id.get()), "User logged out");
        }

        destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::application::me::MeUseCase;
    use crate::domain::entity::session::SessionData;
    use crate::domain::value_object::{session_id::SessionId, user_id::UserId};
    use crate::infra::memory::MemoryAuthRepository;

    async fn stored_session(repo: &MemoryAuthRepository) -> Session {
        let id = SessionId::generate();
        let data = SessionData {
            user_id: Some(UserId::new(1)),
        };
        repo.save(&id, &data, Duration::from_secs(60)).await.unwrap();
        Session::stored(id, data)
    }

    #[tokio::test]
    async fn test_logout_destroys_record() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let mut session = stored_session(&repo).await;
        assert_eq!(repo.session_count().await, 1);

        assert!(LogoutUseCase::new(repo.clone()).execute(&mut session).await);
        assert_eq!(repo.session_count().await, 0);
        assert!(session.is_destroyed());
    }

    #[tokio::test]
    async fn test_logout_then_me_is_none() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let mut session = stored_session(&repo).await;

        LogoutUseCase::new(repo.clone()).execute(&mut session).await;

        let me = MeUseCase::new(repo).execute(&session).await.unwrap();
        assert!(me.is_none());
    }

    #[tokio::test]
    async fn test_store_failure_returns_false() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let mut session = stored_session(&repo).await;
        repo.fail_session_destroy(true);

        assert!(!LogoutUseCase::new(repo.clone()).execute(&mut session).await);
        // Cookie is still cleared
        assert!(session.is_destroyed());
    }

    #[tokio::test]
    async fn test_logout_without_session() {
        let repo = Arc::new(MemoryAuthRepository::new());
        repo.fail_session_destroy(true);
        let mut session = Session::fresh();

        assert!(LogoutUseCase::new(repo).execute(&mut session).await);
    }
}
