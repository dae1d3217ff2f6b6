//! Session Use Case
//!
//! Loads the session named by the request cookie and writes it back after
//! the operation has run.

use std::sync::Arc;

use platform::cookie::is_valid_cookie_name;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::session_id::SessionId;
use crate::error::{AuthError, AuthResult};

/// What the response must do with the session cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCookie {
    Unchanged,
    Set(String),
    Clear(String),
}

pub struct SessionUseCase<S>
where
    S: SessionStore,
{
    session_store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SessionUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_store,
            config,
        }
    }

    /// Session for the given cookie value
    ///
    /// ## Arguments
    /// * `cookie_value` - Raw value of the session cookie, if the request had one
    ///
    /// ## Returns
    /// The stored session, or a fresh anonymous one when the cookie is
    /// missing, badly signed, or names an unknown/expired id. `Err` only for
    /// store failures.
    pub async fn resolve(&self, cookie_value: Option<&str>) -> AuthResult<Session> {
        let Some(token) = cookie_value else {
            return Ok(Session::fresh());
        };

        let Some(session_id) = SessionId::from_signed(token, &self.config.session_secret) else {
            tracing::debug!("Ignoring session cookie with invalid signature");
            return Ok(Session::fresh());
        };

        match self.session_store.load(&session_id).await? {
            Some(data) => Ok(Session::stored(session_id, data)),
            None => {
                tracing::debug!(session_id = ?session_id, "Session not found or expired");
                Ok(Session::fresh())
            }
        }
    }

    /// Persist a modified session and decide on the cookie
    ///
    /// Unmodified sessions are not written back, so reads never extend the
    /// TTL.
    pub async fn commit(&self, session: &Session) -> AuthResult<SessionCookie> {
        let cookie = self.config.cookie();

        if session.is_destroyed() {
            return Ok(SessionCookie::Clear(cookie.build_delete_cookie()));
        }

        if !session.is_modified() {
            return Ok(SessionCookie::Unchanged);
        }

        // A record the client can never reference must not be written
        if !is_valid_cookie_name(&cookie.name) {
            return Err(AuthError::Internal(format!(
                "invalid session cookie name: {:?}",
                cookie.name
            )));
        }

        self.session_store
            .save(session.id(), session.data(), self.config.session_ttl)
            .await?;

        let value = session.id().sign(&self.config.session_secret);
        Ok(SessionCookie::Set(cookie.build_set_cookie(&value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_id::UserId;
    use crate::infra::memory::MemoryAuthRepository;

    fn use_case(repo: &Arc<MemoryAuthRepository>) -> SessionUseCase<MemoryAuthRepository> {
        SessionUseCase::new(repo.clone(), Arc::new(AuthConfig::development()))
    }

    fn cookie_value(set_cookie: &str) -> &str {
        let first = set_cookie.split(';').next().unwrap();
        first.split_once('=').unwrap().1
    }

    #[tokio::test]
    async fn test_no_cookie_is_fresh() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let session = use_case(&repo).resolve(None).await.unwrap();
        assert!(session.is_fresh());
    }

    #[tokio::test]
    async fn test_anonymous_session_is_not_saved() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let uc = use_case(&repo);

        let session = uc.resolve(None).await.unwrap();
        assert_eq!(uc.commit(&session).await.unwrap(), SessionCookie::Unchanged);
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_commit_then_resolve() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let uc = use_case(&repo);

        let mut session = uc.resolve(None).await.unwrap();
        session.set_user_id(UserId::new(5));

        let SessionCookie::Set(set_cookie) = uc.commit(&session).await.unwrap() else {
            panic!("expected Set-Cookie");
        };
        assert!(set_cookie.starts_with("qid="));
        assert_eq!(repo.session_count().await, 1);

        let restored = uc.resolve(Some(cookie_value(&set_cookie))).await.unwrap();
        assert!(!restored.is_fresh());
        assert_eq!(restored.user_id(), Some(UserId::new(5)));
        assert_eq!(restored.id(), session.id());

        // Reading does not write back
        assert_eq!(uc.commit(&restored).await.unwrap(), SessionCookie::Unchanged);
    }

    #[tokio::test]
    async fn test_tampered_cookie_is_ignored() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let uc = use_case(&repo);

        let mut session = Session::fresh();
        session.set_user_id(UserId::new(5));
        uc.commit(&session).await.unwrap();

        let forged = format!("{}.AAAA", session.id().as_str());
        let resolved = uc.resolve(Some(&forged)).await.unwrap();
        assert!(resolved.is_fresh());
        assert_eq!(resolved.user_id(), None);
    }

    #[tokio::test]
    async fn test_signed_but_unknown_id_is_fresh() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let config = Arc::new(AuthConfig::development());
        let uc = SessionUseCase::new(repo.clone(), config.clone());

        let token = SessionId::generate().sign(&config.session_secret);
        assert!(uc.resolve(Some(&token)).await.unwrap().is_fresh());
    }

    #[tokio::test]
    async fn test_destroyed_session_clears_cookie() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let uc = use_case(&repo);

        let mut session = Session::fresh();
        session.mark_destroyed();

        let SessionCookie::Clear(cookie) = uc.commit(&session).await.unwrap() else {
            panic!("expected cleared cookie");
        };
        assert!(cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_invalid_cookie_name_writes_nothing() {
        let repo = Arc::new(MemoryAuthRepository::new());
        let config = AuthConfig {
            session_cookie_name: "q\x7fid".to_string(),
            ..AuthConfig::development()
        };
        let uc = SessionUseCase::new(repo.clone(), Arc::new(config));

        let mut session = Session::fresh();
        session.set_user_id(UserId::new(1));

        assert!(matches!(uc.commit(&session).await, Err(AuthError::Internal(_))));
        assert_eq!(repo.session_count().await, 0);
    }
}
