//! In-memory Repository Implementations
//!
//! Used by tests in this crate and, through the `test-support` feature, by
//! downstream crates. Same observable contract as the PostgreSQL repository.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entity::{
    session::SessionData,
    user::{NewUser, User},
};
use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::value_object::{session_id::SessionId, user_id::UserId};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct State {
    users: Vec<User>,
    last_id: i32,
    /// `None` expiry means the deadline does not fit in an `Instant`
    sessions: HashMap<String, (SessionData, Option<Instant>)>,
}

#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    state: Arc<RwLock<State>>,
    fail_destroy: Arc<AtomicBool>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn session_count(&self) -> usize {
        self.state.read().await.sessions.len()
    }

    /// Make every subsequent `destroy` fail
    pub fn fail_session_destroy(&self, fail: bool) {
        self.fail_destroy.store(fail, Ordering::SeqCst);
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.user_name == user.user_name) {
            return Err(AuthError::UserNameTaken);
        }

        state.last_id += 1;
        let now = Utc::now();
        let created = User {
            id: UserId::new(state.last_id),
            user_name: user.user_name.clone(),
            password: user.password.clone(),
            created_at: now,
            updated_at: now,
        };
        state.users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_user_name(&self, user_name: &str) -> AuthResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.user_name == user_name).cloned())
    }

    async fn list_all(&self) -> AuthResult<Vec<User>> {
        Ok(self.state.read().await.users.clone())
    }
}

impl SessionStore for MemoryAuthRepository {
    async fn load(&self, session_id: &SessionId) -> AuthResult<Option<SessionData>> {
        let state = self.state.read().await;
        let data = state
            .sessions
            .get(session_id.as_str())
            .filter(|(_, expires_at)| expires_at.is_none_or(|at| at > Instant::now()))
            .map(|(data, _)| data.clone());
        Ok(data)
    }

    async fn save(
        &self,
        session_id: &SessionId,
        data: &SessionData,
        ttl: Duration,
    ) -> AuthResult<()> {
        let expires_at = Instant::now().checked_add(ttl);
        self.state
            .write()
            .await
            .sessions
            .insert(session_id.as_str().to_string(), (data.clone(), expires_at));
        Ok(())
    }

    async fn destroy(&self, session_id: &SessionId) -> AuthResult<()> {
        if self.fail_destroy.load(Ordering::SeqCst) {
            return Err(AuthError::Internal("session store unavailable".to_string()));
        }
        self.state.write().await.sessions.remove(session_id.as_str());
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now = Instant::now();
        let mut state = self.state.write().await;
        let before = state.sessions.len();
        state
            .sessions
            .retain(|_, (_, expires_at)| expires_at.is_none_or(|at| at > now));
        Ok((before - state.sessions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cleanup_removes_only_expired() {
        let repo = MemoryAuthRepository::new();
        let data = SessionData {
            user_id: Some(UserId::new(1)),
        };
        let expired = SessionId::generate();
        let live = SessionId::generate();
        repo.save(&expired, &data, Duration::ZERO).await.unwrap();
        repo.save(&live, &data, Duration::from_secs(60)).await.unwrap();

        assert_eq!(repo.cleanup_expired().await.unwrap(), 1);
        assert_eq!(repo.session_count().await, 1);
        assert!(repo.load(&live).await.unwrap().is_some());
    }
}
