//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use std::time::Duration;

use crate::domain::entity::{
    session::SessionData,
    user::{NewUser, User},
};
use crate::domain::value_object::{session_id::SessionId, user_id::UserId};
use crate::error::AuthResult;

/// User directory
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return the stored row
    ///
    /// Fails with [`AuthError::UserNameTaken`](crate::error::AuthError::UserNameTaken)
    /// when the user name violates the uniqueness constraint.
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by exact user name
    async fn find_by_user_name(&self, user_name: &str) -> AuthResult<Option<User>>;

    /// All users ordered by id
    async fn list_all(&self) -> AuthResult<Vec<User>>;
}

/// Key-value session store
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Load unexpired session data
    async fn load(&self, session_id: &SessionId) -> AuthResult<Option<SessionData>>;

    /// Insert or replace session data with a fresh TTL
    async fn save(&self, session_id: &SessionId, data: &SessionData, ttl: Duration)
    -> AuthResult<()>;

    /// Delete a session; deleting an unknown id succeeds
    async fn destroy(&self, session_id: &SessionId) -> AuthResult<()>;

    /// Remove every expired session
    ///
    /// ## Returns
    /// Number of sessions removed.
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
