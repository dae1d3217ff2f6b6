//! Me Use Case
//!
//! Resolves the user the current session is signed in as.

use std::sync::Arc;

use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

pub struct MeUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> MeUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// `None` when the session is anonymous or its user no longer exists
    pub async fn execute(&self, session: &Session) -> AuthResult<Option<User>> {
        match session.user_id() {
            Some(user_id) => self.user_repo.find_by_id(user_id).await,
            None => Ok(None),
        }
    }
}
