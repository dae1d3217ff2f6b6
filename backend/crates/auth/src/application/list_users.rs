//! List Users Use Case
//!
//! Every user in the directory. There is no authorization check and no
//! pagination.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

pub struct ListUsersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> ListUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self) -> AuthResult<Vec<User>> {
        self.user_repo.list_all().await
    }
}
