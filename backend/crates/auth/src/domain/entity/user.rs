//! User Entity

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::user_id::UserId;

/// Row of the user directory
///
/// `user_name` is unique across all users.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub user_name: String,
    pub password: HashedPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload; the id and timestamps are assigned by storage
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: String,
    pub password: HashedPassword,
}
