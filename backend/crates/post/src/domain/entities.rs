//! Domain Entities

use chrono::{DateTime, Utc};

use crate::domain::value_objects::PostId;

/// Post stored in the post directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
