//! Session Entity
//!
//! Server-side authentication state referenced by the session cookie.
//!
//! A session starts out [`fresh`](Session::fresh) and is only written to the
//! store once something changes it, so anonymous visitors never create
//! records. Reading a session does not extend its lifetime.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{session_id::SessionId, user_id::UserId};

/// Payload persisted in the session store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    /// Created for this request, not in the store
    Fresh,
    /// Loaded from the store, unchanged
    Stored,
    /// Needs to be written back
    Modified,
    /// Removed from the store; the cookie must be cleared
    Destroyed,
}

#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    data: SessionData,
    state: SessionState,
}

impl Session {
    pub fn fresh() -> Self {
        Self {
            id: SessionId::generate(),
            data: SessionData::default(),
            state: SessionState::Fresh,
        }
    }

    pub fn stored(id: SessionId, data: SessionData) -> Self {
        Self {
            id,
            data,
            state: SessionState::Stored,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn data(&self) -> &SessionData {
        &self.data
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.data.user_id
    }

    pub fn set_user_id(&mut self, user_id: UserId) {
        self.data.user_id = Some(user_id);
        self.state = SessionState::Modified;
    }

    pub fn mark_destroyed(&mut self) {
        self.data = SessionData::default();
        self.state = SessionState::Destroyed;
    }

    pub fn is_fresh(&self) -> bool {
        self.state == SessionState::Fresh
    }

    pub fn is_modified(&self) -> bool {
        self.state == SessionState::Modified
    }

    pub fn is_destroyed(&self) -> bool {
        self.state == SessionState::Destroyed
    }
}
