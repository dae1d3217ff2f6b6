//! Session ID Value Object
//!
//! Opaque identifier of a server-side session record. It travels to the
//! client only inside a signed cookie.

use std::fmt;

use platform::crypto;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new random id
    pub fn generate() -> Self {
        Self(crypto::random_session_id())
    }

    /// Recover the id from a signed cookie value
    ///
    /// Returns `None` when the signature does not verify under `secret`.
    pub fn from_signed(token: &str, secret: &[u8]) -> Option<Self> {
        crypto::unsign(token, secret).map(|id| Self(id.to_string()))
    }

    /// Cookie value for this id
    pub fn sign(&self, secret: &[u8]) -> String {
        crypto::sign(&self.0, secret)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Session ids are bearer credentials; keep them out of logs.
impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(6).collect();
        write!(f, "SessionId({prefix}…)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn test_signed_roundtrip() {
        let id = SessionId::generate();
        let cookie = id.sign(SECRET);
        assert_eq!(SessionId::from_signed(&cookie, SECRET), Some(id));
    }

    #[test]
    fn test_rejects_foreign_signature() {
        let id = SessionId::generate();
        let cookie = id.sign(b"another-secret");
        assert_eq!(SessionId::from_signed(&cookie, SECRET), None);
    }

    #[test]
    fn test_debug_is_truncated() {
        let id = SessionId::generate();
        let debug = format!("{id:?}");
        assert!(!debug.contains(id.as_str()));
    }
}
