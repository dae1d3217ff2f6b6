//! Cryptographic Utilities
//!
//! Session ids are random, URL-safe tokens. The cookie carries
//! `<id>.<signature>` where the signature is HMAC-SHA256 over the id with the
//! server's session secret, so a client cannot forge or guess a valid id.

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Number of random bytes in a session id (encodes to 32 characters)
pub const SESSION_ID_BYTES: usize = 24;

/// Cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Fresh opaque session id, base64url without padding
pub fn random_session_id() -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(random_bytes(SESSION_ID_BYTES))
}

/// Standard base64 decoding, used for secrets supplied through the environment
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

/// HMAC-SHA256 of `data` under `key`
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    // HMAC accepts keys of any length
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Produce `<value>.<base64url(hmac)>`
///
/// ## Arguments
/// * `value` - Text to sign; must not be empty
/// * `secret` - HMAC key
///
/// ## Examples
/// ```rust
/// use platform::crypto::{sign, unsign};
///
/// let token = sign("abc", b"secret");
/// assert_eq!(unsign(&token, b"secret"), Some("abc"));
/// assert_eq!(unsign(&token, b"other"), None);
/// ```
pub fn sign(value: &str, secret: &[u8]) -> String {
    let signature = hmac_sha256(secret, value.as_bytes());
    format!(
        "{}.{}",
        value,
        general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Verify a token produced by [`sign`]
///
/// The comparison is constant-time.
///
/// ## Returns
/// * `Some(value)` - The signed value
/// * `None` - Malformed token or bad signature
pub fn unsign<'a>(token: &'a str, secret: &[u8]) -> Option<&'a str> {
    let (value, signature_b64) = token.rsplit_once('.')?;
    if value.is_empty() {
        return None;
    }

    let signature = general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .ok()?;

    let mut mac = HmacSha256::new_from_slice(secret).ok()?;
    mac.update(value.as_bytes());
    mac.verify_slice(&signature).ok()?;

    Some(value)
}
