//! Password Hashing and Verification
//!
//! Argon2id with a random 128-bit salt per hash, stored as a PHC string.
//! Clear text is zeroized on drop and redacted from `Debug` output.
//!
//! Length or content policy is not enforced here; that belongs to the caller.

use std::fmt;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{self, SaltString},
};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a valid PHC string
    #[error("Invalid password hash format")]
    InvalidHashFormat,

    /// Verification failed for a reason other than a wrong password
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password as received from the client
///
/// Not `Clone`, so copies cannot be made by accident.
///
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("hunter22".to_string());
/// let hashed = password.hash().unwrap();
/// assert!(hashed.verify(&password).unwrap());
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Length in UTF-16 code units
    ///
    /// Characters outside the Basic Multilingual Plane count as two.
    ///
    /// ## Examples
    /// ```rust
    /// use platform::password::ClearTextPassword;
    ///
    /// assert_eq!(ClearTextPassword::new("ñé".to_string()).utf16_len(), 2);
    /// assert_eq!(ClearTextPassword::new("😀".to_string()).utf16_len(), 2);
    /// ```
    pub fn utf16_len(&self) -> usize {
        self.0.encode_utf16().count()
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with Argon2id default parameters (m=19456, t=2, p=1)
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(OsRng);

        let hash = Argon2::default()
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Argon2 hash in PHC string format (`$argon2id$v=19$m=...$salt$hash`)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a PHC string loaded from storage, rejecting malformed values
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Check a clear text password against this hash
    ///
    /// `Ok(false)` means the password is wrong. Any other failure, such as a
    /// corrupt hash, is an `Err`.
    pub fn verify(&self, password: &ClearTextPassword) -> Result<bool, PasswordHashError> {
        let parsed = PasswordHash::new(&self.hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordHashError::VerificationFailed(e.to_string())),
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}
