//! Credentials Value Object
//!
//! User name and clear text password as submitted to `register` / `login`.

use platform::password::ClearTextPassword;

use super::field_error::FieldError;

/// Both fields must be strictly longer than this many UTF-16 code units
pub const MIN_LENGTH_EXCLUSIVE: usize = 2;

pub const USER_NAME_FIELD: &str = "userName";
pub const PASSWORD_FIELD: &str = "password";

const TOO_SHORT_MESSAGE: &str = "length must be greater than 2";

#[derive(Debug)]
pub struct Credentials {
    pub user_name: String,
    pub password: ClearTextPassword,
}

impl Credentials {
    pub fn new(user_name: String, password: String) -> Self {
        Self {
            user_name,
            password: ClearTextPassword::new(password),
        }
    }

    /// Length rules applied before an account is created
    ///
    /// Lengths are UTF-16 code units, the unit web clients measure strings
    /// in. The user name is checked first.
    ///
    /// ## Returns
    /// The first failing field, or `Ok(())` when both are long enough.
    pub fn validate_for_registration(&self) -> Result<(), FieldError> {
        if self.user_name.encode_utf16().count() <= MIN_LENGTH_EXCLUSIVE {
            return Err(FieldError::new(USER_NAME_FIELD, TOO_SHORT_MESSAGE));
        }
        if self.password.utf16_len() <= MIN_LENGTH_EXCLUSIVE {
            return Err(FieldError::new(PASSWORD_FIELD, TOO_SHORT_MESSAGE));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_user_name() {
        for name in ["", "a", "ab"] {
            let err = Credentials::new(name.to_string(), "password123".to_string())
                .validate_for_registration()
                .unwrap_err();
            assert_eq!(err.field, USER_NAME_FIELD);
            assert_eq!(err.message, "length must be greater than 2");
        }
    }

    #[test]
    fn test_short_password() {
        for password in ["", "a", "ab"] {
            let err = Credentials::new("alice".to_string(), password.to_string())
                .validate_for_registration()
                .unwrap_err();
            assert_eq!(err.field, PASSWORD_FIELD);
        }
    }

    #[test]
    fn test_user_name_reported_before_password() {
        let err = Credentials::new("ab".to_string(), "x".to_string())
            .validate_for_registration()
            .unwrap_err();
        assert_eq!(err.field, USER_NAME_FIELD);
    }

    #[test]
    fn test_three_characters_is_enough() {
        assert!(
            Credentials::new("abc".to_string(), "xyz".to_string())
                .validate_for_registration()
                .is_ok()
        );
    }

    #[test]
    fn test_length_is_not_bytes() {
        // 3 code units, 6 bytes
        assert!(
            Credentials::new("äöü".to_string(), "pass".to_string())
                .validate_for_registration()
                .is_ok()
        );
    }

    #[test]
    fn test_astral_characters_count_twice() {
        // Two emoji are four UTF-16 code units
        assert!(
            Credentials::new("😀😀".to_string(), "password123".to_string())
                .validate_for_registration()
                .is_ok()
        );
        assert!(
            Credentials::new("alice".to_string(), "😀😀".to_string())
                .validate_for_registration()
                .is_ok()
        );
    }

    #[test]
    fn test_single_astral_character_is_too_short() {
        let err = Credentials::new("😀".to_string(), "password123".to_string())
            .validate_for_registration()
            .unwrap_err();
        assert_eq!(err.field, USER_NAME_FIELD);
    }
}
