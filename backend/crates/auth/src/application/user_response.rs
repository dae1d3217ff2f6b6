//! User Response
//!
//! Outcome of `register` and `login`. Expected failures are data, not
//! errors: either a list of field errors or the authenticated user.

use crate::domain::entity::user::User;
use crate::domain::value_object::field_error::FieldError;

#[derive(Debug, Clone)]
pub enum UserResponse {
    Errors(Vec<FieldError>),
    User(User),
}

impl UserResponse {
    pub fn field_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Errors(vec![FieldError::new(field, message)])
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::User(user) => Some(user),
            Self::Errors(_) => None,
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Errors(errors) => errors,
            Self::User(_) => &[],
        }
    }
}

impl From<FieldError> for UserResponse {
    fn from(error: FieldError) -> Self {
        Self::Errors(vec![error])
    }
}
