//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::user_response::UserResponse;
use crate::domain::entity::user::User;
use crate::domain::value_object::{credentials::Credentials, field_error::FieldError};

// ============================================================================
// Input
// ============================================================================

/// Variables of `register` and `login`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNamePasswordInput {
    pub user_name: String,
    pub password: String,
}

impl From<UserNamePasswordInput> for Credentials {
    fn from(input: UserNamePasswordInput) -> Self {
        Credentials::new(input.user_name, input.password)
    }
}

// ============================================================================
// Output
// ============================================================================

/// Public view of a user; the password hash is never serialized
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_name: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            created_at: user.created_at,
            updated_at: user.updated_at,
            user_name: user.user_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

impl From<FieldError> for FieldErrorDto {
    fn from(error: FieldError) -> Self {
        Self {
            field: error.field,
            message: error.message,
        }
    }
}

/// `{ errors }` or `{ user }`, never both
#[derive(Debug, Clone, Serialize)]
pub struct UserResponseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

impl From<UserResponse> for UserResponseDto {
    fn from(response: UserResponse) -> Self {
        match response {
            UserResponse::Errors(errors) => Self {
                errors: Some(errors.into_iter().map(FieldErrorDto::from).collect()),
                user: None,
            },
            UserResponse::User(user) => Self {
                errors: None,
                user: Some(user.into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_id::UserId;
    use chrono::TimeZone;
    use platform::password::ClearTextPassword;

    fn sample_user() -> User {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        User {
            id: UserId::new(7),
            user_name: "alice".to_string(),
            password: ClearTextPassword::new("secret".to_string()).hash().unwrap(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_user_dto_hides_password() {
        let json = serde_json::to_value(UserDto::from(sample_user())).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["userName"], "alice");
        assert_eq!(json["createdAt"], "2024-01-02T03:04:05Z");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_errors_response_omits_user() {
        let dto = UserResponseDto::from(UserResponse::field_error("userName", "user not found"));
        let json = serde_json::to_value(dto).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "errors": [{ "field": "userName", "message": "user not found" }]
            })
        );
    }

    #[test]
    fn test_user_response_omits_errors() {
        let json = serde_json::to_value(UserResponseDto::from(UserResponse::User(sample_user())))
            .unwrap();

        assert!(json.get("errors").is_none());
        assert_eq!(json["user"]["userName"], "alice");
    }

    #[test]
    fn test_input_is_camel_case() {
        let input: UserNamePasswordInput =
            serde_json::from_str(r#"{"userName":"alice","password":"secret"}"#).unwrap();
        assert_eq!(input.user_name, "alice");
    }
}
