//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - Operation handlers, DTOs
//!
//! ## Features
//! - Registration and login with user name + password
//! - Server-side sessions referenced by a signed cookie
//! - `me`, `logout` and a plain user listing
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Session ids are random and HMAC-signed in the cookie
//! - Sessions are stored only once they carry state

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::session::Session;
pub use error::{AuthError, AuthResult};
#[cfg(any(test, feature = "test-support"))]
pub use infra::memory::MemoryAuthRepository;
pub use infra::postgres::PgAuthRepository;
pub use presentation::AuthAppState;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
