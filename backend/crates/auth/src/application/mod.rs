//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod list_users;
pub mod login;
pub mod logout;
pub mod me;
pub mod register;
pub mod session;
pub mod user_response;

// Re-exports
pub use config::AuthConfig;
pub use list_users::ListUsersUseCase;
pub use login::LoginUseCase;
pub use logout::LogoutUseCase;
pub use me::MeUseCase;
pub use register::RegisterUseCase;
pub use session::{SessionCookie, SessionUseCase};
pub use user_response::UserResponse;
