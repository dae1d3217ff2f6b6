//! Presentation Layer
//!
//! Operation handlers and DTOs.

pub mod dto;
pub mod handlers;

pub use handlers::AuthAppState;
