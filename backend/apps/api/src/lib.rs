//! API Server
//!
//! Wires the auth and post crates behind a single operation endpoint.
//! Uses `anyhow` for startup errors, but request-level errors use
//! `kernel::error::AppError`.

pub mod cleanup;
pub mod config;
pub mod graphql;
pub mod operation;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use router::{app_router, cors_layer};
pub use state::AppState;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
