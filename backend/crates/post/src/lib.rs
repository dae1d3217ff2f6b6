//! Post Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - Operation handlers, DTOs
//!
//! Posts have a title and timestamps only. There is no ownership and no
//! pagination.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{PostError, PostResult};
#[cfg(any(test, feature = "test-support"))]
pub use infra::memory::MemoryPostRepository;
pub use infra::postgres::PgPostRepository;
pub use presentation::PostAppState;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
