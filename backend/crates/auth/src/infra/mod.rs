//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod postgres;

#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryAuthRepository;
pub use postgres::PgAuthRepository;
