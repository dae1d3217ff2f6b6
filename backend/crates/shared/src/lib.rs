//! Shared Kernel
//!
//! Vocabulary shared by every crate in the workspace:
//! - Unified error type and its HTTP classification
//! - Typed integer identifiers for database rows
//!
//! Nothing domain-specific lives here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
