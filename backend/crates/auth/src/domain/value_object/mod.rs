//! Value Object Module

pub mod credentials;
pub mod field_error;
pub mod session_id;
pub mod user_id;
