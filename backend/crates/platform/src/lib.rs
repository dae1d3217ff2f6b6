//! Platform Crate - Technical Infrastructure
//!
//! Framework-level building blocks that carry no domain meaning:
//! - Password hashing (Argon2id, PHC strings)
//! - Session id generation and HMAC cookie signing
//! - `Cookie` / `Set-Cookie` header handling

pub mod cookie;
pub mod crypto;
pub mod password;
