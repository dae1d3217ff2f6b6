//! Domain Layer - Entities and repository traits
//!
//! This layer contains:
//! - Domain entities (Post)
//! - Domain value objects (PostId)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
