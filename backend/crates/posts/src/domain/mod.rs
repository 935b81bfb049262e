//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Post, NewPost, PostChanges)
//! - Domain value objects (Slug)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
