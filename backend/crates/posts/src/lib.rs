//! Posts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, slug value object, repository trait
//! - `application/` - Use cases (list, read, create, update)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Store Model
//! - One `posts` table; the slug is the public lookup key and is unique
//! - Lists are ordered by creation time, newest first (id breaks ties)
//! - Slug collisions on create/update surface as `PostError::SlugTaken`
//! - No delete operation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::PostsConfig;
pub use domain::entities::{NewPost, Post, PostChanges};
pub use domain::repository::PostRepository;
pub use domain::value_objects::Slug;
pub use error::{PostError, PostResult};
pub use infra::memory::InMemoryPostRepository;
pub use infra::postgres::PgPostRepository;
pub use presentation::router::{posts_router, posts_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
