//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod create_post;
pub mod get_post;
pub mod list_posts;
pub mod update_post;

pub use config::PostsConfig;
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use get_post::{GetPostUseCase, PostWithLatest};
pub use list_posts::ListPostsUseCase;
pub use update_post::{UpdatePostInput, UpdatePostUseCase};
