//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::pagination::PageRequest;

use crate::domain::entities::{NewPost, Post, PostChanges};
use crate::domain::value_objects::Slug;
use crate::error::PostResult;

/// Post repository trait
///
/// Every list is ordered by `created_at` descending, then `id` descending.
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// One page of posts
    async fn list_paginated(&self, page: PageRequest) -> PostResult<Vec<Post>>;

    /// Total number of posts
    async fn count(&self) -> PostResult<i64>;

    /// Every post
    async fn list_all(&self) -> PostResult<Vec<Post>>;

    /// Find a post by slug
    async fn find_by_slug(&self, slug: &Slug) -> PostResult<Option<Post>>;

    /// Insert a post; fails with `SlugTaken` if the slug exists
    async fn create(&self, post: NewPost) -> PostResult<Post>;

    /// Update the post currently at `slug`
    ///
    /// Fails with `NotFound` if no such post, `SlugTaken` if `new_slug`
    /// belongs to another post. Either failure leaves every row unchanged.
    async fn update(&self, slug: &Slug, changes: PostChanges) -> PostResult<Post>;

    /// Newest posts except the one with `exclude_slug`
    async fn list_latest_excluding(&self, exclude_slug: &str, limit: u32)
    -> PostResult<Vec<Post>>;
}
