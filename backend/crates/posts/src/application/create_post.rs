//! Create Post Use Case (admin "new post" form)

use std::sync::Arc;

use crate::domain::entities::{NewPost, Post};
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

/// Raw form input
#[derive(Debug, Clone)]
pub struct CreatePostInput {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub image_url: Option<String>,
}

pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreatePostInput) -> PostResult<Post> {
        let new_post = NewPost::new(input.title, &input.slug, input.content, input.image_url)?;

        let post = self.repo.create(new_post).await?;

        tracing::info!(post_id = %post.id, slug = %post.slug, "Post created");

        Ok(post)
    }
}
