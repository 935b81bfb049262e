//! Update Post Use Case (admin "edit post" form)

use std::sync::Arc;

use crate::domain::entities::{Post, PostChanges};
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::Slug;
use crate::error::{PostError, PostResult};

/// Raw form input
#[derive(Debug, Clone)]
pub struct UpdatePostInput {
    /// Slug the post currently has
    pub slug: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub new_slug: Option<String>,
}

pub struct UpdatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> UpdatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdatePostInput) -> PostResult<Post> {
        let current = Slug::new(&input.slug).map_err(|_| PostError::NotFound)?;
        let changes = PostChanges::new(
            &current,
            input.title,
            input.content,
            input.image_url,
            input.new_slug,
        )?;
        let renamed = changes.new_slug.is_some();

        let post = self.repo.update(&current, changes).await?;

        tracing::info!(
            post_id = %post.id,
            from = %current,
            slug = %post.slug,
            renamed,
            "Post updated"
        );

        Ok(post)
    }
}
