//! Get Post Use Case

use std::sync::Arc;

use crate::application::config::PostsConfig;
use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::Slug;
use crate::error::{PostError, PostResult};

/// A post plus the newest other posts
#[derive(Debug, Clone)]
pub struct PostWithLatest {
    pub post: Post,
    pub latest: Vec<Post>,
}

pub struct GetPostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
    config: Arc<PostsConfig>,
}

impl<R> GetPostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<PostsConfig>) -> Self {
        Self { repo, config }
    }

    /// Post detail page: the post and its sidebar, loaded concurrently
    ///
    /// A malformed slug is simply not found.
    pub async fn with_latest(&self, raw_slug: &str) -> PostResult<PostWithLatest> {
        let slug = Slug::new(raw_slug).map_err(|_| PostError::NotFound)?;

        let (post, latest) = tokio::try_join!(
            self.repo.find_by_slug(&slug),
            self.repo
                .list_latest_excluding(slug.as_str(), self.config.latest_limit),
        )?;

        let post = post.ok_or(PostError::NotFound)?;
        Ok(PostWithLatest { post, latest })
    }
}
