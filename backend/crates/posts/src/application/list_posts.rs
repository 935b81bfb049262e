//! List Posts Use Case

use kernel::pagination::{PageRequest, Paginated};
use std::sync::Arc;

use crate::application::config::PostsConfig;
use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

pub struct ListPostsUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
    config: Arc<PostsConfig>,
}

impl<R> ListPostsUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<PostsConfig>) -> Self {
        Self { repo, config }
    }

    /// One page of the blog list, with total count and total pages
    pub async fn page(&self, page: PageRequest) -> PostResult<Paginated<Post>> {
        let (items, total_count) =
            tokio::try_join!(self.repo.list_paginated(page), self.repo.count())?;

        tracing::debug!(
            page = page.page(),
            page_size = page.page_size(),
            returned = items.len(),
            total_count,
            "Listed posts"
        );

        Ok(Paginated::new(items, page, total_count))
    }

    /// Page request for the configured blog page size
    pub fn request_for(&self, raw_page: Option<&str>) -> PageRequest {
        PageRequest::from_query(raw_page, self.config.page_size)
    }

    /// Every post, newest first
    pub async fn all(&self) -> PostResult<Vec<Post>> {
        self.repo.list_all().await
    }

    /// Newest posts except `exclude_slug`
    pub async fn latest(&self, exclude_slug: &str, limit: Option<u32>) -> PostResult<Vec<Post>> {
        let limit = self.config.latest_limit_or_default(limit);
        self.repo.list_latest_excluding(exclude_slug, limit).await
    }
}
