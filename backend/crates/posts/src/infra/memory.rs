//! In-memory Repository Implementation
//!
//! Used by tests and by the API when started without a database
//! (`POSTS_STORE=memory`).

use std::sync::Arc;

use chrono::Utc;
use kernel::id::PostId;
use kernel::pagination::PageRequest;
use tokio::sync::RwLock;

use crate::domain::entities::{NewPost, Post, PostChanges};
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::Slug;
use crate::error::{PostError, PostResult};

#[derive(Debug, Default)]
struct Store {
    posts: Vec<Post>,
    next_id: i32,
}

impl Store {
    /// Newest first, id breaking ties
    fn ordered(&self) -> Vec<Post> {
        let mut posts = self.posts.clone();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        posts
    }
}

/// Repository keeping posts in process memory
#[derive(Clone, Default)]
pub struct InMemoryPostRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed post as-is (fixtures with fixed timestamps)
    pub async fn insert(&self, post: Post) {
        let mut store = self.store.write().await;
        store.next_id = store.next_id.max(post.id.get());
        store.posts.push(post);
    }
}

impl PostRepository for InMemoryPostRepository {
    async fn list_paginated(&self, page: PageRequest) -> PostResult<Vec<Post>> {
        let store = self.store.read().await;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);

        Ok(store.ordered().into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self) -> PostResult<i64> {
        let store = self.store.read().await;
        Ok(store.posts.len() as i64)
    }

    async fn list_all(&self) -> PostResult<Vec<Post>> {
        Ok(self.store.read().await.ordered())
    }

    async fn find_by_slug(&self, slug: &Slug) -> PostResult<Option<Post>> {
        let store = self.store.read().await;
        Ok(store.posts.iter().find(|p| &p.slug == slug).cloned())
    }

    async fn create(&self, post: NewPost) -> PostResult<Post> {
        let mut store = self.store.write().await;

        if store.posts.iter().any(|p| p.slug == post.slug) {
            return Err(PostError::SlugTaken(post.slug.into_inner()));
        }

        store.next_id += 1;
        let created = Post {
            id: PostId::new(store.next_id),
            title: post.title,
            slug: post.slug,
            content: post.content,
            image_url: post.image_url,
            created_at: Utc::now(),
        };
        store.posts.push(created.clone());

        Ok(created)
    }

    async fn update(&self, slug: &Slug, changes: PostChanges) -> PostResult<Post> {
        let mut store = self.store.write().await;
        let target = changes.target_slug(slug).clone();

        let index = store
            .posts
            .iter()
            .position(|p| &p.slug == slug)
            .ok_or(PostError::NotFound)?;

        if store
            .posts
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p.slug == target)
        {
            return Err(PostError::SlugTaken(target.into_inner()));
        }

        let post = &mut store.posts[index];
        post.title = changes.title;
        post.content = changes.content;
        if let Some(image_url) = changes.image_url {
            post.image_url = Some(image_url);
        }
        post.slug = target;

        Ok(post.clone())
    }

    async fn list_latest_excluding(
        &self,
        exclude_slug: &str,
        limit: u32,
    ) -> PostResult<Vec<Post>> {
        let store = self.store.read().await;
        Ok(store
            .ordered()
            .into_iter()
            .filter(|p| p.slug.as_str() != exclude_slug)
            .take(limit as usize)
            .collect())
    }
}
