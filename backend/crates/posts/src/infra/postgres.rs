//! PostgreSQL Repository Implementation

use crate::domain::entities::{NewPost, Post, PostChanges};
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::Slug;
use crate::error::{PostError, PostResult};
use kernel::error::conversions::is_unique_violation;
use kernel::id::PostId;
use kernel::pagination::PageRequest;
use sqlx::PgPool;

const POST_COLUMNS: &str = "id, title, slug, content, image_url, created_at";

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map a write error, turning a unique violation on `slug` into `SlugTaken`
fn map_write_error(err: sqlx::Error, slug: &Slug) -> PostError {
    if is_unique_violation(&err) {
        PostError::SlugTaken(slug.to_string())
    } else {
        PostError::Database(err)
    }
}

impl PostRepository for PgPostRepository {
    async fn list_paginated(&self, page: PageRequest) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn count(&self) -> PostResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn list_all(&self) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn find_by_slug(&self, slug: &Slug) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn create(&self, post: NewPost) -> PostResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            INSERT INTO posts (title, slug, content, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(&post.title)
        .bind(post.slug.as_str())
        .bind(&post.content)
        .bind(post.image_url.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &post.slug))?;

        Ok(row.into_post())
    }

    async fn update(&self, slug: &Slug, changes: PostChanges) -> PostResult<Post> {
        let target = changes.target_slug(slug).clone();

        // Single statement: a collision or a missing row changes nothing.
        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            UPDATE posts
            SET title = $1,
                content = $2,
                image_url = COALESCE($3, image_url),
                slug = $4
            WHERE slug = $5
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(&changes.title)
        .bind(&changes.content)
        .bind(changes.image_url.as_deref())
        .bind(target.as_str())
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &target))?;

        row.map(PostRow::into_post).ok_or(PostError::NotFound)
    }

    async fn list_latest_excluding(
        &self,
        exclude_slug: &str,
        limit: u32,
    ) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE slug <> $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2"
        ))
        .bind(exclude_slug)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct PostRow {
    id: i32,
    title: String,
    slug: String,
    content: String,
    image_url: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: PostId::new(self.id),
            title: self.title,
            slug: Slug::from_db(self.slug),
            content: self.content,
            image_url: self.image_url,
            created_at: self.created_at,
        }
    }
}
