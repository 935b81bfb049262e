//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::PostId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Post;

/// A post as returned by every read endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug.into_inner(),
            content: post.content,
            image_url: post.image_url,
            created_at: post.created_at,
        }
    }
}

/// Response for GET /api/posts/{slug}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub post: PostResponse,
    pub latest_posts: Vec<PostResponse>,
}

/// Query for GET /api/posts
///
/// `page` stays a string so that garbage falls back to page 1 instead of 400.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

/// Query for GET /api/posts/latest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatestQuery {
    #[serde(default)]
    pub exclude: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Request for POST /api/posts
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Request for PUT /api/posts/{slug}
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub new_slug: Option<String>,
}
