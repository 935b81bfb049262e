//! Domain Entities
//!
//! Core business entities for the posts domain.

use chrono::{DateTime, Utc};
use kernel::id::PostId;

use crate::domain::value_objects::{Slug, optional_text, required_text};
use crate::error::PostResult;

/// A stored blog post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub slug: Slug,
    /// May embed HTML markup; rendered as-is by the front end
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub slug: Slug,
    pub content: String,
    pub image_url: Option<String>,
}

impl NewPost {
    pub fn new(
        title: String,
        slug: &str,
        content: String,
        image_url: Option<String>,
    ) -> PostResult<Self> {
        Ok(Self {
            title: required_text("Title", title)?,
            slug: Slug::new(slug)?,
            content: required_text("Content", content)?,
            image_url: optional_text(image_url),
        })
    }
}

/// Validated changes for an existing post
///
/// `image_url: None` keeps the stored image; `new_slug: None` keeps the slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub new_slug: Option<Slug>,
}

impl PostChanges {
    /// A `new_slug` equal to `current` (or blank) is treated as absent.
    pub fn new(
        current: &Slug,
        title: String,
        content: String,
        image_url: Option<String>,
        new_slug: Option<String>,
    ) -> PostResult<Self> {
        let new_slug = match optional_text(new_slug) {
            Some(raw) => Some(Slug::new(raw)?).filter(|slug| slug != current),
            None => None,
        };

        Ok(Self {
            title: required_text("Title", title)?,
            content: required_text("Content", content)?,
            image_url: optional_text(image_url),
            new_slug,
        })
    }

    /// Slug the row will carry after the update
    pub fn target_slug<'a>(&'a self, current: &'a Slug) -> &'a Slug {
        self.new_slug.as_ref().unwrap_or(current)
    }
}
