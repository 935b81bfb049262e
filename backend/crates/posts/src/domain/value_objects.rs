//! Domain Value Objects
//!
//! Immutable value types for the posts domain.

use serde::Serialize;
use std::fmt;

use crate::error::{PostError, PostResult};

/// Maximum slug length
const SLUG_MAX_LENGTH: usize = 200;

/// Characters that would break the `/posts/{slug}` URL
const SLUG_RESERVED: [char; 4] = ['/', '?', '#', '%'];

/// Fixed path segments under `/api/posts` that a slug would shadow
const SLUG_RESERVED_WORDS: [&str; 1] = ["latest"];

/// URL-safe unique identifier of a post
///
/// Non-Latin slugs are allowed; only whitespace and URL delimiters are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(raw: impl AsRef<str>) -> PostResult<Self> {
        let slug = raw.as_ref().trim();

        if slug.is_empty() {
            return Err(PostError::validation("Slug cannot be empty"));
        }

        if slug.chars().count() > SLUG_MAX_LENGTH {
            return Err(PostError::validation(format!(
                "Slug must be at most {} characters",
                SLUG_MAX_LENGTH
            )));
        }

        if slug
            .chars()
            .any(|c| c.is_whitespace() || SLUG_RESERVED.contains(&c))
        {
            return Err(PostError::validation(
                "Slug cannot contain spaces or URL delimiters",
            ));
        }

        if SLUG_RESERVED_WORDS.contains(&slug) {
            return Err(PostError::validation(format!("Slug `{}` is reserved", slug)));
        }

        Ok(Self(slug.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Trim a required text field, rejecting blank input
pub(crate) fn required_text(field: &str, value: String) -> PostResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PostError::validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Blank image URLs mean "no image"
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
