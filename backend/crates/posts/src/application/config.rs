//! Application Configuration
//!
//! Configuration for the posts application layer.

/// Posts application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostsConfig {
    /// Posts per page on the blog list
    pub page_size: u32,
    /// Default number of "latest posts" shown next to a post or accommodation
    pub latest_limit: u32,
    /// Upper bound for a caller-provided latest limit
    pub max_latest_limit: u32,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            page_size: 9,
            latest_limit: 5,
            max_latest_limit: 50,
        }
    }
}

impl PostsConfig {
    pub fn with_page_size(self, page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            ..self
        }
    }

    /// Clamp a requested latest-posts limit, falling back to the default
    pub fn latest_limit_or_default(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.latest_limit)
            .clamp(1, self.max_latest_limit)
    }
}
