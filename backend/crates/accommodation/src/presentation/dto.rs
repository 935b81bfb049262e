//! API DTOs (Data Transfer Objects)
//!
//! Listing payloads are served as-is; only query parameters live here.

use serde::Deserialize;

/// Query for the list endpoints (`?page=N`)
///
/// Kept as a string so that garbage falls back to page 1 instead of 400.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}
