//! Server Configuration
//!
//! Everything the binary reads from the environment (after `.env`).

use std::net::SocketAddr;

use accommodation::AccommodationConfig;
use anyhow::Context;
use auth::AuthConfig;
use posts::PostsConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

/// Where posts are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostsStore {
    Postgres { database_url: String },
    /// Process memory; data is lost on restart
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub db_max_connections: u32,
    pub frontend_origins: Vec<String>,
    pub posts_store: PostsStore,
    pub posts: PostsConfig,
    pub accommodation: AccommodationConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:31113")?;

        let db_max_connections = match var("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let posts_store = match var("POSTS_STORE").as_deref() {
            Some("memory") => PostsStore::Memory,
            Some("postgres") | None => PostsStore::Postgres {
                database_url: var("DATABASE_URL")
                    .context("DATABASE_URL must be set in environment")?,
            },
            Some(other) => anyhow::bail!("POSTS_STORE must be `postgres` or `memory`, got `{other}`"),
        };

        let mut posts = PostsConfig::default();
        if let Some(raw) = var("POSTS_PAGE_SIZE") {
            let page_size: u32 = raw
                .parse()
                .context("POSTS_PAGE_SIZE must be a positive integer")?;
            posts = posts.with_page_size(page_size);
        }

        let mut accommodation = AccommodationConfig::default();
        if let Some(base) = var("ACCOMMODATION_API_BASE") {
            accommodation = accommodation.with_gateway_base(&base);
        }
        if let Some(base) = var("REVIEW_API_BASE") {
            accommodation = accommodation.with_review_base(&base);
        }
        if let Some(model) = var("REVIEW_MODEL") {
            accommodation = accommodation.with_review_model(model);
        }

        let mut auth = if cfg!(debug_assertions) {
            AuthConfig::development()
        } else {
            AuthConfig::default()
        };
        if let Some(base) = var("IDENTITY_API_BASE") {
            auth = auth.with_identity_base(&base);
        }

        Ok(Self {
            bind_addr,
            db_max_connections,
            frontend_origins,
            posts_store,
            posts,
            accommodation,
            auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("DATABASE_URL", "postgres://localhost/blog")]).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:31113".parse().unwrap());
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.frontend_origins.len(), 2);
        assert_eq!(config.posts.page_size, 9);
        assert_eq!(config.accommodation.list_page_size, 20);
        assert_eq!(
            config.posts_store,
            PostsStore::Postgres {
                database_url: "postgres://localhost/blog".to_string()
            }
        );
    }

    #[test]
    fn test_database_url_required_for_postgres() {
        assert!(config(&[]).is_err());
        assert!(config(&[("DATABASE_URL", "  ")]).is_err());
    }

    #[test]
    fn test_memory_store_needs_no_database() {
        let config = config(&[("POSTS_STORE", "memory")]).unwrap();
        assert_eq!(config.posts_store, PostsStore::Memory);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("POSTS_STORE", "memory"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("POSTS_PAGE_SIZE", "12"),
            ("FRONTEND_ORIGINS", "https://a.example, ,https://b.example"),
            ("ACCOMMODATION_API_BASE", "http://gw.local"),
            ("REVIEW_MODEL", "other-model"),
            ("IDENTITY_API_BASE", "http://id.local/account"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.posts.page_size, 12);
        assert_eq!(
            config.frontend_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.accommodation.search.base_url, "http://gw.local");
        assert_eq!(config.accommodation.detail.base_url, "http://gw.local");
        assert_eq!(config.accommodation.review_model, "other-model");
        assert_eq!(config.auth.identity.base_url, "http://id.local/account");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config(&[("POSTS_STORE", "sqlite")]).is_err());
        assert!(config(&[("POSTS_STORE", "memory"), ("BIND_ADDR", "nope")]).is_err());
        assert!(config(&[("POSTS_STORE", "memory"), ("DB_MAX_CONNECTIONS", "-1")]).is_err());
    }
}
