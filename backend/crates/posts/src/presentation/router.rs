//! Posts Router

use crate::application::config::PostsConfig;
use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostsAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the posts router with PostgreSQL repository
pub fn posts_router(repo: PgPostRepository, config: PostsConfig) -> Router {
    posts_router_generic(repo, config)
}

/// Create a generic posts router for any repository implementation
pub fn posts_router_generic<R>(repo: R, config: PostsConfig) -> Router
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let state = PostsAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_posts::<R>).post(handlers::create_post::<R>),
        )
        .route("/latest", get(handlers::latest_posts::<R>))
        .route(
            "/{slug}",
            get(handlers::get_post::<R>).put(handlers::update_post::<R>),
        )
        .with_state(state)
}
