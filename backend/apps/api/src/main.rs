//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;
mod pages;

use accommodation::{AccommodationConfig, HttpAccommodationGateway, accommodation_router_generic};
use auth::auth_router;
use axum::{
    Router, http,
    http::{Method, header},
};
use config::{AppConfig, PostsStore};
use posts::{InMemoryPostRepository, PgPostRepository, PostRepository, posts_router_generic};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,posts=info,accommodation=info,auth=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let app = match &config.posts_store {
        PostsStore::Postgres { database_url } => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            build_app(PgPostRepository::new(pool), &config)?
        }
        PostsStore::Memory => {
            tracing::warn!("Posts are kept in memory and will be lost on restart");
            build_app(InMemoryPostRepository::new(), &config)?
        }
    };

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Assemble every router around one post store
fn build_app<R>(posts: R, config: &AppConfig) -> anyhow::Result<Router>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let gateway = HttpAccommodationGateway::new(&config.accommodation)?;

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    let accommodation_config: AccommodationConfig = config.accommodation.clone();

    Ok(Router::new()
        .nest(
            "/api/posts",
            posts_router_generic(posts.clone(), config.posts.clone()),
        )
        .nest(
            "/api/accommodations",
            accommodation_router_generic(gateway.clone(), accommodation_config.clone()),
        )
        .nest("/api/auth", auth_router(config.auth.clone())?)
        .nest(
            "/api/pages",
            pages::pages_router(posts, gateway, config.posts.clone(), accommodation_config),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}
