//! Accommodation Router

use crate::application::config::AccommodationConfig;
use crate::domain::gateway::AccommodationGateway;
use crate::error::AccommodationResult;
use crate::infra::http::HttpAccommodationGateway;
use crate::presentation::handlers::{self, AccommodationAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the accommodation router backed by the HTTP gateway
pub fn accommodation_router(config: AccommodationConfig) -> AccommodationResult<Router> {
    let gateway = HttpAccommodationGateway::new(&config)?;
    Ok(accommodation_router_generic(gateway, config))
}

/// Create a generic accommodation router for any gateway implementation
pub fn accommodation_router_generic<G>(gateway: G, config: AccommodationConfig) -> Router
where
    G: AccommodationGateway + Clone + Send + Sync + 'static,
{
    let state = AccommodationAppState {
        gateway: Arc::new(gateway),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::list_accommodations::<G>))
        .route("/city/{name}", get(handlers::list_city_accommodations::<G>))
        .route("/{code}", get(handlers::get_accommodation::<G>))
        .route("/{code}/review", get(handlers::get_review_summary::<G>))
        .with_state(state)
}
