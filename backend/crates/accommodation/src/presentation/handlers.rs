//! HTTP Handlers

use crate::application::config::AccommodationConfig;
use crate::application::get_accommodation::GetAccommodationUseCase;
use crate::application::search_accommodations::{
    AccommodationPage, CityPage, SearchAccommodationsUseCase,
};
use crate::domain::entities::{AccommodationDetail, ReviewSummary};
use crate::domain::gateway::AccommodationGateway;
use crate::domain::value_objects::AccommodationCode;
use crate::error::AccommodationResult;
use crate::presentation::dto::PageQuery;
use axum::Json;
use axum::extract::{Path, Query, State};
use std::sync::Arc;

/// Shared state for accommodation handlers
#[derive(Clone)]
pub struct AccommodationAppState<G>
where
    G: AccommodationGateway + Clone + Send + Sync + 'static,
{
    pub gateway: Arc<G>,
    pub config: Arc<AccommodationConfig>,
}

/// GET /api/accommodations?page=N
pub async fn list_accommodations<G>(
    State(state): State<AccommodationAppState<G>>,
    Query(query): Query<PageQuery>,
) -> Json<AccommodationPage>
where
    G: AccommodationGateway + Clone + Send + Sync + 'static,
{
    let use_case = SearchAccommodationsUseCase::new(state.gateway.clone(), state.config.clone());

    Json(use_case.list_page(query.page.as_deref()).await)
}

/// GET /api/accommodations/city/{name}?page=N
pub async fn list_city_accommodations<G>(
    State(state): State<AccommodationAppState<G>>,
    Path(name): Path<String>,
    Query(query): Query<PageQuery>,
) -> AccommodationResult<Json<CityPage>>
where
    G: AccommodationGateway + Clone + Send + Sync + 'static,
{
    let use_case = SearchAccommodationsUseCase::new(state.gateway.clone(), state.config.clone());

    let page = use_case.city_page(&name, query.page.as_deref()).await?;

    Ok(Json(page))
}

/// GET /api/accommodations/{code}
pub async fn get_accommodation<G>(
    State(state): State<AccommodationAppState<G>>,
    Path(code): Path<String>,
) -> AccommodationResult<Json<AccommodationDetail>>
where
    G: AccommodationGateway + Clone + Send + Sync + 'static,
{
    let code: AccommodationCode = code.parse()?;
    let use_case = GetAccommodationUseCase::new(state.gateway.clone());

    let detail = use_case.detail(code).await?;

    Ok(Json(detail))
}

/// GET /api/accommodations/{code}/review
///
/// Responds `null` when the digest service has nothing for the listing.
pub async fn get_review_summary<G>(
    State(state): State<AccommodationAppState<G>>,
    Path(code): Path<String>,
) -> AccommodationResult<Json<Option<ReviewSummary>>>
where
    G: AccommodationGateway + Clone + Send + Sync + 'static,
{
    let code: AccommodationCode = code.parse()?;
    let use_case = GetAccommodationUseCase::new(state.gateway.clone());

    Ok(Json(use_case.review(code).await))
}
