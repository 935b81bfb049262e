//! Page Loaders
//!
//! Composite endpoints that load everything one screen needs in a single
//! round trip. Independent sources are fetched concurrently.

use std::sync::Arc;

use accommodation::application::{
    AccommodationPage, GetAccommodationUseCase, SearchAccommodationsUseCase,
};
use accommodation::{
    AccommodationCode, AccommodationConfig, AccommodationDetail, AccommodationGateway,
    ReviewSummary,
};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use kernel::error::app_error::AppResult;
use posts::application::ListPostsUseCase;
use posts::presentation::dto::PostResponse;
use posts::{PostRepository, PostsConfig};
use serde::Serialize;

#[derive(Clone)]
pub struct PagesState<R, G>
where
    R: PostRepository + Clone + Send + Sync + 'static,
    G: AccommodationGateway + Clone + Send + Sync + 'static,
{
    pub posts: Arc<R>,
    pub gateway: Arc<G>,
    pub posts_config: Arc<PostsConfig>,
    pub accommodation_config: Arc<AccommodationConfig>,
}

/// Response for GET /api/pages/home
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub posts: Vec<PostResponse>,
    pub accommodations: AccommodationPage,
}

/// Response for GET /api/pages/accommodations/{code}
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationScreen {
    pub accommodation: AccommodationDetail,
    pub review: Option<ReviewSummary>,
    pub latest_posts: Vec<PostResponse>,
}

/// GET /api/pages/home
pub async fn home<R, G>(State(state): State<PagesState<R, G>>) -> AppResult<Json<HomePage>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
    G: AccommodationGateway + Clone + Send + Sync + 'static,
{
    let posts = ListPostsUseCase::new(state.posts.clone(), state.posts_config.clone());
    let search =
        SearchAccommodationsUseCase::new(state.gateway.clone(), state.accommodation_config.clone());

    let (all_posts, accommodations) = tokio::join!(posts.all(), search.list_page(None));

    Ok(Json(HomePage {
        posts: all_posts?.into_iter().map(PostResponse::from).collect(),
        accommodations,
    }))
}

/// GET /api/pages/accommodations/{code}
pub async fn accommodation_screen<R, G>(
    State(state): State<PagesState<R, G>>,
    Path(code): Path<String>,
) -> AppResult<Json<AccommodationScreen>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
    G: AccommodationGateway + Clone + Send + Sync + 'static,
{
    let code: AccommodationCode = code.parse()?;
    let listing = GetAccommodationUseCase::new(state.gateway.clone());
    let posts = ListPostsUseCase::new(state.posts.clone(), state.posts_config.clone());

    let (detail, latest) =
        tokio::join!(listing.detail_with_review(code), posts.latest("", None));
    let (accommodation, review) = detail?;

    Ok(Json(AccommodationScreen {
        accommodation,
        review,
        latest_posts: latest?.into_iter().map(PostResponse::from).collect(),
    }))
}

pub fn pages_router<R, G>(
    posts: R,
    gateway: G,
    posts_config: PostsConfig,
    accommodation_config: AccommodationConfig,
) -> Router
where
    R: PostRepository + Clone + Send + Sync + 'static,
    G: AccommodationGateway + Clone + Send + Sync + 'static,
{
    let state = PagesState {
        posts: Arc::new(posts),
        gateway: Arc::new(gateway),
        posts_config: Arc::new(posts_config),
        accommodation_config: Arc::new(accommodation_config),
    };

    Router::new()
        .route("/home", get(home::<R, G>))
        .route("/accommodations/{code}", get(accommodation_screen::<R, G>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use accommodation::domain::entities::Accommodation;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use kernel::pagination::PageRequest;
    use posts::{InMemoryPostRepository, NewPost};
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(Clone, Default)]
    struct StubGateway {
        has_detail: bool,
    }

    impl AccommodationGateway for StubGateway {
        async fn search(&self, page: PageRequest) -> Vec<Accommodation> {
            (0..page.page_size() as i64)
                .map(|code| Accommodation {
                    code,
                    ..Accommodation::default()
                })
                .collect()
        }

        async fn search_by_city(
            &self,
            _city: &accommodation::CitySlug,
            _page: PageRequest,
        ) -> Vec<Accommodation> {
            Vec::new()
        }

        async fn get_detail(&self, code: AccommodationCode) -> Option<AccommodationDetail> {
            self.has_detail.then(|| AccommodationDetail {
                code: code.get() as i64,
                ..AccommodationDetail::default()
            })
        }

        async fn get_review_summary(&self, _code: AccommodationCode) -> Option<ReviewSummary> {
            None
        }
    }

    async fn app(gateway: StubGateway, post_count: usize) -> Router {
        let repo = InMemoryPostRepository::new();
        for i in 0..post_count {
            let post = NewPost::new(format!("Post {i}"), &format!("post-{i}"), "c".into(), None)
                .unwrap();
            repo.create(post).await.unwrap();
        }
        pages_router(
            repo,
            gateway,
            PostsConfig::default(),
            AccommodationConfig::default(),
        )
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let req = Request::get(uri).body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_home_loads_posts_and_first_listing_page() {
        let (status, body) = get_json(app(StubGateway::default(), 12).await, "/home").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["posts"].as_array().map(Vec::len), Some(12));
        assert_eq!(body["accommodations"]["page"], 1);
        assert_eq!(body["accommodations"]["pageSize"], 20);
        assert_eq!(body["accommodations"]["hasMore"], true);
    }

    #[tokio::test]
    async fn test_accommodation_screen() {
        let gateway = StubGateway { has_detail: true };
        let (status, body) = get_json(app(gateway, 8).await, "/accommodations/77").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["accommodation"]["code"], 77);
        assert_eq!(body["review"], Value::Null);
        assert_eq!(body["latestPosts"].as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn test_accommodation_screen_404s() {
        let (status, _) = get_json(app(StubGateway::default(), 0).await, "/accommodations/77").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let gateway = StubGateway { has_detail: true };
        let (status, _) = get_json(app(gateway, 0).await, "/accommodations/abc").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
