//! HTTP Handlers

use crate::application::config::PostsConfig;
use crate::application::create_post::{CreatePostInput, CreatePostUseCase};
use crate::application::get_post::GetPostUseCase;
use crate::application::list_posts::ListPostsUseCase;
use crate::application::update_post::{UpdatePostInput, UpdatePostUseCase};
use crate::domain::repository::PostRepository;
use crate::error::PostResult;
use crate::presentation::dto::{
    CreatePostRequest, LatestQuery, PageQuery, PostDetailResponse, PostResponse,
    UpdatePostRequest,
};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use kernel::pagination::Paginated;
use std::sync::Arc;

/// Shared state for post handlers
#[derive(Clone)]
pub struct PostsAppState<R>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<PostsConfig>,
}

/// GET /api/posts?page=N
pub async fn list_posts<R>(
    State(state): State<PostsAppState<R>>,
    Query(query): Query<PageQuery>,
) -> PostResult<Json<Paginated<PostResponse>>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone(), state.config.clone());
    let request = use_case.request_for(query.page.as_deref());

    let page = use_case.page(request).await?;

    Ok(Json(page.map(PostResponse::from)))
}

/// GET /api/posts/latest?exclude=slug&limit=N
pub async fn latest_posts<R>(
    State(state): State<PostsAppState<R>>,
    Query(query): Query<LatestQuery>,
) -> PostResult<Json<Vec<PostResponse>>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone(), state.config.clone());
    let exclude = query.exclude.unwrap_or_default();

    let posts = use_case.latest(&exclude, query.limit).await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /api/posts/{slug}
pub async fn get_post<R>(
    State(state): State<PostsAppState<R>>,
    Path(slug): Path<String>,
) -> PostResult<Json<PostDetailResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case.with_latest(&slug).await?;

    Ok(Json(PostDetailResponse {
        post: output.post.into(),
        latest_posts: output.latest.into_iter().map(PostResponse::from).collect(),
    }))
}

/// POST /api/posts
pub async fn create_post<R>(
    State(state): State<PostsAppState<R>>,
    Json(req): Json<CreatePostRequest>,
) -> PostResult<(StatusCode, Json<PostResponse>)>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());

    let post = use_case
        .execute(CreatePostInput {
            title: req.title,
            slug: req.slug,
            content: req.content,
            image_url: req.image_url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// PUT /api/posts/{slug}
pub async fn update_post<R>(
    State(state): State<PostsAppState<R>>,
    Path(slug): Path<String>,
    Json(req): Json<UpdatePostRequest>,
) -> PostResult<Json<PostResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePostUseCase::new(state.repo.clone());

    let post = use_case
        .execute(UpdatePostInput {
            slug,
            title: req.title,
            content: req.content,
            image_url: req.image_url,
            new_slug: req.new_slug,
        })
        .await?;

    Ok(Json(post.into()))
}
