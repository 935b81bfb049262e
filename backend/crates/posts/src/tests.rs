//! Unit tests for posts crate

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use kernel::id::PostId;
use kernel::pagination::PageRequest;

use crate::application::config::PostsConfig;
use crate::application::create_post::{CreatePostInput, CreatePostUseCase};
use crate::application::get_post::GetPostUseCase;
use crate::application::list_posts::ListPostsUseCase;
use crate::application::update_post::{UpdatePostInput, UpdatePostUseCase};
use crate::domain::entities::{NewPost, Post, PostChanges};
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::Slug;
use crate::error::PostError;
use crate::infra::memory::InMemoryPostRepository;

fn slug(raw: &str) -> Slug {
    Slug::new(raw).unwrap()
}

fn new_post(title: &str, raw_slug: &str, content: &str) -> NewPost {
    NewPost::new(title.to_string(), raw_slug, content.to_string(), None).unwrap()
}

/// Five posts `post-1`..`post-5`, one hour apart, `post-5` newest
async fn seeded_repo() -> InMemoryPostRepository {
    let repo = InMemoryPostRepository::new();
    let base = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    for i in 1..=5 {
        repo.insert(Post {
            id: PostId::new(i),
            title: format!("Post {i}"),
            slug: slug(&format!("post-{i}")),
            content: format!("<p>Body {i}</p>"),
            image_url: None,
            created_at: base + Duration::hours(i64::from(i)),
        })
        .await;
    }
    repo
}

fn slugs(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|p| p.slug.as_str()).collect()
}

#[cfg(test)]
mod value_object_tests {
    use super::*;

    #[test]
    fn test_slug_is_trimmed() {
        assert_eq!(slug("  hello ").as_str(), "hello");
    }

    #[test]
    fn test_slug_accepts_non_latin() {
        assert_eq!(slug("سفر-به-شمال").as_str(), "سفر-به-شمال");
    }

    #[test]
    fn test_slug_rejects_blank_and_delimiters() {
        for raw in ["", "   ", "a b", "a/b", "a?b", "a#b", "100%"] {
            assert!(
                matches!(Slug::new(raw), Err(PostError::Validation(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_slug_cannot_shadow_latest_route() {
        assert!(matches!(Slug::new("latest"), Err(PostError::Validation(_))));
        assert!(matches!(Slug::new(" latest "), Err(PostError::Validation(_))));
        assert!(Slug::new("latest-news").is_ok());
    }

    #[test]
    fn test_slug_length_limit() {
        assert!(Slug::new("a".repeat(200)).is_ok());
        assert!(Slug::new("a".repeat(201)).is_err());
    }

    #[test]
    fn test_new_post_requires_title_and_content() {
        let err = NewPost::new(" ".into(), "s", "c".into(), None).unwrap_err();
        assert!(err.to_string().contains("Title"));

        let err = NewPost::new("t".into(), "s", "".into(), None).unwrap_err();
        assert!(err.to_string().contains("Content"));
    }

    #[test]
    fn test_blank_image_url_is_none() {
        let post = NewPost::new("t".into(), "s", "c".into(), Some("  ".into())).unwrap();
        assert_eq!(post.image_url, None);
    }

    #[test]
    fn test_changes_ignore_same_or_blank_slug() {
        let current = slug("hello");

        let same = PostChanges::new(&current, "t".into(), "c".into(), None, Some("hello".into()))
            .unwrap();
        assert_eq!(same.new_slug, None);
        assert_eq!(same.target_slug(&current), &current);

        let blank =
            PostChanges::new(&current, "t".into(), "c".into(), None, Some(" ".into())).unwrap();
        assert_eq!(blank.new_slug, None);

        let renamed =
            PostChanges::new(&current, "t".into(), "c".into(), None, Some("hello-2".into()))
                .unwrap();
        assert_eq!(renamed.target_slug(&current).as_str(), "hello-2");
    }
}

#[cfg(test)]
mod repository_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_find_preserves_fields() {
        let repo = InMemoryPostRepository::new();
        let input = NewPost::new(
            "Hello".into(),
            "hello",
            "<b>World</b>".into(),
            Some("https://img.example/a.jpg".into()),
        )
        .unwrap();

        let created = repo.create(input).await.unwrap();
        let found = repo.find_by_slug(&slug("hello")).await.unwrap().unwrap();

        assert_eq!(found, created);
        assert_eq!(found.title, "Hello");
        assert_eq!(found.content, "<b>World</b>");
        assert_eq!(found.image_url.as_deref(), Some("https://img.example/a.jpg"));
    }

    #[tokio::test]
    async fn test_create_duplicate_slug_leaves_existing_row() {
        let repo = InMemoryPostRepository::new();
        let original = repo.create(new_post("First", "dup", "one")).await.unwrap();

        let err = repo.create(new_post("Second", "dup", "two")).await.unwrap_err();
        assert!(matches!(err, PostError::SlugTaken(ref s) if s == "dup"));

        let stored = repo.find_by_slug(&slug("dup")).await.unwrap().unwrap();
        assert_eq!(stored, original);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_to_taken_slug_mutates_nothing() {
        let repo = InMemoryPostRepository::new();
        let a = repo.create(new_post("A", "a", "alpha")).await.unwrap();
        let b = repo.create(new_post("B", "b", "beta")).await.unwrap();

        let changes =
            PostChanges::new(&slug("a"), "A2".into(), "x".into(), None, Some("b".into())).unwrap();
        let err = repo.update(&slug("a"), changes).await.unwrap_err();
        assert!(matches!(err, PostError::SlugTaken(_)));

        assert_eq!(repo.find_by_slug(&slug("a")).await.unwrap(), Some(a));
        assert_eq!(repo.find_by_slug(&slug("b")).await.unwrap(), Some(b));
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let changes = PostChanges::new(&slug("nope"), "t".into(), "c".into(), None, None).unwrap();

        let err = repo.update(&slug("nope"), changes).await.unwrap_err();
        assert!(matches!(err, PostError::NotFound));
    }

    #[tokio::test]
    async fn test_update_without_image_keeps_stored_image() {
        let repo = InMemoryPostRepository::new();
        repo.create(
            NewPost::new("T".into(), "pic", "c".into(), Some("/a.png".into())).unwrap(),
        )
        .await
        .unwrap();

        let changes =
            PostChanges::new(&slug("pic"), "T2".into(), "c2".into(), None, None).unwrap();
        let updated = repo.update(&slug("pic"), changes).await.unwrap();

        assert_eq!(updated.title, "T2");
        assert_eq!(updated.image_url.as_deref(), Some("/a.png"));
    }

    #[tokio::test]
    async fn test_pagination_scenario() {
        let repo = seeded_repo().await;

        let first = repo.list_paginated(PageRequest::new(1, 2)).await.unwrap();
        assert_eq!(slugs(&first), vec!["post-5", "post-4"]);

        let third = repo.list_paginated(PageRequest::new(3, 2)).await.unwrap();
        assert_eq!(slugs(&third), vec!["post-1"]);

        assert_eq!(repo.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_pages_are_ordered_across_boundaries() {
        let repo = seeded_repo().await;

        for page in 1..3 {
            let current = repo.list_paginated(PageRequest::new(page, 2)).await.unwrap();
            let next = repo
                .list_paginated(PageRequest::new(page + 1, 2))
                .await
                .unwrap();
            assert!(current.windows(2).all(|w| w[0].created_at > w[1].created_at));
            if let (Some(last), Some(first)) = (current.last(), next.first()) {
                assert!(last.created_at >= first.created_at);
            }
        }
    }

    #[tokio::test]
    async fn test_same_timestamp_falls_back_to_id() {
        let repo = InMemoryPostRepository::new();
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        for i in [1, 2] {
            repo.insert(Post {
                id: PostId::new(i),
                title: "t".into(),
                slug: slug(&format!("tie-{i}")),
                content: "c".into(),
                image_url: None,
                created_at: at,
            })
            .await;
        }

        let all = repo.list_all().await.unwrap();
        assert_eq!(slugs(&all), vec!["tie-2", "tie-1"]);
    }

    #[tokio::test]
    async fn test_latest_excluding_respects_slug_and_limit() {
        let repo = seeded_repo().await;

        let latest = repo.list_latest_excluding("post-5", 3).await.unwrap();
        assert_eq!(slugs(&latest), vec!["post-4", "post-3", "post-2"]);

        let latest = repo.list_latest_excluding("", 10).await.unwrap();
        assert_eq!(latest.len(), 5);
    }

    #[tokio::test]
    async fn test_ids_continue_after_inserted_fixtures() {
        let repo = seeded_repo().await;
        let created = repo.create(new_post("Six", "post-6", "c")).await.unwrap();
        assert_eq!(created.id.get(), 6);
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::*;

    fn config() -> Arc<PostsConfig> {
        Arc::new(PostsConfig::default())
    }

    #[tokio::test]
    async fn test_create_rename_scenario() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let create = CreatePostUseCase::new(repo.clone());
        let update = UpdatePostUseCase::new(repo.clone());
        let get = GetPostUseCase::new(repo.clone(), config());

        create
            .execute(CreatePostInput {
                title: "Hello".into(),
                slug: "hello".into(),
                content: "World".into(),
                image_url: None,
            })
            .await
            .unwrap();
        assert_eq!(get.with_latest("hello").await.unwrap().post.title, "Hello");

        update
            .execute(UpdatePostInput {
                slug: "hello".into(),
                title: "Hello2".into(),
                content: "World".into(),
                image_url: None,
                new_slug: Some("hello-2".into()),
            })
            .await
            .unwrap();

        assert!(matches!(get.with_latest("hello").await, Err(PostError::NotFound)));
        let renamed = get.with_latest("hello-2").await.unwrap().post;
        assert_eq!(renamed.title, "Hello2");
        assert_eq!(renamed.content, "World");
    }

    #[tokio::test]
    async fn test_page_reports_totals() {
        let repo = Arc::new(seeded_repo().await);
        let list = ListPostsUseCase::new(repo, Arc::new(PostsConfig::default().with_page_size(2)));

        let page = list.page(list.request_for(Some("2"))).await.unwrap();
        assert_eq!(slugs(&page.items), vec!["post-3", "post-2"]);
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 3);

        let fallback = list.request_for(Some("zero"));
        assert_eq!(fallback.page(), 1);
        assert_eq!(fallback.page_size(), 2);
    }

    #[tokio::test]
    async fn test_latest_limit_defaults_and_clamps() {
        let repo = Arc::new(seeded_repo().await);
        let list = ListPostsUseCase::new(repo, config());

        assert_eq!(list.latest("", None).await.unwrap().len(), 5);
        assert_eq!(list.latest("", Some(0)).await.unwrap().len(), 1);
        assert_eq!(PostsConfig::default().latest_limit_or_default(Some(500)), 50);
    }

    #[tokio::test]
    async fn test_detail_loads_post_and_other_posts() {
        let repo = Arc::new(seeded_repo().await);
        let get = GetPostUseCase::new(repo, config());

        let detail = get.with_latest("post-3").await.unwrap();
        assert_eq!(detail.post.slug.as_str(), "post-3");
        assert_eq!(
            slugs(&detail.latest),
            vec!["post-5", "post-4", "post-2", "post-1"]
        );
    }

    #[tokio::test]
    async fn test_malformed_slug_is_not_found() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let get = GetPostUseCase::new(repo, config());

        assert!(matches!(get.with_latest("a b").await, Err(PostError::NotFound)));
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;
    use axum::http::StatusCode;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_status_codes() {
        assert_eq!(PostError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            PostError::SlugTaken("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            PostError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PostError::Database(sqlx::Error::PoolTimedOut).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let app_error = PostError::Database(sqlx::Error::PoolTimedOut).to_app_error();
        assert_eq!(app_error.message(), "Saving or loading the post failed");
    }
}

#[cfg(test)]
mod router_tests {
    use super::*;
    use crate::presentation::router::posts_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn app() -> Router {
        posts_router_generic(seeded_repo().await, PostsConfig::default())
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_first_page() {
        let req = Request::get("/?page=abc").body(Body::empty()).unwrap();
        let (status, body) = send(app().await, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"], 1);
        assert_eq!(body["pageSize"], 9);
        assert_eq!(body["totalCount"], 5);
        assert_eq!(body["totalPages"], 1);
        assert_eq!(body["items"][0]["slug"], "post-5");
        assert!(body["items"][0]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_get_post_with_latest() {
        let req = Request::get("/post-1").body(Body::empty()).unwrap();
        let (status, body) = send(app().await, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["post"]["title"], "Post 1");
        assert_eq!(body["latestPosts"].as_array().map(Vec::len), Some(4));
    }

    #[tokio::test]
    async fn test_missing_post_is_404() {
        let req = Request::get("/missing").body(Body::empty()).unwrap();
        let (status, _) = send(app().await, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_latest_endpoint() {
        let req = Request::get("/latest?exclude=post-5&limit=2")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app().await, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["slug"], "post-4");
        assert_eq!(body[1]["slug"], "post-3");
        assert_eq!(body.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_create_returns_201_and_conflict_on_duplicate() {
        let app = app().await;
        let payload = json!({"title": "New", "slug": "fresh", "content": "Body"});

        let (status, body) = send(app.clone(), json_request("POST", "/", payload.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["slug"], "fresh");
        assert_eq!(body["imageUrl"], Value::Null);

        let (status, _) = send(app, json_request("POST", "/", payload)).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_create_with_invalid_slug_is_400() {
        let payload = json!({"title": "New", "slug": "has space", "content": "Body"});
        let (status, _) = send(app().await, json_request("POST", "/", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_latest_slug_is_rejected_on_create_and_rename() {
        let app = app().await;

        let payload = json!({"title": "New", "slug": "latest", "content": "Body"});
        let (status, _) = send(app.clone(), json_request("POST", "/", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let payload = json!({"title": "Renamed", "content": "Body", "newSlug": "latest"});
        let (status, _) = send(app.clone(), json_request("PUT", "/post-1", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // The fixed route still serves the list
        let req = Request::get("/latest").body(Body::empty()).unwrap();
        let (status, body) = send(app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn test_put_renames_post() {
        let app = app().await;
        let payload = json!({"title": "Renamed", "content": "Body", "newSlug": "post-1-new"});

        let (status, body) = send(app.clone(), json_request("PUT", "/post-1", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slug"], "post-1-new");

        let req = Request::get("/post-1").body(Body::empty()).unwrap();
        let (status, _) = send(app, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
