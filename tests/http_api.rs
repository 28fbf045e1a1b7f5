use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use blog_assist::server::{router, AppState};
use blog_assist::{
    AiConfig, AiContentService, AssistError, Category, CategoryError, CategoryRepository,
    StaticCategories, TextGenerator,
};

const BODY: &str = "Writing async Rust services with Tokio and Axum is pleasant once the basics click.";

struct FixedReply(&'static str);

#[async_trait]
impl TextGenerator for FixedReply {
    async fn generate(&self, _prompt: &str) -> Result<String, AssistError> {
        Ok(self.0.to_string())
    }
}

struct BrokenCategories;

#[async_trait]
impl CategoryRepository for BrokenCategories {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        Err(CategoryError::Unavailable("connection refused".to_string()))
    }
}

fn categories() -> StaticCategories {
    StaticCategories::new(vec![
        Category::new("Rust"),
        Category::new("Web Development"),
        Category::new("Cooking"),
    ])
}

fn fallback_app() -> Router {
    let service = AiContentService::new(&AiConfig::default(), Arc::new(FixedReply("unused")));
    router(AppState::new(service, categories()))
}

fn ai_app(reply: &'static str) -> Router {
    let config = AiConfig {
        api_key: Some("key".to_string()),
        ..AiConfig::default()
    };
    let service = AiContentService::new(&config, Arc::new(FixedReply(reply)));
    router(AppState::new(service, categories()))
}

async fn post_json(app: Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_availability() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = fallback_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "ai_available": false }));
}

#[tokio::test]
async fn titles_fall_back_without_a_key() {
    let (status, body) = post_json(fallback_app(), "/api/ai/titles", json!({ "content": BODY })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 5);
    assert_eq!(body["suggestions"][0], "Writing Guide");
}

#[tokio::test]
async fn short_content_is_rejected() {
    let (status, body) = post_json(fallback_app(), "/api/ai/titles", json!({ "content": "short" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Content must be at least 10 characters");
}

#[tokio::test]
async fn keywords_require_a_title() {
    let (status, body) =
        post_json(fallback_app(), "/api/ai/keywords", json!({ "content": BODY })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Title is required");

    let (status, body) = post_json(
        fallback_app(),
        "/api/ai/keywords",
        json!({ "title": "Async Services", "content": BODY }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keywords"][0], "async");
}

#[tokio::test]
async fn meta_description_respects_the_limit() {
    let long_body = "Sentences without periods go on and on ".repeat(20);
    let (status, body) = post_json(
        fallback_app(),
        "/api/ai/meta-description",
        json!({ "title": "Rambling", "content": long_body }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let description = body["meta_description"].as_str().unwrap();
    assert!(description.chars().count() <= 160);
    assert!(description.ends_with("..."));
}

#[tokio::test]
async fn categories_are_returned_as_objects_in_repository_order() {
    let (status, body) = post_json(
        ai_app("web development, rust, Gardening"),
        "/api/ai/categories",
        json!({ "title": "Async Services", "content": BODY }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["suggestions"],
        json!([
            { "name": "Rust", "slug": "rust" },
            { "name": "Web Development", "slug": "web-development" }
        ])
    );
}

#[tokio::test]
async fn category_store_failure_yields_no_suggestions() {
    let config = AiConfig {
        api_key: Some("key".to_string()),
        ..AiConfig::default()
    };
    let service = AiContentService::new(&config, Arc::new(FixedReply("Rust")));
    let app = router(AppState::new(service, BrokenCategories));

    let (status, body) = post_json(
        app,
        "/api/ai/categories",
        json!({ "title": "Async Services", "content": BODY }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestions"], json!([]));
}

#[tokio::test]
async fn optimize_needs_fifty_characters_and_flattens_report() {
    let (status, _) = post_json(fallback_app(), "/api/ai/optimize", json!({ "content": "x".repeat(49) })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post_json(
        ai_app("SUGGESTIONS:\n- Add code samples\n\nIMPROVEMENTS:\n- Shorter sentences\n\nSCORE: 6"),
        "/api/ai/optimize",
        json!({ "content": BODY }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "suggestions": ["Add code samples"],
            "improvements": ["Shorter sentences"],
            "readability_score": 6,
            "success": true
        })
    );
}

#[tokio::test]
async fn stats_and_slug_endpoints() {
    let (status, body) = post_json(fallback_app(), "/api/text/stats", json!({ "content": BODY })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "word_count": 14, "reading_time": 1 }));

    let (status, body) = post_json(fallback_app(), "/api/slug", json!({ "input": "Hello, Axum & Tokio!" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "slug": "hello-axum-tokio" }));

    let (status, _) = post_json(fallback_app(), "/api/slug", json!({ "input": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

async fn post_raw(uri: &str, content_type: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    let response = fallback_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn wrongly_typed_content_is_a_json_400() {
    let (status, body) = post_json(fallback_app(), "/api/ai/titles", json!({ "content": 12345 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid type"));
}

#[tokio::test]
async fn undecodable_bodies_are_json_400s() {
    let (status, body) = post_raw("/api/ai/titles", "application/json", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = post_raw("/api/ai/optimize", "text/plain", "just some words").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Content-Type"));

    let (status, body) = post_raw("/api/slug", "application/json", "{\"input\": [1, 2]}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
