//! API integration tests for the HTTP surface.
//!
//! Tests verify:
//! - Placeholder generation and serving through the router
//! - Response codes, content types, and cache headers
//! - Error cases (malformed path, unsupported format, store fault)

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use genato::{InMemoryStore, StoreError};

use super::test_utils::{is_png_with_dimensions, svg_text, test_router};

// =============================================================================
// Placeholder Retrieval
// =============================================================================

#[tokio::test]
async fn test_png_request_served_with_headers() {
    let store = InMemoryStore::new();
    let router = test_router(store.clone());

    let request = Request::builder()
        .uri("/640x480,white,png")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/png"
    );
    assert_eq!(
        response.headers().get("cache-control").unwrap(),
        "public, max-age=3600"
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(is_png_with_dimensions(&body, 640, 480));

    // The same bytes were persisted under the path-derived key.
    assert_eq!(store.object("640x480,white,png").unwrap().body, body);
}

#[tokio::test]
async fn test_svg_request_served_with_headers() {
    let router = test_router(InMemoryStore::new());

    let request = Request::builder()
        .uri("/300x100,red,svg")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/svg+xml"
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let doc = svg_text(&body);
    assert!(doc.contains(r#"<svg width="300" height="100""#));
    assert!(doc.contains(r#"fill="red""#));
}

#[tokio::test]
async fn test_repeat_request_served_from_store() {
    let store = InMemoryStore::new();
    let router = test_router(store.clone());

    let first = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/200x100,navy,png")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(store.put_calls(), 1);

    let second = router
        .oneshot(
            Request::builder()
                .uri("/200x100,navy,png")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);

    // Second request was a hit: no new write.
    assert_eq!(store.put_calls(), 1);

    let first_body = first.into_body().collect().await.unwrap().to_bytes();
    let second_body = second.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(first_body, second_body);
}

// =============================================================================
// Health and Reserved Paths
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let router = test_router(InMemoryStore::new());

    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let health: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "ok");
}

#[tokio::test]
async fn test_favicon_is_not_found_and_untouched() {
    let store = InMemoryStore::new();
    let router = test_router(store.clone());

    let response = router
        .oneshot(
            Request::builder()
                .uri("/favicon.ico")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Passed through the pipeline untouched; nothing stored, so the origin
    // fetch comes back empty.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.exists_calls(), 0);
    assert_eq!(store.put_calls(), 0);
}

// =============================================================================
// Error Responses
// =============================================================================

#[tokio::test]
async fn test_malformed_path_returns_generic_500() {
    let router = test_router(InMemoryStore::new());

    let response = router
        .oneshot(
            Request::builder()
                .uri("/640x480,white")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Internal Server Error");
}

#[tokio::test]
async fn test_unsupported_format_returns_generic_500() {
    let router = test_router(InMemoryStore::new());

    let response = router
        .oneshot(
            Request::builder()
                .uri("/640x480,white,gif")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Internal Server Error");
}

#[tokio::test]
async fn test_store_fault_returns_generic_500() {
    let store = InMemoryStore::new();
    store.inject_fault(StoreError::S3("access denied".to_string()));
    let router = test_router(store);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/640x480,white,png")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The body never leaks the internal cause.
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Internal Server Error");
}
