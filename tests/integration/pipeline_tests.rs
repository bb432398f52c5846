//! End-to-end pipeline tests against an in-memory store.
//!
//! These exercise the edge handler directly, without the HTTP layer, and
//! verify both the returned disposition and the state the store ends up in.

use bytes::Bytes;

use genato::{
    storage_key, Disposition, EdgeHandler, FailureResponse, InMemoryStore, StoreError,
};

use super::test_utils::{is_png_with_dimensions, svg_text};

// =============================================================================
// Cache Miss: Generate and Persist
// =============================================================================

#[tokio::test]
async fn test_png_miss_generates_and_persists() {
    let store = InMemoryStore::new();
    let edge = EdgeHandler::new(store.clone());

    let disposition = edge.handle("/640x480,white,png").await;
    assert_eq!(disposition, Disposition::Forward);

    let object = store.object("640x480,white,png").expect("object stored");
    assert_eq!(object.content_type.as_deref(), Some("image/png"));
    assert!(is_png_with_dimensions(&object.body, 640, 480));
}

#[tokio::test]
async fn test_svg_miss_generates_and_persists() {
    let store = InMemoryStore::new();
    let edge = EdgeHandler::new(store.clone());

    let disposition = edge.handle("/300x100,#ff0000,svg").await;
    assert_eq!(disposition, Disposition::Forward);

    let object = store.object("300x100,#ff0000,svg").expect("object stored");
    assert_eq!(object.content_type.as_deref(), Some("image/svg+xml"));

    let doc = svg_text(&object.body);
    assert!(doc.contains(r#"<svg width="300" height="100""#));
    assert!(doc.contains(r##"<rect width="100%" height="100%" fill="#ff0000"/>"##));
    assert!(doc.contains(r#"text-anchor="middle""#));
    assert!(doc.contains(">Hello World</text>"));
}

// =============================================================================
// Cache Hit and Idempotence
// =============================================================================

#[tokio::test]
async fn test_hit_serves_without_render_or_put() {
    let store = InMemoryStore::new().with_object(
        "640x480,white,png",
        Bytes::from_static(b"pre-existing bytes"),
        "image/png",
    );
    let edge = EdgeHandler::new(store.clone());

    let disposition = edge.handle("/640x480,white,png").await;
    assert_eq!(disposition, Disposition::Forward);

    assert_eq!(store.exists_calls(), 1);
    assert_eq!(store.put_calls(), 0);
    assert_eq!(
        store.object("640x480,white,png").unwrap().body,
        Bytes::from_static(b"pre-existing bytes")
    );
}

#[tokio::test]
async fn test_pipeline_is_idempotent_for_new_path() {
    let store = InMemoryStore::new();
    let edge = EdgeHandler::new(store.clone());

    assert_eq!(edge.handle("/120x80,coral,png").await, Disposition::Forward);
    assert_eq!(edge.handle("/120x80,coral,png").await, Disposition::Forward);

    // Exactly one object, written exactly once.
    assert_eq!(store.len(), 1);
    assert_eq!(store.put_calls(), 1);
    assert_eq!(store.exists_calls(), 2);
}

#[tokio::test]
async fn test_generated_object_round_trips_through_existence_check() {
    let store = InMemoryStore::new();
    let edge = EdgeHandler::new(store.clone());

    let path = "/80x40,teal,svg";
    edge.handle(path).await;

    // The derived key is deterministic and the store now reports a hit on it.
    let key = storage_key(path);
    assert_eq!(key, storage_key(path));
    assert!(store.contains(&key));
}

// =============================================================================
// Pass-Through
// =============================================================================

#[tokio::test]
async fn test_favicon_makes_no_store_calls() {
    let store = InMemoryStore::new();
    let edge = EdgeHandler::new(store.clone());

    assert_eq!(edge.handle("/favicon.ico").await, Disposition::Forward);

    assert_eq!(store.exists_calls(), 0);
    assert_eq!(store.put_calls(), 0);
    assert_eq!(store.get_calls(), 0);
    assert!(store.is_empty());
}

// =============================================================================
// Error Containment
// =============================================================================

#[tokio::test]
async fn test_malformed_paths_never_crash_or_write() {
    let store = InMemoryStore::new();
    let edge = EdgeHandler::new(store.clone());

    let malformed = [
        "/",
        "/640x480",
        "/640x480,white",
        "/640x480,white,png,extra",
        "/0x100,white,png",
        "/-10x100,white,png",
        "/axb,white,png",
        "/640x480,,png",
        "/640x480,white,",
    ];

    for path in malformed {
        assert_eq!(
            edge.handle(path).await,
            Disposition::Failure(FailureResponse::internal_error()),
            "path {:?} should be a contained failure",
            path
        );
    }

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_gif_format_is_contained_failure() {
    let store = InMemoryStore::new();
    let edge = EdgeHandler::new(store.clone());

    assert_eq!(
        edge.handle("/640x480,white,gif").await,
        Disposition::Failure(FailureResponse::internal_error())
    );
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_existence_fault_is_error_not_miss() {
    let store = InMemoryStore::new();
    store.inject_fault(StoreError::Connection("simulated outage".to_string()));
    let edge = EdgeHandler::new(store.clone());

    assert_eq!(
        edge.handle("/640x480,white,png").await,
        Disposition::Failure(FailureResponse::internal_error())
    );

    // A store fault must never be misread as "absent, go render".
    assert_eq!(store.put_calls(), 0);

    // Once the store recovers, the same request succeeds.
    store.clear_fault();
    assert_eq!(edge.handle("/640x480,white,png").await, Disposition::Forward);
    assert!(store.contains("640x480,white,png"));
}
