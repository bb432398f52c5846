//! Test utilities for integration tests.

use axum::Router;

use genato::{create_router, EdgeHandler, InMemoryStore, RouterConfig};

/// Build a router over the given in-memory store with tracing disabled.
///
/// Keep a clone of the store to observe what the pipeline wrote.
pub fn test_router(store: InMemoryStore) -> Router {
    create_router(
        EdgeHandler::new(store),
        RouterConfig::new().with_tracing(false),
    )
}

/// Check that data is a decodable PNG with the expected dimensions.
pub fn is_png_with_dimensions(data: &[u8], width: u32, height: u32) -> bool {
    if !data.starts_with(b"\x89PNG\r\n\x1a\n") {
        return false;
    }

    match image::load_from_memory_with_format(data, image::ImageFormat::Png) {
        Ok(img) => img.width() == width && img.height() == height,
        Err(_) => false,
    }
}

/// Decode a UTF-8 SVG document body.
pub fn svg_text(data: &[u8]) -> String {
    let doc = String::from_utf8(data.to_vec()).expect("SVG body should be UTF-8");
    assert!(doc.starts_with("<svg"), "not an SVG document: {}", doc);
    doc
}
