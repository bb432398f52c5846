//! HTTP request handlers.
//!
//! Every request path that is not `/health` goes through the edge pipeline
//! and is then served the way a CDN origin fetch would see it: the object the
//! pipeline just ensured (or found) in the store is read back and returned.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check endpoint
//! - `GET /<width>x<height>,<color>,<format>` - Placeholder (fallback route)

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::edge::{Disposition, EdgeHandler};
use crate::store::ObjectStore;
use crate::uri;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state, passed to handlers via Axum's State extractor.
pub struct AppState<S: ObjectStore> {
    /// The edge pipeline
    pub edge: Arc<EdgeHandler<S>>,

    /// Cache-Control max-age in seconds for served placeholders
    pub cache_max_age: u32,
}

impl<S: ObjectStore> AppState<S> {
    /// Create state with the default one-hour cache max-age.
    pub fn new(edge: EdgeHandler<S>) -> Self {
        Self {
            edge: Arc::new(edge),
            cache_max_age: 3600,
        }
    }

    /// Create state with a custom cache max-age.
    pub fn with_cache_max_age(edge: EdgeHandler<S>, cache_max_age: u32) -> Self {
        Self {
            edge: Arc::new(edge),
            cache_max_age,
        }
    }
}

impl<S: ObjectStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            edge: Arc::clone(&self.edge),
            cache_max_age: self.cache_max_age,
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fallback handler: run the edge pipeline, then serve the stored object.
///
/// A [`Disposition::Failure`] is rendered exactly as the pipeline shaped it.
/// On [`Disposition::Forward`] the stored object is fetched and returned;
/// a forwarded path with nothing stored under it (the favicon probe, for
/// instance) is a plain 404, which is what an origin fetch would yield.
pub async fn placeholder_handler<S: ObjectStore>(
    State(state): State<AppState<S>>,
    request_uri: Uri,
) -> Response {
    let path = request_uri.path();

    match state.edge.handle(path).await {
        Disposition::Failure(failure) => (
            StatusCode::from_u16(failure.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            failure.body,
        )
            .into_response(),
        Disposition::Forward => serve_stored_object(&state, path).await,
    }
}

async fn serve_stored_object<S: ObjectStore>(state: &AppState<S>, path: &str) -> Response {
    let key = uri::storage_key(path);

    match state.edge.store().get(&key).await {
        Ok(Some(object)) => {
            let content_type = object
                .content_type
                .unwrap_or_else(|| "application/octet-stream".to_string());
            let cache_control = format!("public, max-age={}", state.cache_max_age);

            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type),
                    (header::CACHE_CONTROL, cache_control),
                ],
                object.body,
            )
                .into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        Err(err) => {
            error!("Failed to read stored object {:?}: {}", key, err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
