//! The edge request pipeline.
//!
//! [`EdgeHandler`] ties the path parser, the renderers, and the object store
//! together using the cache-aside pattern:
//!
//! ```text
//! parse ──► reserved path? ──────────────────────────► forward
//!   │
//!   └──► exists(key)? ── hit ───────────────────────► forward
//!              │
//!             miss ──► render ──► put(key, bytes) ──► forward
//! ```
//!
//! On a hit or after a successful put the original request is forwarded
//! unchanged; the object is in place for the host to serve. The handler is
//! the single point of failure containment for the pipeline: every error,
//! expected or not, becomes the same fixed failure response and is logged
//! here rather than propagated.
//!
//! Two concurrent first requests for the same key can both miss the
//! existence check and both render and write. The write is an idempotent
//! overwrite of equivalent bytes, so the race is left unguarded.

use tracing::{debug, error, info};

use crate::error::EdgeError;
use crate::render;
use crate::store::ObjectStore;
use crate::uri::{self, PathSpec};

/// Fixed user-visible failure response.
///
/// Every pipeline error maps to this one shape; nothing about the internal
/// cause is exposed to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureResponse {
    /// HTTP status code
    pub status: u16,

    /// Plain-text body
    pub body: &'static str,
}

impl FailureResponse {
    /// The generic failure every error path converges on.
    pub fn internal_error() -> Self {
        Self {
            status: 500,
            body: "Internal Server Error",
        }
    }
}

/// What the host should do with the request after the pipeline ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Forward the original request unchanged
    Forward,

    /// Respond with this failure instead of forwarding
    Failure(FailureResponse),
}

/// Orchestrates parse, existence check, render, and persist for one request.
///
/// The store is an explicit capability rather than ambient state, so the
/// same pipeline runs against S3 in production and against
/// [`InMemoryStore`](crate::store::InMemoryStore) in tests.
pub struct EdgeHandler<S> {
    store: S,
}

impl<S: ObjectStore> EdgeHandler<S> {
    /// Create a handler over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the pipeline for a request path.
    ///
    /// Never panics and never returns an error: failures are logged and
    /// collapsed into [`Disposition::Failure`].
    pub async fn handle(&self, path: &str) -> Disposition {
        match self.process(path).await {
            Ok(()) => Disposition::Forward,
            Err(err) => {
                error!("Placeholder pipeline failed for {:?}: {}", path, err);
                Disposition::Failure(FailureResponse::internal_error())
            }
        }
    }

    async fn process(&self, path: &str) -> Result<(), EdgeError> {
        let request = match uri::parse(path)? {
            PathSpec::PassThrough => {
                debug!("Reserved path {:?}, passing through", path);
                return Ok(());
            }
            PathSpec::Image(request) => request,
        };

        let key = uri::storage_key(path);

        if self.store.exists(&key).await? {
            debug!("Cache hit for {:?}", key);
            return Ok(());
        }

        let artifact = render::render(&request)?;
        self.store
            .put(&key, artifact.bytes, artifact.content_type)
            .await?;

        info!(
            "Generated {}x{} {} placeholder under {:?}",
            request.width,
            request.height,
            request.format.as_str(),
            key
        );

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
