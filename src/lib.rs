//! # Genato
//!
//! An edge handler that generates placeholder images on demand.
//!
//! A request path encodes everything about the desired image --
//! `/640x480,white,png` asks for a 640x480 white PNG -- and the handler
//! follows the cache-aside pattern against S3-backed object storage: if an
//! object for that exact path already exists it is served as-is, otherwise it
//! is rendered, persisted under a key derived from the path, and served from
//! then on without ever being regenerated.
//!
//! ## Features
//!
//! - **Path-addressed placeholders**: dimensions, fill color, and format all
//!   live in the URI, so the storage key is just the normalized path
//! - **Two renderers**: raster (PNG, with a measured, centered caption) and
//!   vector (SVG, centered declaratively)
//! - **Cache-aside storage**: one existence check per request; generation
//!   happens at most once per distinct path
//! - **Failure containment**: every pipeline error collapses into one fixed
//!   500 response, never a crash
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`uri`] - Request path parsing and storage-key derivation
//! - [`render`] - PNG and SVG renderers with caption layout
//! - [`store`] - Object store trait, S3 client, in-memory test double
//! - [`edge`] - The request pipeline (parse, check, render, persist)
//! - [`server`] - Axum-based HTTP host and routes
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use genato::{create_router, EdgeHandler, InMemoryStore, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let edge = EdgeHandler::new(InMemoryStore::new());
//!     let router = create_router(edge, RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod config;
pub mod edge;
pub mod error;
pub mod render;
pub mod server;
pub mod store;
pub mod uri;

// Re-export commonly used types
pub use config::{Cli, Command, SampleConfig, ServeConfig};
pub use edge::{Disposition, EdgeHandler, FailureResponse};
pub use error::{EdgeError, ParseError, RenderError, StoreError};
pub use render::{ImageArtifact, CAPTION, PNG_CONTENT_TYPE, SVG_CONTENT_TYPE};
pub use server::{create_router, AppState, HealthResponse, RouterConfig};
pub use store::{create_s3_client, InMemoryStore, ObjectStore, S3ObjectStore, StoredObject};
pub use uri::{parse, storage_key, ImageFormat, ImageRequest, PathSpec};
