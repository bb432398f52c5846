//! Object store abstraction.
//!
//! The "cache" in this system is nothing but the remote object store: an
//! existence check decides whether a placeholder has been generated before,
//! and a single-shot put persists new ones. [`ObjectStore`] is the capability
//! the edge handler is constructed with, so tests and local runs can swap the
//! S3 client for [`InMemoryStore`] without touching the pipeline.
//!
//! Absence is not an error anywhere on this surface: `exists` reports a
//! definitive not-found as `Ok(false)` and `get` as `Ok(None)`. A
//! [`StoreError`](crate::error::StoreError) always means the store could not
//! be consulted, and callers must not treat it as a miss.

mod memory;
mod s3;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::StoreError;

pub use memory::InMemoryStore;
pub use s3::{create_s3_client, S3ObjectStore};

/// A stored binary object with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Object payload
    pub body: Bytes,

    /// MIME type recorded at write time, if any
    pub content_type: Option<String>,
}

/// Capability for checking, writing, and reading named binary objects.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Check whether an object exists under `key`.
    ///
    /// `Ok(false)` means the store answered definitively that the object is
    /// absent. Any other failure is an error and must be propagated, never
    /// misread as a miss.
    async fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Write (or overwrite) the object under `key`.
    ///
    /// Single-shot: no multipart upload, no partial-write recovery.
    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StoreError>;

    /// Fetch the object under `key`, or `None` if it does not exist.
    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError>;
}
