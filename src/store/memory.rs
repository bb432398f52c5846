//! In-memory object store.
//!
//! Drop-in [`ObjectStore`] used by the test suites and handy for poking at
//! the pipeline without credentials. It tracks how often each operation was
//! called and can be armed with a fault so storage failures are reproducible.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::StoreError;

use super::{ObjectStore, StoredObject};

#[derive(Default)]
struct Inner {
    objects: HashMap<String, StoredObject>,
    fault: Option<StoreError>,
    exists_calls: usize,
    put_calls: usize,
    get_calls: usize,
}

/// In-memory implementation of [`ObjectStore`].
///
/// Clones share the same underlying map, so a handle kept by a test observes
/// writes made through the handle given to the pipeline.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an object.
    pub fn with_object(
        self,
        key: impl Into<String>,
        body: impl Into<Bytes>,
        content_type: impl Into<String>,
    ) -> Self {
        self.inner.lock().unwrap().objects.insert(
            key.into(),
            StoredObject {
                body: body.into(),
                content_type: Some(content_type.into()),
            },
        );
        self
    }

    /// Make every subsequent operation fail with `fault`.
    pub fn inject_fault(&self, fault: StoreError) {
        self.inner.lock().unwrap().fault = Some(fault);
    }

    /// Clear a previously injected fault.
    pub fn clear_fault(&self) {
        self.inner.lock().unwrap().fault = None;
    }

    /// Whether an object exists under `key`, without counting as a call.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().unwrap().objects.contains_key(key)
    }

    /// Snapshot of the object under `key`, without counting as a call.
    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.inner.lock().unwrap().objects.get(key).cloned()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().objects.len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times `exists` was called.
    pub fn exists_calls(&self) -> usize {
        self.inner.lock().unwrap().exists_calls
    }

    /// How many times `put` was called.
    pub fn put_calls(&self) -> usize {
        self.inner.lock().unwrap().put_calls
    }

    /// How many times `get` was called.
    pub fn get_calls(&self) -> usize {
        self.inner.lock().unwrap().get_calls
    }

    fn check_fault(inner: &Inner) -> Result<(), StoreError> {
        match &inner.fault {
            Some(fault) => Err(fault.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ObjectStore for InMemoryStore {
    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.exists_calls += 1;
        Self::check_fault(&inner)?;
        Ok(inner.objects.contains_key(key))
    }

    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.put_calls += 1;
        Self::check_fault(&inner)?;
        inner.objects.insert(
            key.to_string(),
            StoredObject {
                body,
                content_type: Some(content_type.to_string()),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.get_calls += 1;
        Self::check_fault(&inner)?;
        Ok(inner.objects.get(key).cloned())
    }
}

// =============================================================================
// Tests
// =============================================================================
