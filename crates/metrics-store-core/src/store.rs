//! Concurrent in-memory telemetry store.
//!
//! One coarse lock guards the whole map. Writes are rare and short, so
//! sharding buys nothing here. The lock is held only for the map operation
//! itself; decoding and encoding happen outside it. Records are stored behind
//! `Arc` so a snapshot only bumps reference counts while the lock is held.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use thiserror::Error;

use crate::model::TelemetryRecord;

/// Typed rejection codes from [`Store::insert`]. `Ok(())` is success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("key already exists")]
    KeyExists,
    #[error("key not specified")]
    KeyNotSpecified,
    #[error("value not specified")]
    ValueNotSpecified,
}

/// Read/write surface the request handler depends on.
pub trait Store: Send + Sync {
    /// Insert `record` under `id`. Never overwrites an existing entry.
    fn insert(&self, id: &str, record: Option<TelemetryRecord>) -> Result<(), StoreError>;

    /// Snapshot of every committed record, in no particular order.
    fn list_all(&self) -> Vec<Arc<TelemetryRecord>>;
}

static SHARED: OnceLock<Arc<MemoryStore>> = OnceLock::new();

/// `HashMap` behind a single mutex.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Arc<TelemetryRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide store, created on first access.
    pub fn shared() -> Arc<MemoryStore> {
        Arc::clone(SHARED.get_or_init(|| Arc::new(MemoryStore::new())))
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Store for MemoryStore {
    fn insert(&self, id: &str, record: Option<TelemetryRecord>) -> Result<(), StoreError> {
        if id.is_empty() {
            return Err(StoreError::KeyNotSpecified);
        }
        let record = Arc::new(record.ok_or(StoreError::ValueNotSpecified)?);

        let mut entries = self.entries.lock();
        if entries.contains_key(id) {
            return Err(StoreError::KeyExists);
        }
        entries.insert(id.to_owned(), record);
        Ok(())
    }

    fn list_all(&self) -> Vec<Arc<TelemetryRecord>> {
        self.entries.lock().values().map(Arc::clone).collect()
    }
}
