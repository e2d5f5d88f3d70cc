//! Telemetry ingestion and listing.
//!
//! Owns identifier assignment and the duplicate-key retry policy. The Store
//! is only reached through its trait; each call is independently atomic and
//! nothing here assumes two calls appear atomic together.

use std::sync::Arc;

use metrics_store_core::codec::{encode_records, RecordDecoder};
use metrics_store_core::error::Result;
use metrics_store_core::ids::IdGenerator;
use metrics_store_core::store::{Store, StoreError};

pub struct MetricsService {
    store: Arc<dyn Store>,
    ids: Arc<dyn IdGenerator>,
    decoder: RecordDecoder,
}

impl MetricsService {
    pub fn new(store: Arc<dyn Store>, ids: Arc<dyn IdGenerator>, decoder: RecordDecoder) -> Self {
        Self { store, ids, decoder }
    }

    /// Pretty JSON array of every stored record.
    pub fn list(&self) -> Result<Vec<u8>> {
        let records = self.store.list_all();
        tracing::debug!(count = records.len(), "listing records");
        encode_records(&records)
    }

    /// Decode `body`, assign a fresh id and store it. Returns the id.
    pub fn create(&self, body: &[u8]) -> Result<String> {
        let mut record = self.decoder.decode(body)?;
        tracing::debug!(?record, "decoded record");

        record.id = self.ids.next_id();
        match self.store.insert(&record.id, Some(record.clone())) {
            Ok(()) => return Ok(record.id),
            Err(StoreError::KeyExists) => {
                tracing::warn!(id = %record.id, "generated id collided, retrying once");
            }
            Err(e) => {
                tracing::error!(error = %e, id = %record.id, "store rejected entry");
                return Err(e.into());
            }
        }

        // One retry only. Anything that fails here is a 500.
        record.id = self.ids.next_id();
        match self.store.insert(&record.id, Some(record.clone())) {
            Ok(()) => Ok(record.id),
            Err(e) => {
                tracing::error!(error = %e, id = %record.id, "store rejected entry on retry");
                Err(e.into())
            }
        }
    }
}
