//! Shared application state for the metrics-store gateway.
//!
//! Built once at startup around a single Store instance and cloned cheaply
//! into every request.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use metrics_store_core::codec::RecordDecoder;
use metrics_store_core::ids::{IdGenerator, UuidV4Ids};
use metrics_store_core::store::Store;

use crate::config::MetricsStoreConfig;
use crate::services::MetricsService;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: MetricsStoreConfig,
    metrics: MetricsService,
    draining: AtomicBool,
}

impl AppState {
    /// Build state with random v4 identifiers.
    pub fn new(cfg: MetricsStoreConfig, store: Arc<dyn Store>) -> Self {
        Self::with_ids(cfg, store, Arc::new(UuidV4Ids))
    }

    /// Build state with an explicit identifier source.
    pub fn with_ids(cfg: MetricsStoreConfig, store: Arc<dyn Store>, ids: Arc<dyn IdGenerator>) -> Self {
        let decoder = RecordDecoder::new(cfg.handler.allow_unknown_fields);
        let metrics = MetricsService::new(store, ids, decoder);

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics,
                draining: AtomicBool::new(false),
            }),
        }
    }

    pub fn cfg(&self) -> &MetricsStoreConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &MetricsService {
        &self.inner.metrics
    }

    pub fn max_request_body_size(&self) -> usize {
        self.inner.cfg.handler.max_request_body_size
    }

    /// Mark draining state (shutdown has begun).
    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }
}
