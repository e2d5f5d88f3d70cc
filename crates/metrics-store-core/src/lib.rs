//! metrics-store core: telemetry wire model, record decoding, identifier
//! generation, and the concurrent in-memory store.
//!
//! This crate carries no transport or runtime dependencies. The gateway owns
//! HTTP; everything here is plain synchronous code that is safe to call from
//! any number of request tasks at once.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are denied by clippy here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`);
//! a plain `cargo build` does not enforce these lints.
//! Malformed client input must surface as `MetricsStoreError`, never as a
//! crashed request task.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod codec;
pub mod error;
pub mod ids;
pub mod model;
pub mod store;

/// Shared result type.
pub use error::{MetricsStoreError, Result};
pub use model::{MachineStats, TelemetryRecord};
pub use store::{MemoryStore, Store, StoreError};
