//! metrics-store gateway library entry.
//!
//! Wires configuration, the metrics service, the HTTP transport and the
//! operational endpoints into one router. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod services;
pub mod transport;
