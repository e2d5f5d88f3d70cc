//! Top-level facade crate for metrics-store.
//!
//! Re-exports the core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use metrics_store_core::*;
}

pub mod gateway {
    pub use metrics_store_gateway::*;
}
