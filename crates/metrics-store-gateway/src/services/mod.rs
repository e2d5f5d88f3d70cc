//! Services behind the HTTP transport.

pub mod metrics;

pub use metrics::MetricsService;
