//! Service config loader (strict parsing) and CLI overrides.

pub mod cli;
pub mod schema;

use std::fs;
use std::path::Path;

use metrics_store_core::error::{MetricsStoreError, Result};

pub use cli::Cli;
pub use schema::{HandlerSection, MetricsStoreConfig, ServerSection};

pub fn load_from_file(path: &Path) -> Result<MetricsStoreConfig> {
    let s = fs::read_to_string(path).map_err(|e| {
        MetricsStoreError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<MetricsStoreConfig> {
    let cfg: MetricsStoreConfig = serde_yaml::from_str(s)
        .map_err(|e| MetricsStoreError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the effective config: file (or defaults), then CLI overrides,
/// then validation of the merged result.
pub fn resolve(cli: &Cli) -> Result<MetricsStoreConfig> {
    let mut cfg = match &cli.config {
        Some(path) => load_from_file(path)?,
        None => MetricsStoreConfig::default(),
    };
    cli.apply(&mut cfg);
    cfg.validate()?;
    Ok(cfg)
}
