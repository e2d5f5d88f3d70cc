use std::time::Duration;

use serde::Deserialize;

use metrics_store_core::error::{MetricsStoreError, Result};

const MAX_BODY_CEILING: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsStoreConfig {
    pub version: u32,

    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub handler: HandlerSection,
}

impl Default for MetricsStoreConfig {
    fn default() -> Self {
        Self {
            version: 1,
            debug: false,
            server: ServerSection::default(),
            handler: HandlerSection::default(),
        }
    }
}

impl MetricsStoreConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsStoreError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.handler.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    #[serde(default = "default_read_write_timeout_ms")]
    pub read_write_timeout_ms: u64,

    #[serde(default = "default_shutdown_timeout_ms")]
    pub shutdown_timeout_ms: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen_port: default_listen_port(),
            read_write_timeout_ms: default_read_write_timeout_ms(),
            shutdown_timeout_ms: default_shutdown_timeout_ms(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen_port == 0 {
            return Err(MetricsStoreError::BadRequest(
                "server.listen_port must be between 1 and 65535".into(),
            ));
        }
        if !(1000..=300000).contains(&self.read_write_timeout_ms) {
            return Err(MetricsStoreError::BadRequest(
                "server.read_write_timeout_ms must be between 1000 and 300000".into(),
            ));
        }
        if !(1000..=300000).contains(&self.shutdown_timeout_ms) {
            return Err(MetricsStoreError::BadRequest(
                "server.shutdown_timeout_ms must be between 1000 and 300000".into(),
            ));
        }
        Ok(())
    }

    pub fn read_write_timeout(&self) -> Duration {
        Duration::from_millis(self.read_write_timeout_ms)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }
}

fn default_listen_port() -> u16 {
    4000
}
fn default_read_write_timeout_ms() -> u64 {
    10000
}
fn default_shutdown_timeout_ms() -> u64 {
    10000
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerSection {
    #[serde(default = "default_max_request_body_size")]
    pub max_request_body_size: usize,

    #[serde(default)]
    pub allow_unknown_fields: bool,
}

impl Default for HandlerSection {
    fn default() -> Self {
        Self {
            max_request_body_size: default_max_request_body_size(),
            allow_unknown_fields: false,
        }
    }
}

impl HandlerSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_BODY_CEILING).contains(&self.max_request_body_size) {
            return Err(MetricsStoreError::BadRequest(format!(
                "handler.max_request_body_size must be between 1 and {MAX_BODY_CEILING}"
            )));
        }
        Ok(())
    }
}

fn default_max_request_body_size() -> usize {
    1024 * 1024
}
