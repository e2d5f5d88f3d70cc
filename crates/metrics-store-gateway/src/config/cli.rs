//! Command-line flags. Every flag overrides the matching config file value.

use std::path::PathBuf;

use clap::Parser;

use super::MetricsStoreConfig;

#[derive(Debug, Parser)]
#[command(name = "metrics-store", about = "In-memory machine telemetry store", long_about = None)]
pub struct Cli {
    /// Optional YAML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Port to listen on (1-65535)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub listen_port: Option<u16>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Maximum size of a request body, in bytes
    #[arg(long)]
    pub max_request_body_size: Option<usize>,

    /// Ignore unknown JSON fields instead of rejecting the request
    #[arg(long)]
    pub allow_unknown_fields: bool,
}

impl Cli {
    pub fn apply(&self, cfg: &mut MetricsStoreConfig) {
        if let Some(port) = self.listen_port {
            cfg.server.listen_port = port;
        }
        if self.debug {
            cfg.debug = true;
        }
        if let Some(max) = self.max_request_body_size {
            cfg.handler.max_request_body_size = max;
        }
        if self.allow_unknown_fields {
            cfg.handler.allow_unknown_fields = true;
        }
    }
}
