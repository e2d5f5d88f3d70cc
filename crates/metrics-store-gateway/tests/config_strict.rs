#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use clap::Parser;
use metrics_store_gateway::config::{self, Cli};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
handler:
  max_request_body_sise: 123 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen_port, 4000);
    assert_eq!(cfg.handler.max_request_body_size, 1_048_576);
    assert!(!cfg.handler.allow_unknown_fields);
    assert!(!cfg.debug);
}

#[test]
fn rejects_port_zero() {
    let bad = r#"
version: 1
server:
  listen_port: 0
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("listen_port"), "{err}");
}

#[test]
fn rejects_out_of_range_port() {
    let bad = r#"
version: 1
server:
  listen_port: 70000
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn rejects_unknown_version() {
    assert!(config::load_from_str("version: 2\n").is_err());
}

#[test]
fn rejects_zero_body_limit() {
    let bad = r#"
version: 1
handler:
  max_request_body_size: 0
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn cli_flags_override_defaults() {
    let cli = Cli::try_parse_from([
        "metrics-store",
        "--listen-port",
        "8081",
        "--debug",
        "--max-request-body-size",
        "512",
        "--allow-unknown-fields",
    ])
    .unwrap();

    let cfg = config::resolve(&cli).unwrap();
    assert_eq!(cfg.server.listen_port, 8081);
    assert!(cfg.debug);
    assert_eq!(cfg.handler.max_request_body_size, 512);
    assert!(cfg.handler.allow_unknown_fields);
}

#[test]
fn cli_rejects_port_zero() {
    assert!(Cli::try_parse_from(["metrics-store", "--listen-port", "0"]).is_err());
}

#[test]
fn cli_zero_body_limit_fails_validation() {
    let cli = Cli::try_parse_from(["metrics-store", "--max-request-body-size", "0"]).unwrap();
    assert!(config::resolve(&cli).is_err());
}
