#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use logstash_exporter_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
upstream:
  host: "localhost:9600"
  timeout: 3000 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.metrics_path, "/metrics");
    assert_eq!(cfg.upstream.host, "localhost:9600");
    assert_eq!(cfg.upstream.timeout(), Duration::from_secs(3));
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn host_with_scheme_rejected() {
    let bad = r#"
version: 1
upstream:
  host: "http://localhost:9600"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn timeout_out_of_range_rejected() {
    let bad = "version: 1\nupstream:\n  timeout_ms: 10\n";
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn listen_must_be_socket_addr() {
    let bad = "version: 1\nserver:\n  listen: \"not-an-addr\"\n";
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn metrics_path_rules() {
    assert!(config::load_from_str("version: 1\nserver:\n  metrics_path: \"metrics\"\n").is_err());
    assert!(config::load_from_str("version: 1\nserver:\n  metrics_path: \"/healthz\"\n").is_err());
    assert!(config::load_from_str("version: 1\nserver:\n  metrics_path: \"/probe\"\n").is_ok());
}

#[test]
fn missing_file_is_bad_config() {
    let err = config::load(Some("/nonexistent/logstash-exporter.yaml")).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}
