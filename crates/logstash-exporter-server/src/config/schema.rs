use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use logstash_exporter_core::error::{ExporterError, Result};

pub const HEALTHZ_PATH: &str = "/healthz";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub upstream: UpstreamSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            upstream: UpstreamSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ExporterError::UnsupportedVersion);
        }
        self.server.validate()?;
        self.upstream.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            metrics_path: default_metrics_path(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.metrics_path.starts_with('/') {
            return Err(ExporterError::BadConfig(
                "server.metrics_path must start with '/'".into(),
            ));
        }
        if self.metrics_path == HEALTHZ_PATH {
            return Err(ExporterError::BadConfig(format!(
                "server.metrics_path must not be {HEALTHZ_PATH}"
            )));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            ExporterError::BadConfig(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_metrics_path() -> String {
    "/metrics".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    /// Logstash API address, `host:port` without scheme.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl UpstreamSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ExporterError::BadConfig("upstream.host must not be empty".into()));
        }
        if self.host.contains("://") || self.host.contains('/') {
            return Err(ExporterError::BadConfig(
                "upstream.host must be host:port without scheme or path".into(),
            ));
        }
        if !(100..=60000).contains(&self.timeout_ms) {
            return Err(ExporterError::BadConfig(
                "upstream.timeout_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_host() -> String {
    "localhost:9600".into()
}
fn default_timeout_ms() -> u64 {
    3000
}
