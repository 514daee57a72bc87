//! Exporter config loader (strict parsing).

pub mod schema;

use std::fs;

use logstash_exporter_core::error::{ExporterError, Result};

pub use schema::{ExporterConfig, ServerSection, UpstreamSection};

/// Environment variable consulted when no path is passed on the command line.
pub const CONFIG_ENV: &str = "LOGSTASH_EXPORTER_CONFIG";

pub fn load_from_file(path: &str) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ExporterError::BadConfig(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| ExporterError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config source: explicit path, then `LOGSTASH_EXPORTER_CONFIG`,
/// then built-in defaults.
pub fn load(path: Option<&str>) -> Result<ExporterConfig> {
    match path {
        Some(p) => load_from_file(p),
        None => match std::env::var(CONFIG_ENV) {
            Ok(p) if !p.is_empty() => load_from_file(&p),
            _ => {
                let cfg = ExporterConfig::default();
                cfg.validate()?;
                Ok(cfg)
            }
        },
    }
}
