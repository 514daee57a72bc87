//! Shared application state for the exporter.
//!
//! Owns the config and the registry. The Logstash collector is constructed
//! here and injected into the registry; handlers only ever see `AppState`.

use std::sync::Arc;

use logstash_exporter_core::error::Result;

use crate::collector::LogstashCollector;
use crate::config::ExporterConfig;
use crate::registry::Registry;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    registry: Registry,
}

impl AppState {
    /// Build state with the Logstash collector registered.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let registry = Registry::new();
        registry.register(Arc::new(LogstashCollector::from_config(&cfg.upstream)))?;
        Ok(Self::with_registry(cfg, registry))
    }

    /// Build state around a caller-assembled registry.
    pub fn with_registry(cfg: ExporterConfig, registry: Registry) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, registry }),
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }
}
