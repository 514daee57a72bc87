//! Explicit metrics registry.
//!
//! Collectors are constructed by the caller and handed in; nothing registers
//! itself globally. `gather` runs every collector for one scrape and groups the
//! results into families for the text encoder.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use futures_util::future::join_all;

use logstash_exporter_core::error::{ExporterError, Result};
use logstash_exporter_core::exposition::{self, MetricFamily};
use logstash_exporter_core::metric::Descriptor;

use crate::collector::Collector;

#[derive(Default)]
pub struct Registry {
    collectors: DashMap<String, Arc<dyn Collector>>,
    descriptors: DashMap<String, Arc<Descriptor>>,
    // Serializes check-then-insert in `register`; `gather` never takes it.
    register_lock: Mutex<()>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            collectors: DashMap::new(),
            descriptors: DashMap::new(),
            register_lock: Mutex::new(()),
        }
    }

    /// Register a collector. Fails if its id or any of its metric names is
    /// already taken; on failure nothing is registered. Safe to call
    /// concurrently: registrations are applied one at a time.
    pub fn register(&self, collector: Arc<dyn Collector>) -> Result<()> {
        let _guard = self.register_lock.lock().unwrap_or_else(|e| e.into_inner());

        let id = collector.id().to_string();
        if self.collectors.contains_key(&id) {
            return Err(ExporterError::AlreadyRegistered(format!("collector {id}")));
        }

        let descs = collector.describe();
        let mut seen = HashSet::new();
        for d in &descs {
            if self.descriptors.contains_key(d.name()) || !seen.insert(d.name()) {
                return Err(ExporterError::AlreadyRegistered(format!("metric {}", d.name())));
            }
        }

        for d in descs {
            self.descriptors.insert(d.name().to_string(), d);
        }
        self.collectors.insert(id, collector);
        Ok(())
    }

    pub fn registered_collectors(&self) -> Vec<String> {
        self.collectors.iter().map(|e| e.key().clone()).collect()
    }

    /// All registered descriptors, sorted by name.
    pub fn describe(&self) -> Vec<Arc<Descriptor>> {
        let mut out: Vec<Arc<Descriptor>> =
            self.descriptors.iter().map(|e| Arc::clone(e.value())).collect();
        out.sort_by(|a, b| a.name().cmp(b.name()));
        out
    }

    /// Run all collectors concurrently and group their samples.
    pub async fn gather(&self) -> Vec<MetricFamily> {
        // Snapshot first: map guards must not be held across await points.
        let collectors: Vec<Arc<dyn Collector>> =
            self.collectors.iter().map(|e| Arc::clone(e.value())).collect();

        let batches = join_all(collectors.iter().map(|c| c.collect())).await;

        let mut samples = Vec::new();
        for s in batches.into_iter().flatten() {
            if self.descriptors.contains_key(s.name()) {
                samples.push(s);
            } else {
                tracing::warn!(metric = s.name(), "dropping sample of undescribed metric");
            }
        }
        exposition::group(samples)
    }

    /// One scrape rendered in text exposition format.
    pub async fn render(&self) -> String {
        exposition::encode_text(&self.gather().await)
    }
}
