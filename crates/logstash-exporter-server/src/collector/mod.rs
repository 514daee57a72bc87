//! Collectors produce metric samples on demand, once per scrape.

pub mod logstash;

use std::sync::Arc;

use async_trait::async_trait;

use logstash_exporter_core::metric::{Descriptor, Sample};

pub use logstash::LogstashCollector;

/// A source of samples registered into a `Registry`.
///
/// `collect` must not fail: faults are logged inside the collector and show up
/// as missing samples.
#[async_trait]
pub trait Collector: Send + Sync {
    /// Unique registration key.
    fn id(&self) -> &str;
    /// Every descriptor this collector may emit, regardless of upstream state.
    fn describe(&self) -> Vec<Arc<Descriptor>>;
    async fn collect(&self) -> Vec<Sample>;
}
