//! Logstash node stats collector.
//!
//! Each collection fetches `/_node/stats` once and translates the `events` and
//! `flow` sections into gauges. The two sections fail independently. `up` is
//! always emitted with value 1: it reports that collection ran, not that
//! Logstash answered.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use logstash_exporter_core::metric::{Descriptor, Sample};
use logstash_exporter_core::stats::{EventSection, FlowSection, StatsDocument, EVENTS_SECTION, FLOW_SECTION};

use crate::collector::Collector;
use crate::config::UpstreamSection;
use crate::upstream::StatsClient;

/// Prefix for every metric except `up`.
pub const NAMESPACE: &str = "logstash";

fn fq_name(name: &str) -> String {
    format!("{NAMESPACE}_{name}")
}

pub struct LogstashCollector {
    client: StatsClient,
    up: Arc<Descriptor>,
    events_in: Arc<Descriptor>,
    events_filtered: Arc<Descriptor>,
    events_out: Arc<Descriptor>,
    flow_input_throughput: Arc<Descriptor>,
    flow_filter_throughput: Arc<Descriptor>,
    flow_output_throughput: Arc<Descriptor>,
}

impl LogstashCollector {
    /// No I/O happens here.
    pub fn new(host: &str, timeout: Duration) -> Self {
        let gauge = |name: String, help: &str| Arc::new(Descriptor::gauge(name, help));

        Self {
            client: StatsClient::new(host, timeout),
            up: gauge("up".into(), "Was the last query successful."),
            events_in: gauge(fq_name("events_in"), "Number of logstash input events."),
            events_filtered: gauge(fq_name("events_filtered"), "Number of logstash filtered events."),
            events_out: gauge(fq_name("events_out"), "Number of logstash output events."),
            flow_input_throughput: gauge(
                fq_name("flow_input_throughput"),
                "Throughput of logstash event input.",
            ),
            flow_filter_throughput: gauge(
                fq_name("flow_filter_throughput"),
                "Throughput of logstash event filter.",
            ),
            flow_output_throughput: gauge(
                fq_name("flow_output_throughput"),
                "Throughput of logstash event output.",
            ),
        }
    }

    pub fn from_config(cfg: &UpstreamSection) -> Self {
        Self::new(&cfg.host, cfg.timeout())
    }

    pub fn node_stats_uri(&self) -> &str {
        self.client.uri()
    }

    /// Translate a decoded document. Absent sections are skipped silently,
    /// malformed ones are logged and skipped.
    pub fn collect_document(&self, doc: &StatsDocument, out: &mut Vec<Sample>) {
        match doc.events() {
            Some(Ok(events)) => self.collect_events(&events, out),
            Some(Err(e)) => {
                tracing::warn!(section = EVENTS_SECTION, error = %e, "stats section extract failed")
            }
            None => {}
        }
        match doc.flow() {
            Some(Ok(flow)) => self.collect_flow(&flow, out),
            Some(Err(e)) => {
                tracing::warn!(section = FLOW_SECTION, error = %e, "stats section extract failed")
            }
            None => {}
        }
    }

    fn collect_events(&self, events: &EventSection, out: &mut Vec<Sample>) {
        out.push(Sample::new(&self.events_in, events.input as f64));
        out.push(Sample::new(&self.events_out, events.output as f64));
        out.push(Sample::new(&self.events_filtered, events.filtered as f64));
    }

    fn collect_flow(&self, flow: &FlowSection, out: &mut Vec<Sample>) {
        out.push(Sample::new(&self.flow_input_throughput, flow.input_throughput.current));
        out.push(Sample::new(&self.flow_filter_throughput, flow.filter_throughput.current));
        out.push(Sample::new(&self.flow_output_throughput, flow.output_throughput.current));
    }
}

#[async_trait]
impl Collector for LogstashCollector {
    fn id(&self) -> &str {
        NAMESPACE
    }

    fn describe(&self) -> Vec<Arc<Descriptor>> {
        vec![
            Arc::clone(&self.up),
            Arc::clone(&self.events_in),
            Arc::clone(&self.events_filtered),
            Arc::clone(&self.events_out),
            Arc::clone(&self.flow_input_throughput),
            Arc::clone(&self.flow_filter_throughput),
            Arc::clone(&self.flow_output_throughput),
        ]
    }

    async fn collect(&self) -> Vec<Sample> {
        let mut out = Vec::with_capacity(7);

        match self.client.fetch().await {
            Ok(doc) => self.collect_document(&doc, &mut out),
            Err(e) => tracing::warn!(
                uri = %self.client.uri(),
                kind = e.kind(),
                error = %e,
                "stats fetch failed"
            ),
        }

        out.push(Sample::new(&self.up, 1.0));
        tracing::debug!(samples = out.len(), "collection finished");
        out
    }
}
