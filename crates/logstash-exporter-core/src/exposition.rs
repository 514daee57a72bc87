//! Prometheus text exposition (format version 0.0.4).
//!
//! Samples are grouped into families by metric name; families are emitted in
//! name order so output is deterministic regardless of collection order.
//! Families without samples are omitted entirely.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Arc;

use crate::metric::{Descriptor, Sample};

/// Content type served with the text format.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// All samples sharing one descriptor.
#[derive(Debug, Clone)]
pub struct MetricFamily {
    pub desc: Arc<Descriptor>,
    pub samples: Vec<Sample>,
}

/// Group samples by metric name, sorted by name. Within a family, samples keep
/// a stable order by label values.
pub fn group(samples: Vec<Sample>) -> Vec<MetricFamily> {
    let mut families: BTreeMap<String, MetricFamily> = BTreeMap::new();
    for s in samples {
        families
            .entry(s.name().to_string())
            .or_insert_with(|| MetricFamily {
                desc: Arc::clone(s.desc()),
                samples: Vec::new(),
            })
            .samples
            .push(s);
    }

    families
        .into_values()
        .map(|mut f| {
            f.samples
                .sort_by_key(|s| s.labels().map(|(_, v)| v.to_string()).collect::<Vec<_>>());
            f
        })
        .collect()
}

/// Render families in text exposition format.
pub fn encode_text(families: &[MetricFamily]) -> String {
    let mut out = String::new();
    for f in families {
        if f.samples.is_empty() {
            continue;
        }
        let name = f.desc.name();
        let _ = writeln!(out, "# HELP {} {}", name, escape_help(f.desc.help()));
        let _ = writeln!(out, "# TYPE {} {}", name, f.desc.value_type().as_str());
        for s in &f.samples {
            let label_str = s
                .labels()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            if label_str.is_empty() {
                let _ = writeln!(out, "{} {}", name, format_value(s.value()));
            } else {
                let _ = writeln!(out, "{}{{{}}} {}", name, label_str, format_value(s.value()));
            }
        }
    }
    out
}

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Sample value in exposition notation. Integral values print without a
/// fractional part (`5`, not `5.0`).
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{v}")
    }
}
