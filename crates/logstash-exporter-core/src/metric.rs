//! Metric descriptors and per-scrape samples.
//!
//! A `Descriptor` is built once and shared behind an `Arc`; a `Sample` is
//! produced fresh on every collection and points back at its descriptor.

use std::sync::Arc;

use crate::error::{ExporterError, Result};

/// Exposition type of a metric family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Gauge,
}

impl ValueType {
    /// Name used on the `# TYPE` line.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Gauge => "gauge",
        }
    }
}

/// Static shape of a metric: name, help, type and label names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    name: String,
    help: String,
    value_type: ValueType,
    label_names: Vec<String>,
}

impl Descriptor {
    pub fn new(name: impl Into<String>, help: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            value_type,
            label_names: Vec::new(),
        }
    }

    /// Unlabeled gauge.
    pub fn gauge(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self::new(name, help, ValueType::Gauge)
    }

    /// Declare variable label names. Samples of this descriptor must then be
    /// built with `Sample::with_labels`.
    pub fn with_label_names(mut self, names: &[&str]) -> Self {
        self.label_names = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }
}

/// One observed value of a descriptor.
#[derive(Debug, Clone)]
pub struct Sample {
    desc: Arc<Descriptor>,
    value: f64,
    label_values: Vec<String>,
}

impl Sample {
    /// Sample without label values.
    pub fn new(desc: &Arc<Descriptor>, value: f64) -> Self {
        Self {
            desc: Arc::clone(desc),
            value,
            label_values: Vec::new(),
        }
    }

    /// Sample with one value per declared label name, in declaration order.
    pub fn with_labels(desc: &Arc<Descriptor>, value: f64, label_values: &[&str]) -> Result<Self> {
        let expected = desc.label_names().len();
        if expected != label_values.len() {
            return Err(ExporterError::LabelMismatch {
                metric: desc.name().to_string(),
                expected,
                got: label_values.len(),
            });
        }
        Ok(Self {
            desc: Arc::clone(desc),
            value,
            label_values: label_values.iter().map(|v| v.to_string()).collect(),
        })
    }

    pub fn desc(&self) -> &Arc<Descriptor> {
        &self.desc
    }

    pub fn name(&self) -> &str {
        self.desc.name()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// `(name, value)` label pairs. Empty for unlabeled samples.
    pub fn labels(&self) -> impl Iterator<Item = (&str, &str)> {
        self.desc
            .label_names()
            .iter()
            .map(String::as_str)
            .zip(self.label_values.iter().map(String::as_str))
    }
}
