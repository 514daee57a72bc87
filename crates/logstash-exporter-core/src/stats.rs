//! Logstash `/_node/stats` document and the sections we translate.
//!
//! Decoding is two-phase: the top level is decoded into a map whose values
//! stay as raw JSON fragments, then each known section is parsed into its
//! typed struct on demand. A malformed section therefore fails alone and never
//! poisons its siblings.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::SectionError;

/// Key of the event counters section.
pub const EVENTS_SECTION: &str = "events";
/// Key of the flow rates section.
pub const FLOW_SECTION: &str = "flow";

/// Top-level stats document: section name to undecoded section body.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct StatsDocument {
    sections: HashMap<String, Box<RawValue>>,
}

impl StatsDocument {
    /// Decode a response body. Fails unless the body is a JSON object.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    pub fn section(&self, name: &str) -> Option<&RawValue> {
        self.sections.get(name).map(|raw| &**raw)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// `None` when the section is absent, otherwise the typed parse result.
    pub fn extract<T: DeserializeOwned>(&self, name: &str) -> Option<Result<T, SectionError>> {
        self.section(name).map(|raw| parse_section(name, raw))
    }

    pub fn events(&self) -> Option<Result<EventSection, SectionError>> {
        self.extract(EVENTS_SECTION)
    }

    pub fn flow(&self) -> Option<Result<FlowSection, SectionError>> {
        self.extract(FLOW_SECTION)
    }
}

// serde would happily fill a struct from a JSON array; sections must be objects.
fn parse_section<T: DeserializeOwned>(name: &str, raw: &RawValue) -> Result<T, SectionError> {
    if !raw.get().trim_start().starts_with('{') {
        return Err(SectionError::NotAnObject {
            section: name.to_string(),
        });
    }
    serde_json::from_str(raw.get()).map_err(|source| SectionError::Shape {
        section: name.to_string(),
        source,
    })
}

/// Cumulative event counters since Logstash start.
///
/// Missing counters read as zero; present counters must be non-negative
/// integers. Decoded exactly as `u64`, but exported as `f64` samples, so
/// values above 2^53 lose precision on the way out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EventSection {
    #[serde(rename = "in")]
    pub input: u64,
    #[serde(rename = "out")]
    pub output: u64,
    pub filtered: u64,
}

/// Instantaneous pipeline rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlowSection {
    pub input_throughput: Throughput,
    pub filter_throughput: Throughput,
    pub output_throughput: Throughput,
}

/// One flow metric. Logstash also reports windowed averages
/// (`last_1_minute`, `lifetime`, ...), which are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Throughput {
    pub current: f64,
}
