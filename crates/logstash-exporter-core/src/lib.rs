//! Logstash exporter core: stats document decoding, metric model, and text
//! exposition.
//!
//! This crate defines the upstream JSON sections, the descriptor/sample model
//! and the Prometheus text encoder. It carries no transport or runtime
//! dependencies so the translation rules can be exercised without a network.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed upstream data must surface as `SectionError` or
//! `serde_json::Error`, never as a crash of the scrape path.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod exposition;
pub mod metric;
pub mod stats;

/// Shared result type.
pub use error::{ExporterError, Result, SectionError};
