//! Shared error types across the exporter crates.

use thiserror::Error;

/// Stable error codes, used in startup diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Configuration failed to parse or validate.
    BadConfig,
    /// Unsupported config file version.
    UnsupportedVersion,
    /// Collector or metric name registered twice.
    AlreadyRegistered,
    /// Label values do not match the descriptor's label names.
    LabelMismatch,
    /// Anything else.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::AlreadyRegistered => "ALREADY_REGISTERED",
            ErrorCode::LabelMismatch => "LABEL_MISMATCH",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Startup and registration failures. Scrape-time faults never use this type;
/// they are logged and absorbed by the collector.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("already registered: {0}")]
    AlreadyRegistered(String),
    #[error("label mismatch on {metric}: expected {expected} values, got {got}")]
    LabelMismatch {
        metric: String,
        expected: usize,
        got: usize,
    },
    #[error("internal: {0}")]
    Internal(String),
}

impl ExporterError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExporterError::BadConfig(_) => ErrorCode::BadConfig,
            ExporterError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            ExporterError::AlreadyRegistered(_) => ErrorCode::AlreadyRegistered,
            ExporterError::LabelMismatch { .. } => ErrorCode::LabelMismatch,
            ExporterError::Internal(_) => ErrorCode::Internal,
        }
    }
}

/// A present stats section did not match its expected shape.
#[derive(Debug, Error)]
pub enum SectionError {
    #[error("section `{section}` is not a JSON object")]
    NotAnObject { section: String },
    #[error("section `{section}` has unexpected shape: {source}")]
    Shape {
        section: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SectionError {
    pub fn section(&self) -> &str {
        match self {
            SectionError::NotAnObject { section } => section,
            SectionError::Shape { section, .. } => section,
        }
    }
}
