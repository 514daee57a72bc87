//! HTTP client for the Logstash node stats API.
//!
//! One request per call, bounded by a deadline, no retries. Every failure mode
//! maps onto `FetchError` so the collector can log it and move on.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client as HttpClient, StatusCode};
use thiserror::Error;

use logstash_exporter_core::stats::StatsDocument;

/// Path of the node stats endpoint on the Logstash API.
pub const NODE_STATS_PATH: &str = "/_node/stats";

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connect/DNS/timeout or body read failure.
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(e) if e.is_timeout() => "timeout",
            FetchError::Transport(_) => "transport",
            FetchError::Status(_) => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatsClient {
    http: HttpClient,
    uri: String,
    timeout: Duration,
}

impl StatsClient {
    /// Build a client for `http://<host>/_node/stats`. Never fails: if the
    /// tuned client cannot be built the default one is used, and the deadline
    /// is still applied per request.
    pub fn new(host: &str, timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(2)
            .build()
            .unwrap_or_default();

        Self {
            http,
            uri: format!("http://{host}{NODE_STATS_PATH}"),
            timeout,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// GET the raw body. Anything but `200 OK` is an error.
    async fn fetch_body(&self) -> Result<Bytes, FetchError> {
        let response = self
            .http
            .get(&self.uri)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        Ok(response.bytes().await?)
    }

    /// GET and decode the top level of the stats document.
    pub async fn fetch(&self) -> Result<StatsDocument, FetchError> {
        let body = self.fetch_body().await?;
        Ok(StatsDocument::from_slice(&body)?)
    }
}
