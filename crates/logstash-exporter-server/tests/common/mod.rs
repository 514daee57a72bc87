//! In-process fake Logstash API shared by the server tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};

use logstash_exporter_core::metric::Sample;

pub const FULL_STATS: &str = r#"{"events":{"in":10,"out":8,"filtered":2},"flow":{"input_throughput":{"current":5.5},"filter_throughput":{"current":5.0},"output_throughput":{"current":4.8}}}"#;

/// Serve `body` with `status` on `/_node/stats`; returns the bound address.
pub async fn spawn_upstream(status: StatusCode, body: &'static str) -> SocketAddr {
    spawn_upstream_with_delay(status, body, Duration::ZERO).await
}

pub async fn spawn_upstream_with_delay(
    status: StatusCode,
    body: &'static str,
    delay: Duration,
) -> SocketAddr {
    let app = Router::new().route(
        "/_node/stats",
        get(move || async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            (status, body)
        }),
    );
    serve(app).await
}

/// Serve `status` on `/_node/stats` and count every request that arrives.
pub async fn spawn_counting_upstream(status: StatusCode) -> (SocketAddr, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let app = Router::new().route(
        "/_node/stats",
        get(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (status, "unavailable")
            }
        }),
    );
    (serve(app).await, hits)
}

pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
pub async fn dead_address() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn value(samples: &[Sample], name: &str) -> Option<f64> {
    samples.iter().find(|s| s.name() == name).map(|s| s.value())
}

pub fn names(samples: &[Sample]) -> Vec<String> {
    let mut v: Vec<String> = samples.iter().map(|s| s.name().to_string()).collect();
    v.sort();
    v
}
