//! Operational HTTP endpoints.
//!
//! - `/healthz`       : exporter liveness (does not touch Logstash)
//! - `<metrics_path>` : Prometheus text format, always 200

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use logstash_exporter_core::exposition::CONTENT_TYPE;

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Upstream failures degrade the body, never the status code.
pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.registry().render().await;

    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response()
}
