//! Observability middleware for request tracking and metrics.

use axum::{
    body::Body,
    extract::Request,
    http::{header::HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use super::metrics::METRICS;

/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID middleware - adds request ID to all requests.
///
/// Reuses an incoming `x-request-id` or generates a UUIDv4, runs the rest
/// of the stack inside a span carrying it, and echoes it on the response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), header_value);
    }

    response
}

/// Metrics middleware - records HTTP request metrics.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    METRICS.http_requests_in_flight.inc();
    let response = next.run(request).await;
    METRICS.http_requests_in_flight.dec();

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    METRICS.record_http_request(&method, &path, status, duration);

    tracing::debug!(
        method = %method,
        path = %path,
        status = %status,
        duration_ms = %format!("{:.2}", duration * 1000.0),
        "Request completed"
    );

    response
}

/// Get metrics endpoint handler.
pub async fn metrics_handler() -> Response {
    match METRICS.encode() {
        Ok(output) => Response::builder()
            .status(StatusCode::OK)
            .header("content-type", "text/plain; version=0.0.4; charset=utf-8")
            .body(Body::from(output))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
