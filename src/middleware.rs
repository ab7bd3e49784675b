//! Request ID middleware for correlating logs with requests.
//!
//! Load balancers and probe agents often stamp requests with an
//! `x-request-id` header. When it carries a UUID, that ID is reused so the
//! service's logs line up with the caller's; otherwise a fresh UUID v4 is
//! generated. Responses are passed through untouched.

use std::time::Instant;

use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Header consulted for an upstream request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID stored in request extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Reuse a UUID from `x-request-id`, or generate a new one.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let upstream = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok());

        Self(upstream.unwrap_or_else(Uuid::new_v4))
    }
}

/// Wraps each request in a `request` span carrying its ID, method and path,
/// then logs the final status and latency inside that span.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_headers(request.headers());
    request.extensions_mut().insert(request_id);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id.0,
        method = %request.method(),
        path = %request.uri().path(),
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    let started = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let duration_ms = started.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    span.record("status", status);
    span.record("duration_ms", duration_ms);
    span.in_scope(|| tracing::info!(status, duration_ms, "Request completed"));

    response
}
