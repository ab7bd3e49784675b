//! HTTP route handlers.
//!
//! The router exposes a single liveness route. Anything else falls through to
//! axum's default 404 (unknown path) or 405 (wrong method) responses. `get`
//! also answers `HEAD /health` with 200 and an empty body, which some probe
//! agents use.
//!
//! Every request runs inside a span tagged with its request ID.

pub mod health;

use axum::{middleware, routing::get, Router};
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
