//! Placeholder backend service.
//!
//! Answers liveness probes on `GET /health` with `{"status":"ok"}` until the
//! real backend replaces it.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
