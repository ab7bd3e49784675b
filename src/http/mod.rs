//! HTTP server module with optional TLS.
//!
//! This module provides the listener for the service in two modes:
//! - **None (default)**: Plain HTTP, for use behind a reverse proxy or load balancer
//! - **Manual**: User-provided certificate and key files
//!
//! The server includes:
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Certificate hot-reload via SIGHUP (manual mode)

mod server;
mod shutdown;
mod tls;

pub use server::{bind, serve, serve_tls, start_server, ServerError};
pub use tls::{install_crypto_provider, load_certificates, reload_certificates};
