//! HTTP/HTTPS server startup logic.

use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;

use crate::config::{ConfigError, HttpServerConfig, TlsConfig, TlsMode};

use super::{shutdown, tls};

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(std::io::Error),

    #[error(transparent)]
    InvalidAddress(#[from] ConfigError),

    #[error("Failed to load TLS configuration: {0}")]
    TlsConfig(String),

    #[error("Server error: {0}")]
    Server(std::io::Error),
}

/// Start the HTTP/HTTPS server based on configuration.
///
/// Installs the SIGINT/SIGTERM handler and blocks until the server shuts down.
pub async fn start_server(app: Router, config: &HttpServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let handle = Handle::new();

    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.shutdown_timeout_seconds),
    );

    serve(app, addr, &config.tls, handle).await
}

/// Serve `app` on `addr` until `handle` is shut down.
///
/// Certificates are loaded before the port is bound, so a TLS error never
/// leaves a listener behind.
pub async fn serve(
    app: Router,
    addr: SocketAddr,
    tls_config: &TlsConfig,
    handle: Handle,
) -> Result<(), ServerError> {
    match tls_config.mode {
        TlsMode::None => {
            let listener = bind(addr)?;
            tracing::info!(%addr, "Starting HTTP server (no TLS)");
            axum_server::from_tcp(listener)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .map_err(ServerError::Server)?;
        }
        TlsMode::Manual => {
            let (cert_path, key_path) = tls::manual_paths(tls_config)?;
            let rustls_config = tls::load_certificates(cert_path, key_path).await?;
            let listener = bind(addr)?;

            shutdown::setup_reload_handler(
                rustls_config.clone(),
                cert_path.to_string(),
                key_path.to_string(),
            );

            tracing::info!(%addr, cert = %cert_path, key = %key_path, "Starting HTTPS server (manual certs)");
            serve_tls(app, listener, rustls_config, handle).await?;
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Serve `app` over TLS on an already bound listener.
pub async fn serve_tls(
    app: Router,
    listener: TcpListener,
    rustls_config: RustlsConfig,
    handle: Handle,
) -> Result<(), ServerError> {
    axum_server::from_tcp_rustls(listener, rustls_config)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(ServerError::Server)
}

/// Bind a non-blocking listener so bind failures surface before serving.
pub fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    let listener = TcpListener::bind(addr).map_err(ServerError::Bind)?;
    listener.set_nonblocking(true).map_err(ServerError::Bind)?;
    Ok(listener)
}
