//! Certificate loading for manual TLS mode.

use std::sync::Once;

use axum_server::tls_rustls::RustlsConfig;

use crate::config::TlsConfig;

use super::ServerError;

static CRYPTO_PROVIDER: Once = Once::new();

/// Install aws-lc-rs as the process-wide rustls provider.
///
/// rustls refuses to pick a default when more than one provider feature is
/// compiled in, so this runs before any certificate is loaded.
pub fn install_crypto_provider() {
    CRYPTO_PROVIDER.call_once(|| {
        if rustls::crypto::aws_lc_rs::default_provider()
            .install_default()
            .is_err()
        {
            tracing::debug!("rustls crypto provider already installed");
        }
    });
}

/// Certificate and key paths for manual mode.
pub fn manual_paths(tls: &TlsConfig) -> Result<(&str, &str), ServerError> {
    match (&tls.cert_path, &tls.key_path) {
        (Some(cert), Some(key)) => Ok((cert, key)),
        _ => Err(ServerError::TlsConfig(
            "manual TLS requires cert_path and key_path".to_string(),
        )),
    }
}

/// Load a PEM certificate chain and private key.
pub async fn load_certificates(cert_path: &str, key_path: &str) -> Result<RustlsConfig, ServerError> {
    install_crypto_provider();

    RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .map_err(|e| ServerError::TlsConfig(format!("Failed to load certificates: {}", e)))
}

/// Swap the certificates served by `config` for the ones currently on disk.
///
/// On failure `config` keeps serving the previous certificates.
pub async fn reload_certificates(
    config: &RustlsConfig,
    cert_path: &str,
    key_path: &str,
) -> Result<(), ServerError> {
    match config.reload_from_pem_file(cert_path, key_path).await {
        Ok(()) => {
            tracing::info!(cert = %cert_path, key = %key_path, "TLS certificates reloaded successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                cert = %cert_path,
                key = %key_path,
                "Failed to reload TLS certificates, keeping previous ones"
            );
            Err(ServerError::TlsConfig(format!("Failed to reload certificates: {}", e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_paths_requires_both() {
        let mut tls = TlsConfig {
            cert_path: Some("cert.pem".to_string()),
            ..TlsConfig::default()
        };
        assert!(matches!(manual_paths(&tls), Err(ServerError::TlsConfig(_))));

        tls.key_path = Some("key.pem".to_string());
        assert_eq!(manual_paths(&tls).unwrap(), ("cert.pem", "key.pem"));
    }

    #[test]
    fn provider_install_is_repeatable() {
        install_crypto_provider();
        install_crypto_provider();
        assert!(rustls::crypto::CryptoProvider::get_default().is_some());
    }
}
