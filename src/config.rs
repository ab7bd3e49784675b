//! Configuration loading and constants.
//!
//! The service runs without any configuration file. When one is given, every
//! section is optional and missing values fall back to the defaults below.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Liveness answers must never be served from an intermediate cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8000;

/// Seconds to wait for in-flight connections after a shutdown signal
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Conventional configuration file location (see `config/default.toml`)
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = formatcp!(
    "{}=debug,tower_http=debug",
    env!("CARGO_CRATE_NAME")
);

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
    #[serde(default)]
    pub tls: TlsConfig,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
            tls: TlsConfig::default(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }

    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    }

    /// Resolve host and port into a bindable address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port '{}:{}': {}",
                    self.host, self.port, e
                ))
            })
    }
}

/// How the listener terminates TLS
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain HTTP, for use behind a reverse proxy or in development
    #[default]
    None,
    /// User-provided certificate and key files
    Manual,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TlsConfig {
    #[serde(default)]
    pub mode: TlsMode,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides for the bind address.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.http.socket_addr()?;

        if self.http.tls.mode == TlsMode::Manual
            && (self.http.tls.cert_path.is_none() || self.http.tls.key_path.is_none())
        {
            return Err(ConfigError::Validation(
                "http.tls.mode = \"manual\" requires both cert_path and key_path".to_string(),
            ));
        }

        if !matches!(self.logging.format.to_ascii_lowercase().as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}' (expected \"text\" or \"json\")",
                self.logging.format
            )));
        }

        Ok(())
    }
}

/// Log filter priority: command line, then `RUST_LOG`, then [`DEFAULT_LOG_FILTER`].
pub fn resolve_log_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env)
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let config = AppConfig::load_or_default(None::<&str>).unwrap();
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, DEFAULT_PORT);
        assert_eq!(config.http.tls.mode, TlsMode::None);
        assert!(!config.logging.is_json());
        assert_eq!(
            config.http.socket_addr().unwrap(),
            "0.0.0.0:8000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_config("");
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, DEFAULT_PORT);
        assert_eq!(config.http.shutdown_timeout_seconds, DEFAULT_SHUTDOWN_TIMEOUT_SECS);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let file = write_config(
            r#"
            [http]
            port = 9090

            [logging]
            format = "json"
            "#,
        );
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, 9090);
        assert!(config.logging.is_json());
    }

    #[test]
    fn manual_tls_requires_paths() {
        let file = write_config(
            r#"
            [http.tls]
            mode = "manual"
            cert_path = "/tmp/cert.pem"
            "#,
        );
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn manual_tls_with_paths() {
        let file = write_config(
            r#"
            [http.tls]
            mode = "manual"
            cert_path = "/tmp/cert.pem"
            key_path = "/tmp/key.pem"
            "#,
        );
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.tls.mode, TlsMode::Manual);
    }

    #[test]
    fn rejects_bad_host() {
        let file = write_config("[http]\nhost = \"not a host\"\n");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let file = write_config("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn parse_and_io_errors() {
        let file = write_config("[http\nport = 1");
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            AppConfig::load(dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn cli_overrides_file_values() {
        let file = write_config("[http]\nhost = \"10.0.0.1\"\nport = 9090\n");
        let config = AppConfig::load(file.path())
            .unwrap()
            .with_overrides(Some("127.0.0.1".to_string()), None);
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9090);

        let config = config.with_overrides(None, Some(3000));
        assert_eq!(
            config.http.socket_addr().unwrap(),
            "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn log_filter_priority() {
        let cli = Some("backend=trace".to_string());
        let env = Some("warn".to_string());

        assert_eq!(resolve_log_filter(cli.clone(), env.clone()), "backend=trace");
        assert_eq!(resolve_log_filter(None, env), "warn");
        assert_eq!(resolve_log_filter(None, None), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn default_log_filter_names_crate() {
        assert_eq!(DEFAULT_LOG_FILTER, "backend=debug,tower_http=debug");
    }
}
