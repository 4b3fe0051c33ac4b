//! Configuration loading and constants.
//!
//! Loads application configuration from an optional TOML file and defines
//! constants for HTTP cache headers, logging, gateway timeouts and default
//! paths. `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Slide output is a pure function of the request body, but it is produced by
// POST and should never be stored by intermediaries. Liveness probes must
// always hit the process.

/// API responses are never reused
pub const HTTP_CACHE_API_MAX_AGE: u32 = 0;

pub const CACHE_CONTROL_API: &str = formatcp!("no-store, max-age={}", HTTP_CACHE_API_MAX_AGE);

// =============================================================================
// HTTP Server Defaults
// =============================================================================

/// Listen on all interfaces by default
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Seconds to wait for in-flight requests during graceful shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Gateway Constants
// =============================================================================

/// Timeout in seconds for calls to an upstream slide engine
pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Default Strings
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "repitchbook=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Log formats accepted in `[logging] format`
pub const LOG_FORMATS: &[&str] = &["text", "json"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Settings for the `/create-pitch` gateway route
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
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
        self.format == "json"
    }
}

/// Where `/create-pitch` sends its payload.
///
/// Without an `engine_url` the slides are generated in-process.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Full URL of an upstream `/generate` endpoint
    pub engine_url: Option<String>,
    /// Request timeout for the upstream call (default: 30)
    #[serde(default = "GatewayConfig::default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            engine_url: None,
            timeout_seconds: Self::default_timeout(),
        }
    }
}

impl GatewayConfig {
    fn default_timeout() -> u64 {
        DEFAULT_GATEWAY_TIMEOUT_SECS
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}', expected one of: {}",
                self.logging.format,
                LOG_FORMATS.join(", ")
            )));
        }

        if self.gateway.timeout_seconds == 0 {
            return Err(ConfigError::Validation(
                "gateway.timeout_seconds must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
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
