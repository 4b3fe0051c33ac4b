//! Shared application state for request handlers.

use std::sync::Arc;
use std::time::Duration;

use tera::Tera;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::templates::init_templates;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Everything here is read-only after startup: the configuration, the
/// compiled slide templates, and the HTTP client used by the pitch gateway.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
    pub engine_client: reqwest::Client,
}

impl AppState {
    /// Creates a new application state from the given configuration, templates and client.
    pub fn new(config: AppConfig, tera: Tera, engine_client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            engine_client,
        }
    }

    /// Compiles templates and builds the gateway client from configuration.
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let tera = init_templates()?;
        let engine_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.gateway.timeout_seconds))
            .build()?;
        Ok(Self::new(config, tera, engine_client))
    }
}
