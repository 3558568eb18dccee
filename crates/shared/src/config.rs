//! Application configuration management.
//!
//! The hosted-backend client is constructed from this configuration at
//! startup; required keys that are absent fail loading explicitly rather
//! than surfacing later as a half-configured global.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Hosted backend configuration.
    pub backend: BackendConfig,
}

/// Hosted backend (data store) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the hosted backend.
    pub url: String,
    /// API key used to authenticate requests.
    pub api_key: String,
    /// Schema the tables live in.
    #[serde(default = "default_schema")]
    pub schema: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_schema() -> String {
    "public".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or a required key
    /// (`backend.url`, `backend.api_key`) is missing.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TANTIEM").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
