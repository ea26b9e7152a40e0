//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `VENUEBOOK` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use venuebook_core::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod access;
mod database;
mod error;
mod retry;

pub use access::AccessConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use retry::RetryConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Access policy thresholds (grace window, banner window)
    #[serde(default)]
    pub access: AccessConfig,

    /// Retry policy bounds
    #[serde(default)]
    pub retry: RetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads `.env` if present, then reads environment variables with the
    /// `VENUEBOOK` prefix, `__` separating nested values:
    ///
    /// - `VENUEBOOK__DATABASE__URL=...` -> `database.url`
    /// - `VENUEBOOK__ACCESS__GRACE_DAYS=5` -> `access.grace_days`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VENUEBOOK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.database.validate()?;
        self.access.validate()?;
        self.retry.validate()?;
        Ok(())
    }
}
