//! Application configuration.
//!
//! Configuration is assembled in three layers: `config/default.toml`, an
//! optional per-environment overlay (`config/<env>.toml`), and
//! `AGRIPORTAL__`-prefixed environment variables, each overriding the one
//! before it. Every logical section lives in its own sub-module.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::auth::AuthConfig;
use self::database::DatabaseConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// The fully merged configuration tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Authentication settings.
    pub auth: AuthConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load and validate the configuration for the given environment.
    ///
    /// Fails when no layer provides a mandatory value (such as the signing
    /// secrets) or when a value does not deserialize.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let merged = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("AGRIPORTAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = merged.try_deserialize()?;

        config.auth.validate()?;

        Ok(config)
    }
}
