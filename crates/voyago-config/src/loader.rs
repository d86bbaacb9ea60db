//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, Environment, File};
use std::path::Path;
use tracing::{debug, info};
use voyago_core::VoyagoError;

/// Loads the application configuration once at startup.
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. Environment variables with `VOYAGO_` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, VoyagoError> {
        let config = Self::load_config(&config_dir.into())?;
        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, VoyagoError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, VoyagoError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("VOYAGO_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("VOYAGO")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| VoyagoError::Configuration(format!("Failed to build config: {}", e)))?;

        config
            .try_deserialize::<AppConfig>()
            .map_err(|e| VoyagoError::Configuration(format!("Failed to parse config: {}", e)))
    }
}
