use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub reference: ReferenceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Locations of the currency/zone reference-data documents
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceConfig {
    pub zones_file: Option<String>,
    pub currencies_file: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            reference: ReferenceConfig {
                zones_file: env::var("ZONES_FILE").ok(),
                currencies_file: env::var("CURRENCIES_FILE").ok(),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

        if !LEVELS.contains(&self.app.log_level.as_str()) {
            return Err(AppError::Configuration(format!(
                "Invalid LOG_LEVEL '{}', expected one of {:?}",
                self.app.log_level, LEVELS
            )));
        }

        Ok(())
    }
}

/// Initialize tracing with an env-filter falling back to the configured level
pub fn init_tracing(config: &Config) {
    let default_filter = format!("commercekit={}", config.app.log_level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
