//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MOOD_GUIDE` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so the service starts with an empty environment.
//!
//! # Example
//!
//! ```no_run
//! use mood_guide::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod questionnaire;
mod server;

pub use error::{ConfigError, ValidationError};
pub use questionnaire::QuestionnaireConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Questionnaire behaviour (strict answer counts, RNG seed)
    #[serde(default)]
    pub questionnaire: QuestionnaireConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MOOD_GUIDE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MOOD_GUIDE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MOOD_GUIDE__QUESTIONNAIRE__STRICT_ANSWER_COUNT=true`
    ///   -> `questionnaire.strict_answer_count = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MOOD_GUIDE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "MOOD_GUIDE__SERVER__PORT",
        "MOOD_GUIDE__SERVER__ENVIRONMENT",
        "MOOD_GUIDE__SERVER__CORS_ORIGINS",
        "MOOD_GUIDE__QUESTIONNAIRE__STRICT_ANSWER_COUNT",
        "MOOD_GUIDE__QUESTIONNAIRE__RANDOM_SEED",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.questionnaire, QuestionnaireConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MOOD_GUIDE__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MOOD_GUIDE__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_questionnaire_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MOOD_GUIDE__QUESTIONNAIRE__STRICT_ANSWER_COUNT", "true");
        env::set_var("MOOD_GUIDE__QUESTIONNAIRE__RANDOM_SEED", "1234");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.questionnaire.strict_answer_count);
        assert_eq!(config.questionnaire.random_seed, Some(1234));
    }

    #[test]
    fn test_validate_rejects_bad_cors_origin() {
        let mut config = AppConfig::default();
        config.server.cors_origins = Some("bad\u{7f}origin".to_string());
        assert!(config.validate().is_err());
    }
}
