//! Configuration loading
//!
//! All sections are optional and fall back to their defaults; file values
//! are layered under `SPEECH_GOVERNOR__`-prefixed environment overrides.

use crate::condenser::CondenserConfig;
use crate::error::{GovernorError, Result};
use crate::governor::GovernorConfig;
use serde::{Deserialize, Serialize};

/// Server configuration for the condensation backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Env-filter directive, e.g. "info" or "speech_governor=debug"
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON-formatted log lines
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub governor: GovernorConfig,

    #[serde(default)]
    pub condenser: CondenserConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from an optional file plus environment overrides
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SPEECH_GOVERNOR")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| GovernorError::Configuration(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| GovernorError::Configuration(e.to_string()))?;

        config.governor.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(toml: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .map_err(|e| GovernorError::Configuration(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| GovernorError::Configuration(e.to_string()))?;

        config.governor.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.governor.budget_seconds, 60.0);
        assert_eq!(config.governor.short_text_words, 150);
        assert_eq!(config.governor.trim_ratio, 0.5);
        assert_eq!(config.condenser.max_output_tokens, 100);
        assert_eq!(config.condenser.min_output_tokens, 50);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_loading_with_all_sections() {
        let config = Config::from_toml(
            r#"
            [governor]
            budget_seconds = 45.0
            short_text_words = 120
            trim_ratio = 0.4
            condense_timeout_ms = 8000

            [condenser]
            endpoint = "http://condenser:9000/v1/condense"
            timeout_ms = 4000
            max_output_tokens = 80
            min_output_tokens = 40

            [server]
            host = "127.0.0.1"
            port = 9090

            [logging]
            level = "debug"
            json = true
        "#,
        )
        .unwrap();

        assert_eq!(config.governor.budget_seconds, 45.0);
        assert_eq!(config.governor.short_text_words, 120);
        assert_eq!(config.condenser.endpoint, "http://condenser:9000/v1/condense");
        assert_eq!(config.condenser.max_output_tokens, 80);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let config = Config::from_toml(
            r#"
            [governor]
            budget_seconds = 30.0
        "#,
        )
        .unwrap();

        assert_eq!(config.governor.budget_seconds, 30.0);
        assert_eq!(config.governor.short_text_words, 150);
        assert_eq!(config.condenser.timeout_ms, 5000);
    }

    #[test]
    fn test_invalid_governor_section_rejected() {
        let result = Config::from_toml(
            r#"
            [governor]
            budget_seconds = -1.0
        "#,
        );
        assert!(result.is_err());
    }
}
