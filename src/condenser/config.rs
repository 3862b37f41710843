//! Configuration for the condensation backend

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Condenser client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CondenserConfig {
    /// Condensation endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key (read from env CONDENSER_API_KEY if not set)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum condensed output length in tokens
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: usize,

    /// Minimum condensed output length in tokens
    #[serde(default = "default_min_output_tokens")]
    pub min_output_tokens: usize,
}

// Default value functions
fn default_endpoint() -> String {
    "http://localhost:8080/v1/condense".to_string()
}
fn default_timeout_ms() -> u64 {
    5000
}
fn default_max_output_tokens() -> usize {
    100
}
fn default_min_output_tokens() -> usize {
    50
}

impl Default for CondenserConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
            max_output_tokens: default_max_output_tokens(),
            min_output_tokens: default_min_output_tokens(),
        }
    }
}

impl CondenserConfig {
    /// Load configuration overrides from environment variables
    pub fn from_env(mut self) -> Self {
        if let Ok(val) = std::env::var("CONDENSER_ENDPOINT") {
            self.endpoint = val;
        }

        if let Ok(val) = std::env::var("CONDENSER_API_KEY") {
            self.api_key = Some(val);
        }

        if let Ok(val) = std::env::var("CONDENSER_TIMEOUT_MS") {
            if let Ok(timeout) = val.parse() {
                self.timeout_ms = timeout;
            }
        }

        if let Ok(val) = std::env::var("CONDENSER_MAX_OUTPUT_TOKENS") {
            if let Ok(max) = val.parse() {
                self.max_output_tokens = max;
            }
        }

        if let Ok(val) = std::env::var("CONDENSER_MIN_OUTPUT_TOKENS") {
            if let Ok(min) = val.parse() {
                self.min_output_tokens = min;
            }
        }

        self
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CondenserConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8080/v1/condense");
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.max_output_tokens, 100);
        assert_eq!(config.min_output_tokens, 50);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_config_from_env() {
        std::env::set_var("CONDENSER_ENDPOINT", "http://custom:9000/condense");
        std::env::set_var("CONDENSER_API_KEY", "test-key");
        std::env::set_var("CONDENSER_TIMEOUT_MS", "3000");

        let config = CondenserConfig::default().from_env();

        assert_eq!(config.endpoint, "http://custom:9000/condense");
        assert_eq!(config.api_key, Some("test-key".to_string()));
        assert_eq!(config.timeout_ms, 3000);

        // Cleanup
        std::env::remove_var("CONDENSER_ENDPOINT");
        std::env::remove_var("CONDENSER_API_KEY");
        std::env::remove_var("CONDENSER_TIMEOUT_MS");
    }

    #[test]
    fn test_timeout_conversion() {
        let config = CondenserConfig::default();
        assert_eq!(config.timeout(), Duration::from_millis(5000));
    }
}
