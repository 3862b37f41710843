//! Length governor orchestration
//!
//! One governor invocation per pipeline turn: assemble the text, estimate
//! its spoken duration, and either pass it through or trim and condense
//! it. Exactly one text value is produced per turn, and any condensation
//! failure resolves to the original untrimmed text rather than an error.

use super::assembler::{assemble, TextSource};
use super::estimator::{DurationEstimator, WordRateEstimator};
use super::trimmer::MiddleTrimmer;
use crate::condenser::{CondenseRequest, Condenser};
use crate::error::{GovernorError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Governor configuration
///
/// Passed explicitly at construction; the governor never reads ambient
/// global state, so per-turn behavior is reproducible in isolation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovernorConfig {
    /// Playback budget in seconds above which condensation triggers
    #[serde(default = "default_budget_seconds")]
    pub budget_seconds: f64,

    /// Word count at or below which text is never trimmed
    #[serde(default = "default_short_text_words")]
    pub short_text_words: usize,

    /// Fraction used by the middle trimmer
    #[serde(default = "default_trim_ratio")]
    pub trim_ratio: f64,

    /// Upper bound on one condenser call in milliseconds
    #[serde(default = "default_condense_timeout_ms")]
    pub condense_timeout_ms: u64,
}

// Default value functions
fn default_budget_seconds() -> f64 {
    60.0
}
fn default_short_text_words() -> usize {
    150
}
fn default_trim_ratio() -> f64 {
    0.5
}
fn default_condense_timeout_ms() -> u64 {
    10_000
}

impl Default for GovernorConfig {
    fn default() -> Self {
        Self {
            budget_seconds: default_budget_seconds(),
            short_text_words: default_short_text_words(),
            trim_ratio: default_trim_ratio(),
            condense_timeout_ms: default_condense_timeout_ms(),
        }
    }
}

impl GovernorConfig {
    /// Validate that the configuration is consistent
    pub fn validate(&self) -> Result<()> {
        if self.budget_seconds <= 0.0 {
            return Err(GovernorError::Configuration(format!(
                "budget must be positive, got {}",
                self.budget_seconds
            )));
        }
        if self.condense_timeout_ms == 0 {
            return Err(GovernorError::Configuration(
                "condense timeout must be positive".to_string(),
            ));
        }
        // Ratio and threshold bounds are enforced by the trimmer.
        Ok(())
    }

    /// Get the condense timeout as Duration
    pub fn condense_timeout(&self) -> Duration {
        Duration::from_millis(self.condense_timeout_ms)
    }
}

/// Length governor
///
/// The hook invoked once per assistant turn immediately before speech
/// synthesis. Turns share no mutable state; the condenser is the only
/// shared resource and is safe for concurrent invocation.
pub struct LengthGovernor {
    config: GovernorConfig,
    estimator: Arc<dyn DurationEstimator>,
    trimmer: MiddleTrimmer,
    condenser: Arc<dyn Condenser>,
}

impl LengthGovernor {
    /// Create a new governor with a custom condenser
    pub fn new(config: GovernorConfig, condenser: Arc<dyn Condenser>) -> Result<Self> {
        config.validate()?;
        let trimmer = MiddleTrimmer::new(config.trim_ratio, config.short_text_words)?;

        Ok(Self {
            config,
            estimator: Arc::new(WordRateEstimator::default()),
            trimmer,
            condenser,
        })
    }

    /// Create with a custom duration estimator
    pub fn with_estimator(
        config: GovernorConfig,
        estimator: Arc<dyn DurationEstimator>,
        condenser: Arc<dyn Condenser>,
    ) -> Result<Self> {
        let mut governor = Self::new(config, condenser)?;
        governor.estimator = estimator;
        Ok(governor)
    }

    /// Govern one turn's text before it reaches speech synthesis
    ///
    /// Streamed sources are drained fully first: duration is only knowable
    /// once all text exists. The condenser is invoked at most once, only
    /// when the estimate exceeds the budget, and is bounded by the
    /// configured timeout so a hung backend cannot stall the turn.
    pub async fn govern(&self, source: TextSource) -> Result<String> {
        let text = assemble(source).await;

        if text.trim().is_empty() {
            return Err(GovernorError::EmptyInput);
        }

        let estimate = self.estimator.estimate(&text);
        debug!(
            "Estimated {:.1}s of speech against a {:.1}s budget",
            estimate, self.config.budget_seconds
        );

        if estimate <= self.config.budget_seconds {
            return Ok(text);
        }

        let trimmed = self.trimmer.trim(&text);
        debug!(
            "Trimmed {} words to {} before condensation",
            text.split_whitespace().count(),
            trimmed.split_whitespace().count()
        );

        let request = CondenseRequest {
            text: trimmed,
            estimated_duration_seconds: estimate,
        };

        match tokio::time::timeout(
            self.config.condense_timeout(),
            self.condenser.condense(request),
        )
        .await
        {
            Ok(Ok(response)) if !response.text.trim().is_empty() => Ok(response.text),
            Ok(Ok(_)) => {
                warn!("Condenser returned empty text, falling back to original");
                Ok(text)
            }
            Ok(Err(e)) => {
                warn!("Condensation failed, falling back to original: {}", e);
                Ok(text)
            }
            Err(_) => {
                warn!(
                    "Condensation timed out after {:?}, falling back to original",
                    self.config.condense_timeout()
                );
                Ok(text)
            }
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &GovernorConfig {
        &self.config
    }
}
