//! Spoken-duration estimation from text

/// Speaking rate assumed by the default estimator: 150 words per 60 seconds.
pub const WORDS_PER_SECOND: f64 = 150.0 / 60.0;

/// Duration estimator trait for different estimation strategies
pub trait DurationEstimator: Send + Sync {
    /// Estimate the spoken duration of the given text, in seconds
    fn estimate(&self, text: &str) -> f64;
}

/// Word-rate duration estimator
///
/// Counts whitespace-delimited words and divides by a fixed speaking rate.
/// Pure and total: empty text estimates to 0.0.
pub struct WordRateEstimator {
    words_per_second: f64,
}

impl WordRateEstimator {
    pub fn new(words_per_second: f64) -> Self {
        Self { words_per_second }
    }

    /// Create with the default speaking rate (2.5 words/second)
    pub fn default() -> Self {
        Self::new(WORDS_PER_SECOND)
    }
}

impl DurationEstimator for WordRateEstimator {
    fn estimate(&self, text: &str) -> f64 {
        let word_count = text.split_whitespace().count();
        word_count as f64 / self.words_per_second
    }
}
