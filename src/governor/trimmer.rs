//! Deterministic middle-window trimming
//!
//! Trimming does not reduce a text all the way to the playback budget; it
//! bounds how much text is handed to the expensive condensation stage,
//! which caps condensation latency.

use crate::error::{GovernorError, Result};

/// Default fraction of words the trimmed window keeps
pub const DEFAULT_TRIM_RATIO: f64 = 0.5;

/// Word count at or below which text is never trimmed
pub const DEFAULT_SHORT_TEXT_WORDS: usize = 150;

/// Middle trimmer
///
/// Shortens a text to a contiguous window of words centered on the middle
/// of the original sequence. Word order is preserved and no words are
/// invented; output words are joined by single spaces.
pub struct MiddleTrimmer {
    ratio: f64,
    short_text_words: usize,
}

impl MiddleTrimmer {
    /// Create a new trimmer, validating the ratio is in (0, 1)
    pub fn new(ratio: f64, short_text_words: usize) -> Result<Self> {
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(GovernorError::Configuration(format!(
                "trim ratio must be in (0, 1), got {}",
                ratio
            )));
        }
        if short_text_words == 0 {
            return Err(GovernorError::Configuration(
                "short text threshold must be positive".to_string(),
            ));
        }
        Ok(Self {
            ratio,
            short_text_words,
        })
    }

    /// Create with default ratio (0.5) and short-text threshold (150 words)
    pub fn default() -> Self {
        Self {
            ratio: DEFAULT_TRIM_RATIO,
            short_text_words: DEFAULT_SHORT_TEXT_WORDS,
        }
    }

    /// Trim the text to its middle window
    ///
    /// Texts of `short_text_words` or fewer words are returned unchanged.
    /// Otherwise the kept window is `words[start..start + trim_size]` with
    /// `trim_size = floor(word_count * ratio)` and
    /// `start = (word_count - trim_size) / 2`. The rounding is floor-based
    /// throughout; for counts just above the threshold the window can be
    /// smaller than downstream condensation bounds expect, which is
    /// inherited behavior and intentionally not clamped.
    pub fn trim(&self, text: &str) -> String {
        let words: Vec<&str> = text.split_whitespace().collect();
        let word_count = words.len();

        if word_count <= self.short_text_words {
            return text.to_string();
        }

        let trim_size = (word_count as f64 * self.ratio) as usize;
        let start = (word_count - trim_size) / 2;
        let end = start + trim_size;

        words[start..end].join(" ")
    }

    /// Word count at or below which `trim` is the identity
    pub fn short_text_words(&self) -> usize {
        self.short_text_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_words(n: usize) -> String {
        (0..n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_short_text_identity() {
        let trimmer = MiddleTrimmer::default();
        let text = numbered_words(150);
        assert_eq!(trimmer.trim(&text), text);

        let short = "just a few words";
        assert_eq!(trimmer.trim(short), short);
    }

    #[test]
    fn test_identity_preserves_original_whitespace() {
        let trimmer = MiddleTrimmer::default();
        let text = "spaced   out\n\ttext";
        assert_eq!(trimmer.trim(text), text);
    }

    #[test]
    fn test_300_words_keeps_middle_window() {
        let trimmer = MiddleTrimmer::default();
        let text = numbered_words(300);
        let trimmed = trimmer.trim(&text);

        let kept: Vec<&str> = trimmed.split_whitespace().collect();
        assert_eq!(kept.len(), 150);
        assert_eq!(kept[0], "w75");
        assert_eq!(kept[149], "w224");
    }

    #[test]
    fn test_trimmed_words_are_contiguous_and_in_order() {
        let trimmer = MiddleTrimmer::default();
        let text = numbered_words(301);
        let trimmed = trimmer.trim(&text);

        let kept: Vec<&str> = trimmed.split_whitespace().collect();
        // floor(301 * 0.5) = 150 words kept, starting at (301 - 150) / 2 = 75
        assert_eq!(kept.len(), 150);
        for (i, word) in kept.iter().enumerate() {
            assert_eq!(*word, format!("w{}", 75 + i));
        }
    }

    #[test]
    fn test_just_above_threshold_floor_behavior() {
        // 151 words at ratio 0.5 keeps floor(151 * 0.5) = 75 words; the
        // undershoot relative to condensation bounds is inherited, not fixed.
        let trimmer = MiddleTrimmer::default();
        let trimmed = trimmer.trim(&numbered_words(151));
        assert_eq!(trimmed.split_whitespace().count(), 75);
    }

    #[test]
    fn test_custom_ratio() {
        let trimmer = MiddleTrimmer::new(0.25, 150).unwrap();
        let trimmed = trimmer.trim(&numbered_words(400));
        // floor(400 * 0.25) = 100 words kept, starting at 150
        let kept: Vec<&str> = trimmed.split_whitespace().collect();
        assert_eq!(kept.len(), 100);
        assert_eq!(kept[0], "w150");
    }

    #[test]
    fn test_ratio_validation() {
        assert!(MiddleTrimmer::new(0.0, 150).is_err());
        assert!(MiddleTrimmer::new(1.0, 150).is_err());
        assert!(MiddleTrimmer::new(-0.5, 150).is_err());
        assert!(MiddleTrimmer::new(0.5, 0).is_err());
        assert!(MiddleTrimmer::new(0.5, 150).is_ok());
    }
}
