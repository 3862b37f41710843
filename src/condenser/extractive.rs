//! Deterministic extractive condensation
//!
//! Local strategy for deployments without an abstractive model backend,
//! and the strategy behind the bundled condensation endpoint. Keeps the
//! leading sentences of the (already trimmed) input until the output
//! reaches the configured token bounds. No sampling anywhere: the same
//! input always yields the same output.

use super::models::{CondenseRequest, CondenseResponse};
use super::{Condenser, CondenserError};
use async_trait::async_trait;
use std::sync::Arc;
use tiktoken_rs::{cl100k_base, CoreBPE};
use tracing::debug;

/// Extractive condenser bounded by cl100k_base token counts
pub struct ExtractiveCondenser {
    bpe: Arc<CoreBPE>,
    max_output_tokens: usize,
    min_output_tokens: usize,
}

impl ExtractiveCondenser {
    /// Create a new extractive condenser with the given output bounds
    pub fn new(min_output_tokens: usize, max_output_tokens: usize) -> Result<Self, CondenserError> {
        if min_output_tokens > max_output_tokens {
            return Err(CondenserError::Initialization(format!(
                "min output tokens {} exceeds max {}",
                min_output_tokens, max_output_tokens
            )));
        }
        let bpe = cl100k_base().map_err(|e| CondenserError::Initialization(e.to_string()))?;
        Ok(Self {
            bpe: Arc::new(bpe),
            max_output_tokens,
            min_output_tokens,
        })
    }

    /// Create with the default bounds (min 50, max 100 tokens)
    pub fn default() -> Result<Self, CondenserError> {
        Self::new(50, 100)
    }

    fn token_count(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }
}

/// Split text into sentences, keeping terminators attached
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let sentence = current.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }

    sentences
}

#[async_trait]
impl Condenser for ExtractiveCondenser {
    async fn condense(&self, request: CondenseRequest) -> Result<CondenseResponse, CondenserError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(CondenserError::InvalidInput("text is empty".to_string()));
        }

        // Already within the output bound: nothing to condense.
        if self.token_count(text) <= self.max_output_tokens {
            return Ok(CondenseResponse {
                text: text.to_string(),
            });
        }

        let mut summary = String::new();
        let mut total = 0usize;

        for sentence in split_sentences(text) {
            let tokens = self.token_count(&sentence);

            if total + tokens > self.max_output_tokens {
                if total >= self.min_output_tokens {
                    break;
                }
                // The minimum is not reached yet and the whole sentence
                // would overflow the maximum: finish at word granularity.
                for word in sentence.split_whitespace() {
                    let word_tokens = self.token_count(word);
                    if !summary.is_empty() && total + word_tokens > self.max_output_tokens {
                        break;
                    }
                    if !summary.is_empty() {
                        summary.push(' ');
                    }
                    summary.push_str(word);
                    total += word_tokens;
                }
                break;
            }

            if !summary.is_empty() {
                summary.push(' ');
            }
            summary.push_str(&sentence);
            total += tokens;

            if total >= self.max_output_tokens {
                break;
            }
        }

        debug!("Extracted summary of ~{} tokens", total);

        Ok(CondenseResponse { text: summary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str) -> CondenseRequest {
        CondenseRequest {
            text: text.to_string(),
            estimated_duration_seconds: 120.0,
        }
    }

    fn long_text() -> String {
        (0..40)
            .map(|i| format!("Sentence number {} carries a few words of content.", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[tokio::test]
    async fn test_short_input_returned_whole() {
        let condenser = ExtractiveCondenser::default().unwrap();
        let response = condenser.condense(request("One short sentence.")).await.unwrap();
        assert_eq!(response.text, "One short sentence.");
    }

    #[tokio::test]
    async fn test_deterministic_output() {
        let condenser = ExtractiveCondenser::default().unwrap();
        let first = condenser.condense(request(&long_text())).await.unwrap();
        let second = condenser.condense(request(&long_text())).await.unwrap();
        assert_eq!(first.text, second.text);
    }

    #[tokio::test]
    async fn test_output_bounded_for_sentence_splittable_input() {
        let condenser = ExtractiveCondenser::default().unwrap();
        let response = condenser.condense(request(&long_text())).await.unwrap();

        let bpe = cl100k_base().unwrap();
        let tokens = bpe.encode_with_special_tokens(&response.text).len();
        assert!(tokens <= 100, "summary of {} tokens exceeds bound", tokens);
        assert!(!response.text.is_empty());
    }

    #[tokio::test]
    async fn test_output_is_prefix_of_input() {
        let condenser = ExtractiveCondenser::default().unwrap();
        let text = long_text();
        let response = condenser.condense(request(&text)).await.unwrap();
        assert!(text.starts_with(&response.text));
    }

    #[tokio::test]
    async fn test_empty_input_is_an_error() {
        let condenser = ExtractiveCondenser::default().unwrap();
        let result = condenser.condense(request("")).await;
        assert!(matches!(result, Err(CondenserError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        assert!(ExtractiveCondenser::new(100, 50).is_err());
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("First one. Second! Third? Trailing tail");
        assert_eq!(
            sentences,
            vec!["First one.", "Second!", "Third?", "Trailing tail"]
        );
    }
}
