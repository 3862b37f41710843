//! Spoken-length governing for voice-response turns
//!
//! Before a turn's generated text reaches speech synthesis, the governor
//! estimates how long the synthesized audio would play and, when that
//! exceeds the configured budget, trims and condenses the text. Every
//! condensation failure resolves to the original text.

pub mod assembler;
pub mod estimator;
pub mod manager;
pub mod trimmer;

pub use assembler::{assemble, TextSource};
pub use estimator::{DurationEstimator, WordRateEstimator, WORDS_PER_SECOND};
pub use manager::{GovernorConfig, LengthGovernor};
pub use trimmer::{MiddleTrimmer, DEFAULT_SHORT_TEXT_WORDS, DEFAULT_TRIM_RATIO};
