//! Spoken-duration length governor for realtime voice-response pipelines
//!
//! Inserted between a streaming text generator and speech synthesis: the
//! [`governor::LengthGovernor`] assembles the turn's text, estimates how
//! long the synthesized audio would play, and when the estimate exceeds
//! the configured budget, trims the text to a middle window and hands it
//! to a [`condenser::Condenser`] for abstractive condensation. Any
//! condensation failure falls back to the original text: the voice
//! pipeline always receives something speakable.
//!
//! The [`api`] module and the `condenser-server` binary provide the
//! backend side of the same boundary, serving `POST /v1/condense`.

pub mod api;
pub mod condenser;
pub mod config;
pub mod error;
pub mod governor;

pub use condenser::{
    CondenseRequest, CondenseResponse, Condenser, CondenserConfig, CondenserError,
    ExtractiveCondenser, RemoteCondenser,
};
pub use config::Config;
pub use error::{GovernorError, Result};
pub use governor::{
    assemble, DurationEstimator, GovernorConfig, LengthGovernor, MiddleTrimmer, TextSource,
    WordRateEstimator,
};
