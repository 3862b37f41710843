//! Abstractive text condensation behind a backend boundary
//!
//! The condenser is the only stage of the governor with meaningful latency
//! and cost. It is invoked at most once per turn, only after the playback
//! budget is exceeded, and every failure mode is a distinguishable signal:
//! the caller decides whether to fall back, the condenser never silently
//! substitutes text.

pub mod config;
pub mod extractive;
pub mod models;
pub mod remote;

use async_trait::async_trait;

pub use config::CondenserConfig;
pub use extractive::ExtractiveCondenser;
pub use models::{CondenseRequest, CondenseResponse};
pub use remote::RemoteCondenser;

/// Condenser trait for different condensation strategies
///
/// Implementations must tolerate concurrent invocations from simultaneous
/// pipeline turns; no per-call state may be shared between calls.
#[async_trait]
pub trait Condenser: Send + Sync {
    /// Condense the request text into a shorter semantically-equivalent text
    async fn condense(&self, request: CondenseRequest) -> Result<CondenseResponse, CondenserError>;
}

/// Condenser errors
#[derive(Debug, thiserror::Error)]
pub enum CondenserError {
    #[error("initialization error: {0}")]
    Initialization(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
