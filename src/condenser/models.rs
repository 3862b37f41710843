//! Wire types for the condensation exchange

use serde::{Deserialize, Serialize};

/// Condensation request
///
/// Ephemeral value object created per pipeline turn and discarded after
/// use. The estimated duration travels with the text so the backend can
/// re-check the budget gate without re-deriving it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CondenseRequest {
    pub text: String,
    #[serde(rename = "estimatedDurationSeconds")]
    pub estimated_duration_seconds: f64,
}

/// Condensation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CondenseResponse {
    pub text: String,
}
