//! Condensation endpoint handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::condenser::{
    CondenseRequest, CondenseResponse, Condenser, CondenserError, ExtractiveCondenser,
};
use crate::config::Config;
use crate::error::{GovernorError, Result};
use crate::governor::MiddleTrimmer;

/// API error payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Condensation endpoint state
#[derive(Clone)]
pub struct CondenseState {
    pub budget_seconds: f64,
    pub trimmer: Arc<MiddleTrimmer>,
    pub condenser: Arc<dyn Condenser>,
}

impl CondenseState {
    /// Build the backend state from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let condenser = ExtractiveCondenser::new(
            config.condenser.min_output_tokens,
            config.condenser.max_output_tokens,
        )
        .map_err(|e| GovernorError::Configuration(e.to_string()))?;

        Self::with_condenser(config, Arc::new(condenser))
    }

    /// Build with a custom condensation strategy
    pub fn with_condenser(config: &Config, condenser: Arc<dyn Condenser>) -> Result<Self> {
        let trimmer = MiddleTrimmer::new(
            config.governor.trim_ratio,
            config.governor.short_text_words,
        )?;

        Ok(Self {
            budget_seconds: config.governor.budget_seconds,
            trimmer: Arc::new(trimmer),
            condenser,
        })
    }
}

/// Condense a turn's text if its reported duration exceeds the budget
///
/// POST /v1/condense
pub async fn condense_text(
    State(state): State<CondenseState>,
    Json(request): Json<CondenseRequest>,
) -> std::result::Result<Json<CondenseResponse>, (StatusCode, Json<ApiError>)> {
    let request_id = Uuid::new_v4();

    info!(
        "Condense request {}: {} words, reported {:.1}s",
        request_id,
        request.text.split_whitespace().count(),
        request.estimated_duration_seconds
    );

    if request.text.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("text field is required")),
        ));
    }

    // Within the budget the text goes back unchanged. The gate trusts the
    // caller-reported duration; re-estimation stays on the client side.
    if request.estimated_duration_seconds <= state.budget_seconds {
        return Ok(Json(CondenseResponse { text: request.text }));
    }

    let trimmed = state.trimmer.trim(&request.text);
    let condense_request = CondenseRequest {
        text: trimmed,
        estimated_duration_seconds: request.estimated_duration_seconds,
    };

    match state.condenser.condense(condense_request).await {
        Ok(response) => {
            debug!("Condense request {} succeeded", request_id);
            Ok(Json(response))
        }
        Err(e) => {
            let (status, message) = match e {
                CondenserError::Timeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
                other => (StatusCode::BAD_GATEWAY, other.to_string()),
            };
            error!("Condense request {} failed: {}", request_id, message);
            Err((status, Json(ApiError::new(message))))
        }
    }
}

/// Liveness probe
///
/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
