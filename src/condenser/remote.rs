//! HTTP client for a remote condensation backend

use super::config::CondenserConfig;
use super::models::{CondenseRequest, CondenseResponse};
use super::{Condenser, CondenserError};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Remote condenser over an HTTP boundary
///
/// One POST per condensation need: the transport contract is a single
/// request/response exchange, so there is no retry loop here. Recovery
/// from failure is the caller's fallback to pre-condensation text.
pub struct RemoteCondenser {
    http: Client,
    config: CondenserConfig,
}

impl RemoteCondenser {
    /// Create a new remote condenser
    pub fn new(config: CondenserConfig) -> Result<Self, CondenserError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CondenserError::Initialization(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Create with default configuration
    pub fn default() -> Result<Self, CondenserError> {
        Self::new(CondenserConfig::default())
    }
}

#[async_trait]
impl Condenser for RemoteCondenser {
    async fn condense(&self, request: CondenseRequest) -> Result<CondenseResponse, CondenserError> {
        if request.text.trim().is_empty() {
            return Err(CondenserError::InvalidInput("text is empty".to_string()));
        }

        debug!(
            "Condensing {} words, estimated {:.1}s",
            request.text.split_whitespace().count(),
            request.estimated_duration_seconds
        );

        let mut req = self.http.post(&self.config.endpoint).json(&request);

        if let Some(api_key) = &self.config.api_key {
            req = req.bearer_auth(api_key);
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                CondenserError::Timeout(e.to_string())
            } else {
                CondenserError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CondenserError::Upstream(format!(
                "Status {}: {}",
                status, error_text
            )));
        }

        let condensed: CondenseResponse = response
            .json()
            .await
            .map_err(|e| CondenserError::InvalidResponse(e.to_string()))?;

        // A success status without usable text is malformed, not a success.
        if condensed.text.trim().is_empty() {
            return Err(CondenserError::InvalidResponse(
                "response text is empty".to_string(),
            ));
        }

        debug!("Condensation successful");
        Ok(condensed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let condenser = RemoteCondenser::default();
        assert!(condenser.is_ok());
    }

    #[tokio::test]
    async fn test_empty_input_rejected_before_any_request() {
        let condenser = RemoteCondenser::default().unwrap();
        let result = condenser
            .condense(CondenseRequest {
                text: "   ".to_string(),
                estimated_duration_seconds: 0.0,
            })
            .await;

        assert!(matches!(result, Err(CondenserError::InvalidInput(_))));
    }
}
