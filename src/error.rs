//! Crate-level error types

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GovernorError>;

/// Governor errors
///
/// Only `EmptyInput` is expected to reach callers of the governor; all
/// condenser failures are absorbed into the fallback path and never
/// propagate past it.
#[derive(Debug, Error)]
pub enum GovernorError {
    #[error("input text is empty")]
    EmptyInput,

    #[error("configuration invalid: {0}")]
    Configuration(String),

    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GovernorError::EmptyInput;
        assert_eq!(err.to_string(), "input text is empty");

        let err = GovernorError::Configuration("trim_ratio out of range".to_string());
        assert!(err.to_string().contains("trim_ratio"));
    }
}
