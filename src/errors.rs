// Copyright 2025 Cowboy AI, LLC.

//! Error types for specification configuration
//!
//! Evaluating a specification or filtering a collection never fails. Errors
//! only arise at the configuration boundary, where attribute labels and
//! scenario documents arrive as text.

use thiserror::Error;

/// Errors that can occur while decoding specification input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// Size label is not one of small, medium, large
    #[error("Unknown size: {0}")]
    UnknownSize(String),

    /// Color label is not one of red, green, blue
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    /// Scenario configuration could not be decoded
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for specification operations
pub type SpecResult<T> = Result<T, SpecError>;

impl From<serde_json::Error> for SpecError {
    fn from(err: serde_json::Error) -> Self {
        SpecError::InvalidConfiguration(err.to_string())
    }
}

impl SpecError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SpecError::UnknownSize("huge".to_string()).to_string(),
            "Unknown size: huge"
        );
        assert_eq!(
            SpecError::UnknownColor("mauve".to_string()).to_string(),
            "Unknown color: mauve"
        );
        assert_eq!(
            SpecError::invalid_configuration("missing field").to_string(),
            "Invalid configuration: missing field"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let spec_err: SpecError = err.into();
        assert!(matches!(spec_err, SpecError::InvalidConfiguration(_)));
    }
}
