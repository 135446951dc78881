//! # Error Types
//!
//! Structured error types for creator_core. Calculations themselves never
//! fail on validated input; errors come from form validation, table lookups
//! and loading a rates file.
//!
//! ## Example
//!
//! ```rust
//! use creator_core::calculations::CalculatorId;
//! use creator_core::errors::CalcError;
//!
//! let err = CalculatorId::from_slug("horoscope").unwrap_err();
//! assert!(matches!(err, CalcError::UnknownCalculator { .. }));
//! assert_eq!(err.error_code(), "UNKNOWN_CALCULATOR");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for creator_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A form failed validation; one message per offending field
    #[error("Validation failed for {} field(s): {}", errors.len(), summarize(errors))]
    Validation { errors: BTreeMap<String, String> },

    /// Unknown calculator slug
    #[error("Unknown calculator: {slug}")]
    UnknownCalculator { slug: String },

    /// Key not present in a constant table (region, niche)
    #[error("Unknown {table} key: {key}")]
    LookupNotFound { table: String, key: String },

    /// A rates file could not be parsed or breaks a table invariant
    #[error("Rates configuration error: {reason}")]
    Config { reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

fn summarize(errors: &BTreeMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl CalcError {
    /// Create a LookupNotFound error
    pub fn lookup_not_found(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::LookupNotFound {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create a Config error
    pub fn config(reason: impl Into<String>) -> Self {
        CalcError::Config { reason: reason.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::Validation { .. } => "VALIDATION_FAILED",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::LookupNotFound { .. } => "LOOKUP_NOT_FOUND",
            CalcError::Config { .. } => "CONFIG_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::lookup_not_found("region", "mars");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"LookupNotFound\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::config("bad").error_code(), "CONFIG_ERROR");
        let json_err = serde_json::from_str::<f64>("nope").unwrap_err();
        assert_eq!(CalcError::from(json_err).error_code(), "SERIALIZATION_ERROR");
        assert_eq!(
            CalcError::lookup_not_found("niche", "x").error_code(),
            "LOOKUP_NOT_FOUND"
        );
    }

    #[test]
    fn test_validation_message_lists_fields() {
        let mut errors = BTreeMap::new();
        errors.insert("views".to_string(), "Views is required".to_string());
        errors.insert("saves".to_string(), "Saves must be at least 0".to_string());
        let message = CalcError::Validation { errors }.to_string();
        assert!(message.starts_with("Validation failed for 2 field(s)"));
        assert!(message.contains("saves: Saves must be at least 0"));
    }
}
