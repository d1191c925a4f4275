//! # Shell Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront Shell                   │
//! │                                                                         │
//! │  startup:  storefront.toml ──► ConfigError ──► warn + defaults         │
//! │                                                                         │
//! │  command:  CoreError ───────────┐                                       │
//! │            ReviewFieldError[] ──┼──► ApiError { code, message } ──► UI  │
//! │            bad shell input ─────┘                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ApiError` serializes with the same camelCase shape as the page snapshots.

use serde::Serialize;
use storefront_core::{CoreError, ReviewFieldError, ValidationError};
use thiserror::Error;

// =============================================================================
// Config Error
// =============================================================================

/// Failures while loading `storefront.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid storefront configuration: {0}")]
    Invalid(#[from] CoreError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// API Error
// =============================================================================

/// Error returned from shell commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Name required; Review required",
///   "fields": ["missing_name", "missing_review"]
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message
    pub message: String,

    /// Failing review fields, in form order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ReviewFieldError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// User input failed validation
    ValidationError,

    /// Referenced item does not exist
    NotFound,

    /// Shell input could not be understood
    InvalidInput,

    /// Anything else
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidInput, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::VariantOutOfRange { index, .. } => {
                ApiError::not_found("Variant", &index.to_string())
            }
            CoreError::InvalidProduct(e) | CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts the review form's error list.
impl From<Vec<ReviewFieldError>> for ApiError {
    fn from(fields: Vec<ReviewFieldError>) -> Self {
        let message = fields
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        ApiError {
            code: ErrorCode::ValidationError,
            message,
            fields,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_out_of_range_maps_to_not_found() {
        let err = ApiError::from(CoreError::VariantOutOfRange { index: 7, len: 2 });
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Variant not found: 7");
    }

    #[test]
    fn test_review_fields_are_joined_in_order() {
        let err = ApiError::from(vec![
            ReviewFieldError::MissingName,
            ReviewFieldError::MissingRating,
        ]);
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Name required; Rating required");
        assert_eq!(err.fields.len(), 2);
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(ApiError::from(vec![ReviewFieldError::MissingReview]))
            .unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["fields"][0], "missing_review");

        let json = serde_json::to_value(ApiError::invalid_input("bad")).unwrap();
        assert!(json.get("fields").is_none());
    }
}
