//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError         - Rejected view operations                      │
//! │  ├── ValidationError   - Product/config field failures                 │
//! │  └── ReviewFieldError  - Review form input failures (shown inline)     │
//! │                                                                         │
//! │  Shell errors (apps/storefront)                                        │
//! │  ├── ConfigError       - Config file loading                           │
//! │  └── ApiError          - What the command layer reports                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (index, field, etc.)
//! 3. Errors are enum variants, never String

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by view operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A variant index outside the product's variant list.
    ///
    /// ## When This Occurs
    /// - Hovering a colour swatch that no longer exists
    /// - Shell input naming an index past the end of the list
    #[error("Variant index {index} is out of range (product has {len} variants)")]
    VariantOutOfRange { index: usize, len: usize },

    /// The product definition itself failed validation.
    #[error("Invalid product: {0}")]
    InvalidProduct(ValidationError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors for products and configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Duplicate value (e.g., duplicate variant id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Review Field Error
// =============================================================================

/// One failing field of a review submission.
///
/// The form reports these inline, in the fixed order name, review, rating.
/// They never escape as a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum ReviewFieldError {
    #[error("Name required")]
    MissingName,

    #[error("Review required")]
    MissingReview,

    #[error("Rating required")]
    MissingRating,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::VariantOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Variant index 4 is out of range (product has 2 variants)"
        );
    }

    #[test]
    fn test_review_field_messages() {
        assert_eq!(ReviewFieldError::MissingName.to_string(), "Name required");
        assert_eq!(ReviewFieldError::MissingReview.to_string(), "Review required");
        assert_eq!(ReviewFieldError::MissingRating.to_string(), "Rating required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "brand".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
