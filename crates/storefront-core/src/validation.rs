//! # Validation Module
//!
//! Input validation for product definitions and review drafts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Config load (apps/storefront)                                │
//! │  └── StorefrontConfig::validate → validate_product                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: View construction                                            │
//! │  └── CatalogConfig::new re-checks the product                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: User input                                                   │
//! │  └── THIS MODULE: review drafts → ReviewFieldError list                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::validate_review_draft;
//! use storefront_core::ReviewFieldError;
//!
//! let errors = validate_review_draft("", "", None).unwrap_err();
//! assert_eq!(
//!     errors,
//!     vec![
//!         ReviewFieldError::MissingName,
//!         ReviewFieldError::MissingReview,
//!         ReviewFieldError::MissingRating,
//!     ]
//! );
//! ```

use std::collections::HashSet;

use crate::error::{ReviewFieldError, ValidationError};
use crate::types::{Product, Rating};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest brand or product name accepted.
const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required display string such as a brand or product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_display_name(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product definition.
///
/// ## Rules
/// - brand and name pass [`validate_display_name`]
/// - at least one variant, so the selected index always has a target
/// - variant ids are unique
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_display_name("brand", &product.brand)?;
    validate_display_name("name", &product.name)?;

    if product.variants.is_empty() {
        return Err(ValidationError::Required {
            field: "variants".to_string(),
        });
    }

    let mut seen = HashSet::with_capacity(product.variants.len());
    for variant in &product.variants {
        if !seen.insert(variant.id) {
            return Err(ValidationError::Duplicate {
                field: "variant id".to_string(),
                value: variant.id.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Review Validators
// =============================================================================

/// Validates the three required review fields.
///
/// ## Rules
/// - name and review text are non-empty
/// - rating is present and within 1..=5
///
/// ## Returns
/// The name and text exactly as typed plus the rating, or every failing
/// field in the fixed order name → review → rating.
pub fn validate_review_draft(
    name: &str,
    review_text: &str,
    rating: Option<u8>,
) -> Result<(String, String, Rating), Vec<ReviewFieldError>> {
    let rating = rating.and_then(Rating::new);

    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push(ReviewFieldError::MissingName);
    }
    if review_text.is_empty() {
        errors.push(ReviewFieldError::MissingReview);
    }

    match rating {
        Some(rating) if errors.is_empty() => {
            Ok((name.to_string(), review_text.to_string(), rating))
        }
        Some(_) => Err(errors),
        None => {
            errors.push(ReviewFieldError::MissingRating);
            Err(errors)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
