//! # Review Form View
//!
//! Draft fields for a new review, their validation, and publication of the
//! finished review on the injected channel.
//!
//! ## Submit State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit()                                                               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  errors.clear()                                                         │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  validate name → review → rating                                        │
//! │     │                                                                   │
//! │     ├── all ok ──► Review ──► channel.publish ──► reset drafts ──► Ok   │
//! │     │                                                                   │
//! │     └── any fail ──► errors = failing fields (fixed order) ──► Err      │
//! │                      drafts kept for correction                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::error::ReviewFieldError;
use crate::events::EventChannel;
use crate::types::Review;
use crate::validation::validate_review_draft;

/// Draft state of the "Make a review" form.
#[derive(Debug)]
pub struct ReviewFormView {
    channel: EventChannel<Review>,
    name: String,
    review_text: String,
    rating: Option<u8>,
    recommend: Option<bool>,
    errors: Vec<ReviewFieldError>,
}

impl ReviewFormView {
    pub fn new(channel: EventChannel<Review>) -> Self {
        ReviewFormView {
            channel,
            name: String::new(),
            review_text: String::new(),
            rating: None,
            recommend: None,
            errors: Vec::new(),
        }
    }

    // =========================================================================
    // Draft fields
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_review_text(&mut self, text: impl Into<String>) {
        self.review_text = text.into();
    }

    /// Stores the rating as typed; range is checked on submit.
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = Some(rating);
    }

    pub fn clear_rating(&mut self) {
        self.rating = None;
    }

    pub fn set_recommend(&mut self, recommend: Option<bool>) {
        self.recommend = recommend;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn review_text(&self) -> &str {
        &self.review_text
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn recommend(&self) -> Option<bool> {
        self.recommend
    }

    /// Errors from the most recent submit only.
    pub fn errors(&self) -> &[ReviewFieldError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Validates the drafts and publishes the review on success.
    pub fn submit(&mut self) -> Result<Review, Vec<ReviewFieldError>> {
        self.errors.clear();

        match validate_review_draft(&self.name, &self.review_text, self.rating) {
            Ok((name, text, rating)) => {
                let review = Review::new(name, text, rating, self.recommend);
                let delivered = self.channel.publish(&review);
                info!(
                    reviewer = review.reviewer_name(),
                    rating = review.rating().value(),
                    delivered,
                    "Review submitted"
                );
                self.reset_drafts();
                Ok(review)
            }
            Err(errors) => {
                debug!(?errors, "Review submission rejected");
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Clears name, text and rating. The recommend choice is kept.
    fn reset_drafts(&mut self) {
        self.name.clear();
        self.review_text.clear();
        self.rating = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
