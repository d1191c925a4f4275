//! # Review Commands
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  name Ada ──────► set_review_draft(Name)                               │
//! │  review Warm ───► set_review_draft(Text)                               │
//! │  rating 5 ──────► set_review_draft(Rating)                             │
//! │  submit ────────► submit_review()                                      │
//! │                      ├── ok: review appears under the Reviews tab      │
//! │                      └── err: VALIDATION_ERROR, drafts kept            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use super::StorefrontView;
use crate::error::ApiError;
use crate::state::StorefrontState;

/// One edit to the review form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Name(String),
    Text(String),
    Rating(u8),
    ClearRating,
    Recommend(Option<bool>),
}

/// Updates one draft field of the review form.
pub fn set_review_draft(state: &StorefrontState, field: DraftField) -> StorefrontView {
    debug!(?field, "set_review_draft command");

    state.with_app_mut(|app| {
        let form = app.review_form_mut();
        match field {
            DraftField::Name(name) => form.set_name(name),
            DraftField::Text(text) => form.set_review_text(text),
            DraftField::Rating(rating) => form.set_rating(rating),
            DraftField::ClearRating => form.clear_rating(),
            DraftField::Recommend(recommend) => form.set_recommend(recommend),
        }
        StorefrontView::from(&*app)
    })
}

/// Submits the review form.
///
/// ## Errors
/// `VALIDATION_ERROR` listing every failing field in form order.
pub fn submit_review(state: &StorefrontState) -> Result<StorefrontView, ApiError> {
    debug!("submit_review command");

    state.with_app_mut(|app| {
        app.submit_review()?;
        Ok::<StorefrontView, ApiError>(StorefrontView::from(&*app))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::StorefrontConfig;
    use storefront_core::ReviewFieldError;

    fn state() -> StorefrontState {
        StorefrontState::from_config(&StorefrontConfig::default()).unwrap()
    }

    #[test]
    fn test_submit_empty_form() {
        let state = state();
        let err = submit_review(&state).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.fields,
            vec![
                ReviewFieldError::MissingName,
                ReviewFieldError::MissingReview,
                ReviewFieldError::MissingRating,
            ]
        );
    }

    #[test]
    fn test_fail_then_submit() {
        let state = state();
        submit_review(&state).unwrap_err();

        set_review_draft(&state, DraftField::Name("Ada".to_string()));
        set_review_draft(&state, DraftField::Text("Warm and soft".to_string()));
        set_review_draft(&state, DraftField::Rating(5));
        let view = submit_review(&state).unwrap();

        assert!(view.errors.is_empty());
        assert_eq!(view.reviews.len(), 1);
        assert_eq!(view.reviews[0].reviewer_name(), "Ada");
        assert_eq!(view.draft.name, "");
        assert_eq!(view.draft.rating, None);
    }

    #[test]
    fn test_clear_rating() {
        let state = state();
        set_review_draft(&state, DraftField::Rating(3));
        let view = set_review_draft(&state, DraftField::ClearRating);
        assert_eq!(view.draft.rating, None);
    }
}
