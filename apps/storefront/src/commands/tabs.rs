//! # Tab Commands

use storefront_core::Tab;
use tracing::debug;

use super::StorefrontView;
use crate::error::ApiError;
use crate::state::StorefrontState;

/// Switches to the tab named `name` (label or short alias).
pub fn select_tab(state: &StorefrontState, name: &str) -> Result<StorefrontView, ApiError> {
    debug!(name, "select_tab command");

    let tab: Tab = name.parse().map_err(ApiError::invalid_input)?;
    Ok(state.with_app_mut(|app| {
        app.select_tab(tab);
        StorefrontView::from(&*app)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{review, PanelView};
    use crate::error::ErrorCode;
    use crate::state::StorefrontConfig;

    #[test]
    fn test_select_tab() {
        let state = StorefrontState::from_config(&StorefrontConfig::default()).unwrap();
        assert_eq!(select_tab(&state, "shipping").unwrap().tab, Tab::Shipping);
        assert_eq!(select_tab(&state, "Make a review").unwrap().tab, Tab::MakeReview);

        let err = select_tab(&state, "checkout").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_panel_follows_selected_tab() {
        let state = StorefrontState::from_config(&StorefrontConfig::default()).unwrap();
        assert_eq!(select_tab(&state, "reviews").unwrap().panel, PanelView::NoReviews);
        assert_eq!(
            select_tab(&state, "shipping").unwrap().panel,
            PanelView::Shipping("Free".to_string())
        );
        match select_tab(&state, "details").unwrap().panel {
            PanelView::ProductDetails(details) => assert_eq!(details.len(), 3),
            other => panic!("unexpected panel {:?}", other),
        }

        let view = select_tab(&state, "write").unwrap();
        assert!(matches!(view.panel, PanelView::MakeReview { .. }));

        review::set_review_draft(&state, review::DraftField::Name("Ada".to_string()));
        review::set_review_draft(&state, review::DraftField::Text("Soft".to_string()));
        review::set_review_draft(&state, review::DraftField::Rating(5));
        review::submit_review(&state).unwrap();

        match select_tab(&state, "reviews").unwrap().panel {
            PanelView::Reviews(reviews) => assert_eq!(reviews[0].reviewer_name(), "Ada"),
            other => panic!("unexpected panel {:?}", other),
        }
    }
}
