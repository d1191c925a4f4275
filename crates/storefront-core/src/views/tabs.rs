//! # Review Tabs View
//!
//! A four-state selector under the product card. Exactly one panel is shown
//! at a time.
//!
//! ```text
//!   [Reviews] [Make a review] [Shipping] [Product details]
//!       │            │             │             │
//!       ▼            ▼             ▼             ▼
//!   list or      form drafts   Free / $2.99   detail list
//!   placeholder  and errors
//! ```

use tracing::debug;

use crate::types::{Review, ShippingCost, Tab};
use crate::views::ReviewFormView;

/// Body of the Reviews tab.
///
/// `Empty` is shown as [`NO_REVIEWS_PLACEHOLDER`](crate::NO_REVIEWS_PLACEHOLDER).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewsPanel<'a> {
    Empty,
    List(&'a [Review]),
}

/// The single panel visible for the current tab.
#[derive(Debug, Clone, Copy)]
pub enum Panel<'a> {
    Reviews(ReviewsPanel<'a>),
    MakeReview(&'a ReviewFormView),
    Shipping(ShippingCost),
    ProductDetails(&'a [String]),
}

impl Panel<'_> {
    pub fn tab(&self) -> Tab {
        match self {
            Panel::Reviews(_) => Tab::Reviews,
            Panel::MakeReview(_) => Tab::MakeReview,
            Panel::Shipping(_) => Tab::Shipping,
            Panel::ProductDetails(_) => Tab::ProductDetails,
        }
    }
}

/// Everything the panels may display.
#[derive(Debug, Clone, Copy)]
pub struct PanelContext<'a> {
    pub reviews: &'a [Review],
    pub form: &'a ReviewFormView,
    pub shipping: ShippingCost,
    pub details: &'a [String],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewTabsView {
    selected: Tab,
}

impl ReviewTabsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Tab {
        self.selected
    }

    pub fn select_tab(&mut self, tab: Tab) {
        debug!(from = %self.selected, to = %tab, "Tab selected");
        self.selected = tab;
    }

    pub fn panel<'a>(&self, ctx: PanelContext<'a>) -> Panel<'a> {
        match self.selected {
            Tab::Reviews if ctx.reviews.is_empty() => Panel::Reviews(ReviewsPanel::Empty),
            Tab::Reviews => Panel::Reviews(ReviewsPanel::List(ctx.reviews)),
            Tab::MakeReview => Panel::MakeReview(ctx.form),
            Tab::Shipping => Panel::Shipping(ctx.shipping),
            Tab::ProductDetails => Panel::ProductDetails(ctx.details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventChannel;
    use crate::REVIEW_SUBMITTED_TOPIC;

    #[test]
    fn test_default_tab_is_reviews() {
        let tabs = ReviewTabsView::new();
        assert_eq!(tabs.selected(), Tab::Reviews);
    }

    #[test]
    fn test_each_tab_shows_exactly_its_panel() {
        let form = ReviewFormView::new(EventChannel::new(REVIEW_SUBMITTED_TOPIC));
        let details = vec!["80% cotton".to_string()];
        let ctx = PanelContext {
            reviews: &[],
            form: &form,
            shipping: ShippingCost::Free,
            details: &details,
        };

        let mut tabs = ReviewTabsView::new();
        for tab in Tab::ALL {
            tabs.select_tab(tab);
            assert_eq!(tabs.selected(), tab);
            assert_eq!(tabs.panel(ctx).tab(), tab);
        }
    }

    #[test]
    fn test_empty_reviews_show_placeholder() {
        let form = ReviewFormView::new(EventChannel::new(REVIEW_SUBMITTED_TOPIC));
        let ctx = PanelContext {
            reviews: &[],
            form: &form,
            shipping: ShippingCost::Free,
            details: &[],
        };

        let tabs = ReviewTabsView::new();
        assert!(matches!(tabs.panel(ctx), Panel::Reviews(ReviewsPanel::Empty)));
    }

    #[test]
    fn test_shipping_panel_carries_cost() {
        let form = ReviewFormView::new(EventChannel::new(REVIEW_SUBMITTED_TOPIC));
        let ctx = PanelContext {
            reviews: &[],
            form: &form,
            shipping: ShippingCost::for_membership(false),
            details: &[],
        };

        let mut tabs = ReviewTabsView::new();
        tabs.select_tab(Tab::Shipping);
        match tabs.panel(ctx) {
            Panel::Shipping(cost) => assert_eq!(cost.to_string(), "$2.99"),
            other => panic!("unexpected panel {:?}", other.tab()),
        }
    }
}
