//! # Commands
//!
//! Operations the shell can perform on [`StorefrontState`](crate::state::StorefrontState).
//! Every command returns a [`StorefrontView`] snapshot or an
//! [`ApiError`](crate::error::ApiError).
//!
//! ```text
//! commands/
//! ├── catalog.rs  ◄─── get_storefront, hover_variant
//! ├── cart.rs     ◄─── add_to_cart, remove_from_cart
//! ├── review.rs   ◄─── set_review_draft, submit_review
//! └── tabs.rs     ◄─── select_tab
//! ```

pub mod cart;
pub mod catalog;
pub mod review;
pub mod tabs;

use serde::Serialize;
use storefront_core::views::{Panel, ReviewFormView, ReviewsPanel, RootApp};
use storefront_core::{Review, ReviewFieldError, StockStatus, Tab, VariantId};

/// Serializable snapshot of the whole page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontView {
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub sale_banner: Option<String>,
    pub stock_status: StockStatus,
    pub stock_label: String,
    pub can_add_to_cart: bool,
    pub selected_variant: usize,
    pub variants: Vec<VariantSummary>,
    pub sizes: Vec<String>,
    pub details: Vec<String>,
    pub cart: Vec<VariantId>,
    pub premium: bool,
    pub shipping: String,
    pub tab: Tab,
    /// The one panel shown under the tab bar.
    pub panel: PanelView,
    pub reviews: Vec<Review>,
    pub draft: ReviewDraft,
    pub errors: Vec<ReviewFieldError>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSummary {
    pub id: VariantId,
    pub color: String,
    pub stock_count: u32,
    pub selected: bool,
}

/// Current review form drafts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub name: String,
    pub review_text: String,
    pub rating: Option<u8>,
    pub recommend: Option<bool>,
}

impl From<&ReviewFormView> for ReviewDraft {
    fn from(form: &ReviewFormView) -> Self {
        ReviewDraft {
            name: form.name().to_string(),
            review_text: form.review_text().to_string(),
            rating: form.rating(),
            recommend: form.recommend(),
        }
    }
}

/// Owned copy of the active [`Panel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum PanelView {
    NoReviews,
    Reviews(Vec<Review>),
    MakeReview {
        draft: ReviewDraft,
        errors: Vec<ReviewFieldError>,
    },
    Shipping(String),
    ProductDetails(Vec<String>),
}

impl From<Panel<'_>> for PanelView {
    fn from(panel: Panel<'_>) -> Self {
        match panel {
            Panel::Reviews(ReviewsPanel::Empty) => PanelView::NoReviews,
            Panel::Reviews(ReviewsPanel::List(reviews)) => PanelView::Reviews(reviews.to_vec()),
            Panel::MakeReview(form) => PanelView::MakeReview {
                draft: ReviewDraft::from(form),
                errors: form.errors().to_vec(),
            },
            Panel::Shipping(cost) => PanelView::Shipping(cost.to_string()),
            Panel::ProductDetails(details) => PanelView::ProductDetails(details.to_vec()),
        }
    }
}

impl From<&RootApp> for StorefrontView {
    fn from(app: &RootApp) -> Self {
        let catalog = app.catalog();
        let form = app.review_form();
        let selected = catalog.selected_index();

        StorefrontView {
            title: catalog.title(),
            description: catalog.description().to_string(),
            image_ref: catalog.image_ref().to_string(),
            sale_banner: catalog.sale_banner(),
            stock_status: catalog.stock_status(),
            stock_label: catalog.stock_label().to_string(),
            can_add_to_cart: catalog.can_add_to_cart(),
            selected_variant: selected,
            variants: catalog
                .variants()
                .iter()
                .enumerate()
                .map(|(index, v)| VariantSummary {
                    id: v.id,
                    color: v.color.clone(),
                    stock_count: v.stock_count,
                    selected: index == selected,
                })
                .collect(),
            sizes: catalog.sizes().to_vec(),
            details: app.details().to_vec(),
            cart: app.cart().to_vec(),
            premium: app.premium(),
            shipping: app.shipping().to_string(),
            tab: app.tabs().selected(),
            panel: app.with_panel(|panel| PanelView::from(panel)),
            reviews: catalog.reviews(),
            draft: ReviewDraft::from(form),
            errors: form.errors().to_vec(),
        }
    }
}
