//! # Root App
//!
//! Owns the cart and the premium flag, and composes the views.
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RootApp                                                                │
//! │  ├── cart: Vec<VariantId>          (append / remove-last only)          │
//! │  ├── premium: bool ──► ShippingView                                     │
//! │  ├── reviews: EventChannel<Review> "review-submitted"                   │
//! │  │       ├──► ReviewFormView   (publisher)                              │
//! │  │       └──► ProductCatalogView (subscriber)                           │
//! │  ├── ReviewTabsView                                                     │
//! │  └── ProductDetailsView                                                 │
//! │                                                                         │
//! │  catalog.add_to_cart() ──► CartEvent ──► handle_cart_event ──► cart     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::{CoreResult, ReviewFieldError};
use crate::events::EventChannel;
use crate::types::{CartEvent, Review, ShippingCost, Tab, VariantId};
use crate::views::{
    CatalogConfig, Panel, PanelContext, ProductCatalogView, ProductDetailsView, ReviewFormView,
    ReviewTabsView, ShippingConfig, ShippingView,
};
use crate::REVIEW_SUBMITTED_TOPIC;

#[derive(Debug)]
pub struct RootApp {
    cart: Vec<VariantId>,
    reviews: EventChannel<Review>,
    catalog: ProductCatalogView,
    form: ReviewFormView,
    tabs: ReviewTabsView,
    shipping: ShippingView,
    details: ProductDetailsView,
}

impl RootApp {
    pub fn new(catalog: CatalogConfig, premium: bool) -> Self {
        let reviews = EventChannel::new(REVIEW_SUBMITTED_TOPIC);
        let details = ProductDetailsView::new(catalog.product().details.clone());
        let catalog = ProductCatalogView::new(catalog, &reviews);
        let form = ReviewFormView::new(reviews.clone());

        RootApp {
            cart: Vec::new(),
            reviews,
            catalog,
            form,
            tabs: ReviewTabsView::new(),
            shipping: ShippingView::new(ShippingConfig { premium }),
            details,
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Appends a variant id. Duplicates are kept.
    pub fn add_to_cart(&mut self, variant_id: VariantId) {
        self.cart.push(variant_id);
        debug!(variant = %variant_id, cart_len = self.cart.len(), "Added to cart");
    }

    /// Removes the most recently added id; `None` on an empty cart.
    pub fn remove_last_item(&mut self) -> Option<VariantId> {
        let removed = self.cart.pop();
        match removed {
            Some(id) => debug!(variant = %id, cart_len = self.cart.len(), "Removed from cart"),
            None => debug!("Remove on empty cart ignored"),
        }
        removed
    }

    /// Routes an upward emission from the catalog.
    ///
    /// Returns the id that was added or removed.
    pub fn handle_cart_event(&mut self, event: CartEvent) -> Option<VariantId> {
        match event {
            CartEvent::Add(id) => {
                self.add_to_cart(id);
                Some(id)
            }
            CartEvent::RemoveLast => self.remove_last_item(),
        }
    }

    pub fn cart(&self) -> &[VariantId] {
        &self.cart
    }

    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }

    // =========================================================================
    // User interaction
    // =========================================================================

    pub fn hover_variant(&mut self, index: usize) -> CoreResult<()> {
        self.catalog.select_variant(index)
    }

    /// Clicks the add-to-cart button; returns the id added, if enabled.
    pub fn click_add_to_cart(&mut self) -> Option<VariantId> {
        let event = self.catalog.add_to_cart()?;
        self.handle_cart_event(event)
    }

    /// Triggers the catalog's `remove-from-cart` emission.
    pub fn click_remove_from_cart(&mut self) -> Option<VariantId> {
        let event = self.catalog.remove_from_cart();
        self.handle_cart_event(event)
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tabs.select_tab(tab);
    }

    pub fn review_form_mut(&mut self) -> &mut ReviewFormView {
        &mut self.form
    }

    pub fn submit_review(&mut self) -> Result<Review, Vec<ReviewFieldError>> {
        self.form.submit()
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn premium(&self) -> bool {
        self.shipping.premium()
    }

    pub fn shipping(&self) -> ShippingCost {
        self.shipping.cost()
    }

    pub fn catalog(&self) -> &ProductCatalogView {
        &self.catalog
    }

    pub fn review_form(&self) -> &ReviewFormView {
        &self.form
    }

    pub fn tabs(&self) -> &ReviewTabsView {
        &self.tabs
    }

    pub fn details(&self) -> &[String] {
        self.details.details()
    }

    pub fn review_channel(&self) -> &EventChannel<Review> {
        &self.reviews
    }

    /// Renders the active panel through `f`.
    pub fn with_panel<F, R>(&self, f: F) -> R
    where
        F: FnOnce(Panel<'_>) -> R,
    {
        let reviews = self.catalog.reviews();
        let ctx = PanelContext {
            reviews: &reviews,
            form: &self.form,
            shipping: self.shipping(),
            details: self.details(),
        };
        f(self.tabs.panel(ctx))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
