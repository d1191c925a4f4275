//! # Product Catalog View
//!
//! The product card: colour swatches, stock label, add-to-cart button and the
//! list of reviews received over the `review-submitted` channel.
//!
//! ## Interaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  hover swatch ──► select_variant(i) ──► selected = i                    │
//! │                                           │                             │
//! │                                           ▼                             │
//! │                     stock_label() / image_ref() / can_add_to_cart()     │
//! │                                                                         │
//! │  click "Add to Cart" ──► add_to_cart() ──► Some(CartEvent::Add(id))     │
//! │                                              │   (None while disabled)  │
//! │                                              ▼                          │
//! │                                     RootApp::handle_cart_event          │
//! │                                                                         │
//! │  EventChannel<Review> ──► listener ──► reviews.push(review)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::events::{EventChannel, Subscription};
use crate::types::{CartEvent, Product, Review, StockStatus, Variant};

// =============================================================================
// Configuration
// =============================================================================

/// Typed configuration for a catalog view.
///
/// Holding one proves the product passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    product: Product,
}

impl CatalogConfig {
    pub fn new(product: Product) -> CoreResult<Self> {
        product.validate()?;
        Ok(CatalogConfig { product })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }
}

// =============================================================================
// View
// =============================================================================

type ReviewList = Arc<Mutex<Vec<Review>>>;

fn lock_reviews(reviews: &ReviewList) -> MutexGuard<'_, Vec<Review>> {
    reviews.lock().unwrap_or_else(PoisonError::into_inner)
}

/// State behind the product card.
#[derive(Debug)]
pub struct ProductCatalogView {
    product: Product,
    selected: usize,
    reviews: ReviewList,
    subscription: Subscription,
}

impl ProductCatalogView {
    /// Builds the view and subscribes it to `reviews`.
    ///
    /// The subscription lives as long as the view.
    pub fn new(config: CatalogConfig, reviews: &EventChannel<Review>) -> Self {
        let list: ReviewList = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&list);
        let subscription = reviews.subscribe(move |review: &Review| {
            lock_reviews(&sink).push(review.clone());
        });

        ProductCatalogView {
            product: config.product,
            selected: 0,
            reviews: list,
            subscription,
        }
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Selects the variant at `index`.
    ///
    /// ## Errors
    /// `VariantOutOfRange` when `index` is past the end; the selection is
    /// left unchanged.
    pub fn select_variant(&mut self, index: usize) -> CoreResult<()> {
        let len = self.product.variants.len();
        if index >= len {
            warn!(index, len, "Rejected out-of-range variant selection");
            return Err(CoreError::VariantOutOfRange { index, len });
        }

        self.selected = index;
        debug!(index, variant = %self.selected_variant().id, "Variant selected");
        Ok(())
    }

    /// `add-to-cart` emission for the selected variant.
    ///
    /// Returns `None` while the selected variant is out of stock, matching the
    /// disabled button.
    pub fn add_to_cart(&self) -> Option<CartEvent> {
        if !self.can_add_to_cart() {
            debug!(variant = %self.selected_variant().id, "Add to cart disabled: out of stock");
            return None;
        }
        Some(CartEvent::Add(self.selected_variant().id))
    }

    /// `remove-from-cart` emission.
    pub fn remove_from_cart(&self) -> CartEvent {
        CartEvent::RemoveLast
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn variants(&self) -> &[Variant] {
        &self.product.variants
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_variant(&self) -> &Variant {
        // Validated products have at least one variant and `selected` is only
        // ever assigned an in-range index.
        &self.product.variants[self.selected]
    }

    pub fn title(&self) -> String {
        self.product.title()
    }

    pub fn image_ref(&self) -> &str {
        &self.selected_variant().image_ref
    }

    pub fn description(&self) -> &str {
        &self.product.description
    }

    pub fn sale_banner(&self) -> Option<String> {
        self.product.sale_banner()
    }

    pub fn details(&self) -> &[String] {
        &self.product.details
    }

    pub fn sizes(&self) -> &[String] {
        &self.product.sizes
    }

    pub fn stock_status(&self) -> StockStatus {
        self.selected_variant().stock_status()
    }

    pub fn stock_label(&self) -> &'static str {
        self.stock_status().label()
    }

    pub fn can_add_to_cart(&self) -> bool {
        self.selected_variant().in_stock()
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    /// Snapshot of received reviews in arrival order.
    pub fn reviews(&self) -> Vec<Review> {
        lock_reviews(&self.reviews).clone()
    }

    pub fn review_count(&self) -> usize {
        lock_reviews(&self.reviews).len()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_active()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VariantId;
    use crate::views::ReviewFormView;
    use crate::REVIEW_SUBMITTED_TOPIC;

    fn product_with_stock(counts: &[u32]) -> Product {
        let variants = counts
            .iter()
            .enumerate()
            .map(|(i, &stock_count)| Variant {
                id: VariantId(100 + i as u32),
                color: format!("color-{}", i),
                image_ref: format!("./img/{}.jpg", i),
                stock_count,
            })
            .collect();
        Product::new("Acme", "Widget", variants).unwrap()
    }

    fn view(product: Product) -> (EventChannel<Review>, ProductCatalogView) {
        let channel = EventChannel::new(REVIEW_SUBMITTED_TOPIC);
        let view = ProductCatalogView::new(CatalogConfig::new(product).unwrap(), &channel);
        (channel, view)
    }

    #[test]
    fn test_demo_product_defaults() {
        let (_channel, view) = view(Product::demo_socks());
        assert_eq!(view.title(), "Vue Mastery Socks");
        assert_eq!(view.selected_index(), 0);
        assert_eq!(view.image_ref(), "./assets/images/socks_green.jpg");
        assert_eq!(view.stock_label(), "Almost Sold Out");
        assert!(view.can_add_to_cart());
    }

    #[test]
    fn test_stock_label_boundaries() {
        let (_channel, mut view) = view(product_with_stock(&[0, 1, 10, 11]));
        let expected = ["Out of Stock", "Almost Sold Out", "Almost Sold Out", "In Stock"];
        for (index, label) in expected.iter().enumerate() {
            view.select_variant(index).unwrap();
            assert_eq!(view.stock_label(), *label);
            assert_eq!(view.can_add_to_cart(), index != 0);
        }
    }

    #[test]
    fn test_select_variant_out_of_range_is_rejected() {
        let (_channel, mut view) = view(Product::demo_socks());
        view.select_variant(1).unwrap();

        let err = view.select_variant(2).unwrap_err();
        assert_eq!(err, CoreError::VariantOutOfRange { index: 2, len: 2 });
        assert_eq!(view.selected_index(), 1);
    }

    #[test]
    fn test_add_to_cart_emits_selected_id() {
        let (_channel, mut view) = view(Product::demo_socks());
        assert_eq!(view.add_to_cart(), Some(CartEvent::Add(VariantId(2234))));

        view.select_variant(1).unwrap();
        assert_eq!(view.image_ref(), "./assets/images/socks_blue.jpg");
        assert_eq!(view.add_to_cart(), None);
        assert_eq!(view.remove_from_cart(), CartEvent::RemoveLast);
    }

    #[test]
    fn test_reviews_arrive_in_publish_order() {
        let (channel, view) = view(Product::demo_socks());
        let mut form = ReviewFormView::new(channel.clone());

        for (name, rating) in [("Ada", 5), ("Grace", 4)] {
            form.set_name(name);
            form.set_review_text("Comfortable");
            form.set_rating(rating);
            form.submit().unwrap();
        }

        let reviews = view.reviews();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].reviewer_name(), "Ada");
        assert_eq!(reviews[1].reviewer_name(), "Grace");
    }

    #[test]
    fn test_drop_releases_subscription() {
        let (channel, view) = view(Product::demo_socks());
        assert!(view.is_subscribed());
        assert_eq!(channel.subscriber_count(), 1);

        drop(view);
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn test_remount_does_not_accumulate_listeners() {
        let channel = EventChannel::new(REVIEW_SUBMITTED_TOPIC);
        for _ in 0..3 {
            let config = CatalogConfig::new(Product::demo_socks()).unwrap();
            let _view = ProductCatalogView::new(config, &channel);
            assert_eq!(channel.subscriber_count(), 1);
        }
        assert_eq!(channel.subscriber_count(), 0);
    }
}
