//! # Static Info Views
//!
//! Shipping cost and product details. Both are pure derivations of their
//! configuration.

use crate::types::ShippingCost;

/// Typed configuration for [`ShippingView`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShippingConfig {
    pub premium: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingView {
    config: ShippingConfig,
}

impl ShippingView {
    pub fn new(config: ShippingConfig) -> Self {
        ShippingView { config }
    }

    pub fn premium(&self) -> bool {
        self.config.premium
    }

    pub fn cost(&self) -> ShippingCost {
        ShippingCost::for_membership(self.config.premium)
    }
}

/// Fixed list of product facts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDetailsView {
    details: Vec<String>,
}

impl ProductDetailsView {
    pub fn new(details: Vec<String>) -> Self {
        ProductDetailsView { details }
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_follows_premium_flag() {
        let premium = ShippingView::new(ShippingConfig { premium: true });
        assert_eq!(premium.cost().to_string(), "Free");

        let regular = ShippingView::new(ShippingConfig::default());
        assert_eq!(regular.cost().to_string(), "$2.99");
    }
}
