//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐   add_to_cart    ┌──────────┐                            │
//! │  │  Empty   │─────────────────►│ In Cart  │◄──┐ add_to_cart            │
//! │  │  Cart    │◄─────────────────│ [ids..]  │───┘ (duplicates kept)      │
//! │  └──────────┘  remove (last)   └──────────┘                            │
//! │       │                                                                 │
//! │       └── remove on empty: no-op                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use super::StorefrontView;
use crate::state::StorefrontState;

/// Clicks "Add to Cart" for the selected variant.
///
/// Out-of-stock variants leave the cart unchanged (the button is disabled).
pub fn add_to_cart(state: &StorefrontState) -> StorefrontView {
    state.with_app_mut(|app| {
        let added = app.click_add_to_cart();
        debug!(?added, "add_to_cart command");
        StorefrontView::from(&*app)
    })
}

/// Removes the most recently added item, if any.
pub fn remove_from_cart(state: &StorefrontState) -> StorefrontView {
    state.with_app_mut(|app| {
        let removed = app.click_remove_from_cart();
        debug!(?removed, "remove_from_cart command");
        StorefrontView::from(&*app)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::catalog::hover_variant;
    use crate::state::StorefrontConfig;
    use storefront_core::VariantId;

    fn state() -> StorefrontState {
        StorefrontState::from_config(&StorefrontConfig::default()).unwrap()
    }

    #[test]
    fn test_add_and_remove() {
        let state = state();
        add_to_cart(&state);
        let view = add_to_cart(&state);
        assert_eq!(view.cart, vec![VariantId(2234), VariantId(2234)]);

        let view = remove_from_cart(&state);
        assert_eq!(view.cart, vec![VariantId(2234)]);
    }

    #[test]
    fn test_remove_from_empty_cart() {
        let view = remove_from_cart(&state());
        assert!(view.cart.is_empty());
    }

    #[test]
    fn test_out_of_stock_add_is_ignored() {
        let state = state();
        hover_variant(&state, 1).unwrap();
        assert!(add_to_cart(&state).cart.is_empty());
    }
}
