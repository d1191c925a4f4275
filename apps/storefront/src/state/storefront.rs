//! # Storefront State
//!
//! The running [`RootApp`] behind a mutex.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shell input          Command                 RootApp change            │
//! │  ───────────          ───────                 ──────────────            │
//! │  hover 1 ───────────► hover_variant() ──────► catalog.selected = 1     │
//! │  add ───────────────► add_to_cart() ────────► cart.push(id)            │
//! │  remove ────────────► remove_from_cart() ───► cart.pop()               │
//! │  submit ────────────► submit_review() ──────► channel → reviews.push   │
//! │  show ──────────────► get_storefront() ─────► (read only)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use storefront_core::views::RootApp;
use storefront_core::CoreResult;

use super::StorefrontConfig;

#[derive(Debug, Clone)]
pub struct StorefrontState {
    app: Arc<Mutex<RootApp>>,
}

impl StorefrontState {
    pub fn new(app: RootApp) -> Self {
        StorefrontState {
            app: Arc::new(Mutex::new(app)),
        }
    }

    /// Builds the app described by `config`.
    pub fn from_config(config: &StorefrontConfig) -> CoreResult<Self> {
        Ok(Self::new(RootApp::new(config.catalog_config()?, config.premium)))
    }

    /// Executes a function with read access to the app.
    pub fn with_app<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RootApp) -> R,
    {
        let app = self.app.lock().unwrap_or_else(PoisonError::into_inner);
        f(&app)
    }

    /// Executes a function with write access to the app.
    pub fn with_app_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RootApp) -> R,
    {
        let mut app = self.app.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config() {
        let state = StorefrontState::from_config(&StorefrontConfig::default()).unwrap();
        assert!(state.with_app(|app| app.premium()));
        assert_eq!(state.with_app(|app| app.cart_len()), 0);
    }

    #[test]
    fn test_clones_share_the_app() {
        let state = StorefrontState::from_config(&StorefrontConfig::default()).unwrap();
        let other = state.clone();
        other.with_app_mut(|app| app.click_add_to_cart());
        assert_eq!(state.with_app(|app| app.cart_len()), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = StorefrontConfig::default();
        config.product.brand.clear();
        assert!(StorefrontState::from_config(&config).is_err());
    }
}
