//! # storefront-core: Pure View Logic for the Storefront
//!
//! This crate holds every piece of state and every rule behind the product
//! page: variant selection, stock labels, the review form, the tab selector
//! and the cart. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/storefront (shell)                         │   │
//! │  │    config ──► state ──► commands ──► render                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  events   │  │   views   │  │ validation│  │   │
//! │  │   │  Product  │  │  Channel  │  │  Catalog  │  │   rules   │  │   │
//! │  │   │  Review   │  │  Subscr.  │  │ Form/Tabs │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • DERIVED VALUES ARE PURE METHODS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Variant, Review, Tab, etc.)
//! - [`money`] - Integer-cents money used for the shipping fee
//! - [`error`] - Domain error types
//! - [`validation`] - Product and review field validation
//! - [`events`] - Injectable publish/subscribe channel
//! - [`views`] - Catalog, review form, tabs, static info and the root app
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::views::{CatalogConfig, RootApp};
//! use storefront_core::Product;
//!
//! let mut app = RootApp::new(CatalogConfig::new(Product::demo_socks())?, true);
//! if let Some(event) = app.catalog().add_to_cart() {
//!     app.handle_cart_event(event);
//! }
//! assert_eq!(app.cart_len(), 1);
//! # Ok::<(), storefront_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod events;
pub mod money;
pub mod types;
pub mod validation;
pub mod views;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ReviewFieldError, ValidationError};
pub use events::{EventChannel, Subscription};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Topic name of the channel carrying submitted reviews.
pub const REVIEW_SUBMITTED_TOPIC: &str = "review-submitted";

/// Stock counts at or below this value (but above zero) are "almost sold out".
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Flat shipping fee for non-premium members, in cents.
pub const FLAT_SHIPPING_CENTS: i64 = 299;

/// Text of the Reviews tab while no review has been received.
pub const NO_REVIEWS_PLACEHOLDER: &str = "There are no reviews yet";

/// Lowest and highest star rating a review may carry.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
