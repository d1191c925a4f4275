//! # Views
//!
//! State and behaviour of every component on the product page.
//!
//! ```text
//! views/
//! ├── app.rs          ◄─── RootApp: cart owner, composes everything below
//! ├── catalog.rs      ◄─── ProductCatalogView: variants, stock, reviews
//! ├── review_form.rs  ◄─── ReviewFormView: drafts, validation, publish
//! ├── tabs.rs         ◄─── ReviewTabsView: one panel at a time
//! └── info.rs         ◄─── ShippingView / ProductDetailsView
//! ```
//!
//! Views never reference each other directly. The form reaches the catalog
//! through an [`EventChannel`](crate::EventChannel), and the catalog reaches
//! the cart by returning a [`CartEvent`](crate::CartEvent) that `RootApp`
//! routes.

mod app;
mod catalog;
mod info;
mod review_form;
mod tabs;

pub use app::RootApp;
pub use catalog::{CatalogConfig, ProductCatalogView};
pub use info::{ProductDetailsView, ShippingConfig, ShippingView};
pub use review_form::ReviewFormView;
pub use tabs::{Panel, PanelContext, ReviewTabsView, ReviewsPanel};
