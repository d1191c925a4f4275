//! # State Module
//!
//! Application state for the storefront shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────┐          │
//! │  │   StorefrontState    │        │    StorefrontConfig      │          │
//! │  │                      │        │                          │          │
//! │  │  Arc<Mutex<RootApp>> │◄───────│  premium, product        │          │
//! │  │  (cart, views)       │ build  │  (read-only after load)  │          │
//! │  └──────────────────────┘        └──────────────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod storefront;

pub use config::{StorefrontConfig, CONFIG_PATH_ENV, PREMIUM_ENV};
pub use storefront::StorefrontState;
