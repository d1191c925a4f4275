//! # Catalog Commands

use tracing::debug;

use super::StorefrontView;
use crate::error::ApiError;
use crate::state::StorefrontState;

/// Gets the current page snapshot.
pub fn get_storefront(state: &StorefrontState) -> StorefrontView {
    debug!("get_storefront command");
    state.with_app(|app| StorefrontView::from(app))
}

/// Selects the variant under the pointer.
///
/// ## Errors
/// `NOT_FOUND` when `index` is past the last swatch.
pub fn hover_variant(state: &StorefrontState, index: usize) -> Result<StorefrontView, ApiError> {
    debug!(index, "hover_variant command");

    state.with_app_mut(|app| {
        app.hover_variant(index)?;
        Ok::<StorefrontView, ApiError>(StorefrontView::from(&*app))
    })
}
