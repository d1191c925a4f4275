//! # Text Rendering
//!
//! Plain-text rendering of a [`StorefrontView`] snapshot for the shell.

use std::fmt::Write;

use storefront_core::{Review, ReviewFieldError, Tab, NO_REVIEWS_PLACEHOLDER};

use crate::commands::{PanelView, ReviewDraft, StorefrontView};

/// Renders the product card, the tab bar and the active panel.
pub fn render(view: &StorefrontView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_view(&mut out, view);
    out
}

fn write_view(out: &mut String, view: &StorefrontView) -> std::fmt::Result {
    writeln!(out, "== {} ==", view.title)?;
    writeln!(out, "[image: {} ({})]", view.image_ref, view.description)?;
    if let Some(banner) = &view.sale_banner {
        writeln!(out, "{}", banner)?;
    }
    writeln!(out, "{}", view.stock_label)?;

    for detail in &view.details {
        writeln!(out, "  - {}", detail)?;
    }

    let swatches: Vec<String> = view
        .variants
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let marker = if v.selected { "*" } else { " " };
            format!("{}{}:{}", marker, i, v.color)
        })
        .collect();
    writeln!(out, "Colors: {}", swatches.join("  "))?;

    if !view.sizes.is_empty() {
        writeln!(out, "Sizes: {}", view.sizes.join(", "))?;
    }

    let button = if view.can_add_to_cart {
        "[Add to Cart]"
    } else {
        "[Add to Cart] (disabled)"
    };
    writeln!(out, "{}    Cart({})", button, view.cart.len())?;
    writeln!(out)?;

    let bar: Vec<String> = Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == view.tab {
                format!("[{}]", tab)
            } else {
                format!(" {} ", tab)
            }
        })
        .collect();
    writeln!(out, "{}", bar.join(" "))?;

    match &view.panel {
        PanelView::NoReviews => writeln!(out, "{}", NO_REVIEWS_PLACEHOLDER),
        PanelView::Reviews(reviews) => write_reviews(out, reviews),
        PanelView::MakeReview { draft, errors } => write_form(out, draft, errors),
        PanelView::Shipping(cost) => writeln!(out, "Shipping: {}", cost),
        PanelView::ProductDetails(details) => {
            for detail in details {
                writeln!(out, "  - {}", detail)?;
            }
            Ok(())
        }
    }
}

fn write_reviews(out: &mut String, reviews: &[Review]) -> std::fmt::Result {
    for review in reviews {
        writeln!(out, "  {}", review.reviewer_name())?;
        writeln!(out, "  {}", review.review_text())?;
        writeln!(out, "  Rating: {}", review.rating())?;
        if let Some(recommend) = review.recommend() {
            writeln!(out, "  Recommends: {}", if recommend { "yes" } else { "no" })?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_form(out: &mut String, draft: &ReviewDraft, errors: &[ReviewFieldError]) -> std::fmt::Result {
    if !errors.is_empty() {
        writeln!(out, "Please correct the following errors:")?;
        for error in errors {
            writeln!(out, "  * {}", error)?;
        }
    }

    writeln!(out, "Name:   {}", draft.name)?;
    writeln!(out, "Review: {}", draft.review_text)?;
    match draft.rating {
        Some(rating) => writeln!(out, "Rating: {}", rating)?,
        None => writeln!(out, "Rating: -")?,
    }
    match draft.recommend {
        Some(true) => writeln!(out, "Recommend: yes"),
        Some(false) => writeln!(out, "Recommend: no"),
        None => writeln!(out, "Recommend: -"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{cart, catalog, review, tabs};
    use crate::state::{StorefrontConfig, StorefrontState};

    fn state() -> StorefrontState {
        StorefrontState::from_config(&StorefrontConfig::default()).unwrap()
    }

    #[test]
    fn test_initial_render_shows_placeholder() {
        let text = render(&catalog::get_storefront(&state()));
        assert!(text.contains("== Vue Mastery Socks =="));
        assert!(text.contains("Almost Sold Out"));
        assert!(text.contains("[Reviews]"));
        assert!(text.contains(NO_REVIEWS_PLACEHOLDER));
        assert!(text.contains("Cart(0)"));
    }

    #[test]
    fn test_placeholder_hidden_after_review() {
        let state = state();
        review::set_review_draft(&state, review::DraftField::Name("Ada".into()));
        review::set_review_draft(&state, review::DraftField::Text("Soft".into()));
        review::set_review_draft(&state, review::DraftField::Rating(4));
        let text = render(&review::submit_review(&state).unwrap());

        assert!(!text.contains(NO_REVIEWS_PLACEHOLDER));
        assert!(text.contains("Ada"));
        assert!(text.contains("Rating: 4"));
    }

    #[test]
    fn test_form_errors_rendered() {
        let state = state();
        tabs::select_tab(&state, "write").unwrap();
        review::submit_review(&state).unwrap_err();
        let text = render(&catalog::get_storefront(&state));

        assert!(text.contains("Please correct the following errors:"));
        assert!(text.contains("* Name required"));
        assert!(text.contains("* Review required"));
        assert!(text.contains("* Rating required"));
    }

    #[test]
    fn test_disabled_button_and_shipping() {
        let state = state();
        catalog::hover_variant(&state, 1).unwrap();
        tabs::select_tab(&state, "shipping").unwrap();
        let text = render(&cart::add_to_cart(&state));

        assert!(text.contains("(disabled)"));
        assert!(text.contains("Out of Stock"));
        assert!(text.contains("Shipping: Free"));
    }
}
