//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Variant      │   │    Review       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  brand          │──►│  id (u32)       │   │  reviewer_name  │       │
//! │  │  name           │   │  color          │   │  review_text    │       │
//! │  │  variants       │   │  image_ref      │   │  rating (1..=5) │       │
//! │  │  details        │   │  stock_count    │   │  recommend      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  StockStatus    │   │      Tab        │   │  ShippingCost   │       │
//! │  │  InStock        │   │  Reviews        │   │  Free           │       │
//! │  │  AlmostSoldOut  │   │  MakeReview     │   │  Flat(Money)    │       │
//! │  │  OutOfStock     │   │  Shipping       │   └─────────────────┘       │
//! │  └─────────────────┘   │  ProductDetails │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_product;
use crate::{FLAT_SHIPPING_CENTS, LOW_STOCK_THRESHOLD, MAX_RATING, MIN_RATING};

// =============================================================================
// Variant
// =============================================================================

/// Identifier of a variant, unique within its product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u32);

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable option of a product (a colour) with its own stock and image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub color: String,
    pub image_ref: String,
    /// Units on hand. Unsigned, so never negative.
    pub stock_count: u32,
}

impl Variant {
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock_count > 0
    }

    #[inline]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_count(self.stock_count)
    }
}

// =============================================================================
// Stock Status
// =============================================================================

/// The three mutually exclusive inventory states shown on the product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// More than ten units.
    InStock,
    /// One to ten units inclusive.
    AlmostSoldOut,
    /// Zero units.
    OutOfStock,
}

impl StockStatus {
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => StockStatus::OutOfStock,
            c if c <= LOW_STOCK_THRESHOLD => StockStatus::AlmostSoldOut,
            _ => StockStatus::InStock,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::AlmostSoldOut => "Almost Sold Out",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product with its ordered list of variants.
///
/// Fields are public so the shell can deserialize a product table from its
/// config file; [`Product::new`] and [`Product::validate`] enforce the
/// invariants before a catalog view accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub brand: String,
    pub name: String,

    /// Alt text for the product image.
    #[serde(default)]
    pub description: String,

    pub variants: Vec<Variant>,

    #[serde(default)]
    pub details: Vec<String>,

    #[serde(default)]
    pub sizes: Vec<String>,

    #[serde(default)]
    pub on_sale: bool,
}

impl Product {
    /// Builds a product and validates it.
    ///
    /// ## Rules
    /// - brand and name are non-empty
    /// - at least one variant
    /// - variant ids are unique
    pub fn new(
        brand: impl Into<String>,
        name: impl Into<String>,
        variants: Vec<Variant>,
    ) -> CoreResult<Self> {
        let product = Product {
            brand: brand.into(),
            name: name.into(),
            description: String::new(),
            variants,
            details: Vec::new(),
            sizes: Vec::new(),
            on_sale: false,
        };
        product.validate()?;
        Ok(product)
    }

    /// Checks the invariants a catalog view relies on.
    pub fn validate(&self) -> CoreResult<()> {
        validate_product(self).map_err(CoreError::InvalidProduct)
    }

    /// Brand and product name joined by a space.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }

    /// Banner shown while the product is on sale.
    pub fn sale_banner(&self) -> Option<String> {
        self.on_sale
            .then(|| format!("{} {} is currently on sale", self.brand, self.name))
    }

    /// The storefront's stock demo product.
    pub fn demo_socks() -> Self {
        Product {
            brand: "Vue Mastery".to_string(),
            name: "Socks".to_string(),
            description: "Picture of socks".to_string(),
            variants: vec![
                Variant {
                    id: VariantId(2234),
                    color: "green".to_string(),
                    image_ref: "./assets/images/socks_green.jpg".to_string(),
                    stock_count: 10,
                },
                Variant {
                    id: VariantId(2235),
                    color: "blue".to_string(),
                    image_ref: "./assets/images/socks_blue.jpg".to_string(),
                    stock_count: 0,
                },
            ],
            details: vec![
                "80% cotton".to_string(),
                "20% polyester".to_string(),
                "Gender-neutral".to_string(),
            ],
            sizes: vec![
                "Large".to_string(),
                "Medium".to_string(),
                "Small".to_string(),
            ],
            on_sale: true,
        }
    }
}

// =============================================================================
// Rating
// =============================================================================

/// A star rating in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Returns `None` for values outside `1..=5`.
    pub fn new(value: u8) -> Option<Self> {
        (MIN_RATING..=MAX_RATING)
            .contains(&value)
            .then_some(Rating(value))
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Review
// =============================================================================

/// A submitted product review.
///
/// Only a successful review form submission can build one, and it is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    reviewer_name: String,
    review_text: String,
    rating: Rating,
    recommend: Option<bool>,
}

impl Review {
    pub(crate) fn new(
        reviewer_name: String,
        review_text: String,
        rating: Rating,
        recommend: Option<bool>,
    ) -> Self {
        Review {
            reviewer_name,
            review_text,
            rating,
            recommend,
        }
    }

    pub fn reviewer_name(&self) -> &str {
        &self.reviewer_name
    }

    pub fn review_text(&self) -> &str {
        &self.review_text
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn recommend(&self) -> Option<bool> {
        self.recommend
    }
}

// =============================================================================
// Tab
// =============================================================================

/// The four tabs under the product card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Reviews,
    MakeReview,
    Shipping,
    ProductDetails,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 4] = [
        Tab::Reviews,
        Tab::MakeReview,
        Tab::Shipping,
        Tab::ProductDetails,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Reviews => "Reviews",
            Tab::MakeReview => "Make a review",
            Tab::Shipping => "Shipping",
            Tab::ProductDetails => "Product details",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reviews" => Ok(Tab::Reviews),
            "make a review" | "make-review" | "make_review" | "make" | "write" => {
                Ok(Tab::MakeReview)
            }
            "shipping" => Ok(Tab::Shipping),
            "product details" | "product-details" | "product_details" | "details" => {
                Ok(Tab::ProductDetails)
            }
            _ => Err(format!("Unknown tab: {}", s)),
        }
    }
}

// =============================================================================
// Shipping Cost
// =============================================================================

/// What shipping costs the current shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingCost {
    Free,
    Flat(Money),
}

impl ShippingCost {
    /// Premium members ship free; everyone else pays the flat fee.
    pub fn for_membership(premium: bool) -> Self {
        if premium {
            ShippingCost::Free
        } else {
            ShippingCost::Flat(Money::from_cents(FLAT_SHIPPING_CENTS))
        }
    }
}

impl fmt::Display for ShippingCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShippingCost::Free => f.write_str("Free"),
            ShippingCost::Flat(fee) => write!(f, "{}", fee),
        }
    }
}

// =============================================================================
// Cart Event
// =============================================================================

/// Upward emission from the catalog view to the cart owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CartEvent {
    /// `add-to-cart` carrying the selected variant id.
    Add(VariantId),
    /// `remove-from-cart`, no payload.
    RemoveLast,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_boundaries() {
        assert_eq!(StockStatus::from_count(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_count(1), StockStatus::AlmostSoldOut);
        assert_eq!(StockStatus::from_count(10), StockStatus::AlmostSoldOut);
        assert_eq!(StockStatus::from_count(11), StockStatus::InStock);

        assert_eq!(StockStatus::from_count(0).label(), "Out of Stock");
        assert_eq!(StockStatus::from_count(1).label(), "Almost Sold Out");
        assert_eq!(StockStatus::from_count(10).label(), "Almost Sold Out");
        assert_eq!(StockStatus::from_count(11).label(), "In Stock");
    }

    #[test]
    fn test_title_and_sale_banner() {
        let mut product = Product::demo_socks();
        assert_eq!(product.title(), "Vue Mastery Socks");
        assert_eq!(
            product.sale_banner().as_deref(),
            Some("Vue Mastery Socks is currently on sale")
        );

        product.on_sale = false;
        assert!(product.sale_banner().is_none());
    }

    #[test]
    fn test_product_new_rejects_empty_variants() {
        let err = Product::new("Brand", "Thing", Vec::new()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidProduct(_)));
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_none());
        assert_eq!(Rating::new(1).map(|r| r.value()), Some(1));
        assert_eq!(Rating::new(5).map(|r| r.value()), Some(5));
        assert!(Rating::new(6).is_none());
    }

    #[test]
    fn test_tab_default_and_parsing() {
        assert_eq!(Tab::default(), Tab::Reviews);
        assert_eq!("Reviews".parse::<Tab>().unwrap(), Tab::Reviews);
        assert_eq!("Make a review".parse::<Tab>().unwrap(), Tab::MakeReview);
        assert_eq!("shipping".parse::<Tab>().unwrap(), Tab::Shipping);
        assert_eq!("details".parse::<Tab>().unwrap(), Tab::ProductDetails);
        assert!("checkout".parse::<Tab>().is_err());
    }

    #[test]
    fn test_tab_aliases_do_not_collide_with_review() {
        assert_eq!("write".parse::<Tab>().unwrap(), Tab::MakeReview);
        assert_eq!("make".parse::<Tab>().unwrap(), Tab::MakeReview);
        assert_eq!("reviews".parse::<Tab>().unwrap(), Tab::Reviews);
        assert!("review".parse::<Tab>().is_err());
    }

    #[test]
    fn test_shipping_cost() {
        assert_eq!(ShippingCost::for_membership(true), ShippingCost::Free);
        assert_eq!(ShippingCost::for_membership(true).to_string(), "Free");
        assert_eq!(
            ShippingCost::for_membership(false),
            ShippingCost::Flat(Money::from_cents(299))
        );
        assert_eq!(ShippingCost::for_membership(false).to_string(), "$2.99");
    }

    #[test]
    fn test_variant_id_serializes_as_number() {
        let json = serde_json::to_string(&VariantId(2234)).unwrap();
        assert_eq!(json, "2234");
    }
}
