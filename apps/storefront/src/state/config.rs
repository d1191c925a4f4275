//! # Storefront Configuration
//!
//! Loaded once at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file): premium member, the demo socks product
//! 2. Config file: `$STOREFRONT_CONFIG`, else `<config dir>/storefront.toml`
//! 3. Environment variables (`STOREFRONT_PREMIUM`)
//!
//! ## Example Config File
//! ```toml
//! premium = false
//!
//! [product]
//! brand = "Vue Mastery"
//! name = "Socks"
//! description = "Picture of socks"
//! on_sale = true
//! details = ["80% cotton", "20% polyester", "Gender-neutral"]
//! sizes = ["Large", "Medium", "Small"]
//!
//! [[product.variants]]
//! id = 2234
//! color = "green"
//! image_ref = "./assets/images/socks_green.jpg"
//! stock_count = 10
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use storefront_core::views::CatalogConfig;
use storefront_core::{CoreResult, Product};
use tracing::{debug, info, warn};

use crate::error::ConfigResult;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "STOREFRONT_CONFIG";

/// Environment variable overriding the premium flag.
pub const PREMIUM_ENV: &str = "STOREFRONT_PREMIUM";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Premium members get free shipping.
    #[serde(default = "default_premium")]
    pub premium: bool,

    /// The product shown on the page.
    #[serde(default = "Product::demo_socks")]
    pub product: Product,
}

fn default_premium() -> bool {
    true
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            premium: default_premium(),
            product: Product::demo_socks(),
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns the defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Checks the product invariants the catalog view relies on.
    pub fn validate(&self) -> CoreResult<()> {
        self.product.validate()
    }

    /// Typed configuration for the catalog view.
    pub fn catalog_config(&self) -> CoreResult<CatalogConfig> {
        CatalogConfig::new(self.product.clone())
    }

    /// Applies overrides looked up through `lookup` (the process environment
    /// at startup).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(PREMIUM_ENV) {
            match parse_flag(&value) {
                Some(premium) => {
                    debug!(premium, "Overriding premium flag from environment");
                    self.premium = premium;
                }
                None => warn!(value = %value, "Ignoring unparseable {}", PREMIUM_ENV),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::VariantId;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert!(config.premium);
        assert_eq!(config.product.title(), "Vue Mastery Socks");
        assert!(config.validate().is_ok());
        assert!(config.catalog_config().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config = StorefrontConfig::from_toml_str(
            r#"
premium = false

[product]
brand = "Acme"
name = "Mittens"

[[product.variants]]
id = 7
color = "red"
image_ref = "./red.jpg"
stock_count = 12
"#,
        )
        .unwrap();

        assert!(!config.premium);
        assert_eq!(config.product.title(), "Acme Mittens");
        assert_eq!(config.product.variants[0].id, VariantId(7));
        assert!(config.product.details.is_empty());
        assert!(!config.product.on_sale);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_validation_rejects_bad_products() {
        let mut config = StorefrontConfig::default();
        config.product.variants.clear();
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        let duplicate = config.product.variants[0].clone();
        config.product.variants.push(duplicate);
        assert!(config.validate().is_err());
        assert!(config.catalog_config().is_err());
    }

    #[test]
    fn test_premium_override() {
        let mut config = StorefrontConfig::default();
        config.apply_overrides(|key| (key == PREMIUM_ENV).then(|| "no".to_string()));
        assert!(!config.premium);

        config.apply_overrides(|_| Some("garbage".to_string()));
        assert!(!config.premium);

        config.apply_overrides(|_| None);
        assert!(!config.premium);
    }

    #[test]
    fn test_toml_roundtrip_keeps_product_table() {
        let toml_str = toml::to_string_pretty(&StorefrontConfig::default()).unwrap();
        assert!(toml_str.contains("[product]"));
        assert!(toml_str.contains("Vue Mastery"));
    }
}
