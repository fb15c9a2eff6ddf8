//! Fixtures
//!
//! The marketplace runs on static data: YAML files under `fixtures/vendors/`
//! describing every vendor and the products it owns.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashSet;
use rusty_money::{Findable, iso::Currency};
use thiserror::Error;
use tracing::info;

use crate::{
    catalog::Catalog,
    fixtures::vendors::VendorsFixture,
    vendors::Vendor,
};

pub mod vendors;

/// Name of the fixture set bundled with the storefront.
pub const DEFAULT_SET: &str = "marketplace";

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Vendor slug is not URL-safe
    #[error("Vendor slug is not URL-safe: {0}")]
    InvalidSlug(String),

    /// Two vendors share a slug
    #[error("Duplicate vendor slug: {0}")]
    DuplicateVendor(String),

    /// Two products share an identifier
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// A product has a negative price
    #[error("Product {product} has negative price {price}")]
    NegativePrice {
        /// Product identifier
        product: String,
        /// Price as written in the fixture
        price: i64,
    },
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Fixture {
    /// Create a fixture reader rooted at `./fixtures`
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture reader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a vendors fixture file (`<base>/vendors/<name>.yml`) into a catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if its contents
    /// fail validation.
    pub fn load_vendors(&self, name: &str) -> Result<Catalog, FixtureError> {
        let file_path = self.base_path.join("vendors").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let catalog = catalog_from_yaml(&contents)?;

        info!(
            path = %file_path.display(),
            vendors = catalog.vendors().len(),
            products = catalog.product_count(),
            currency = catalog.currency().iso_alpha_code,
            "loaded vendors fixture"
        );

        Ok(catalog)
    }

    /// Load the bundled marketplace set from `./fixtures`
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture cannot be loaded.
    pub fn marketplace() -> Result<Catalog, FixtureError> {
        Self::new().load_vendors(DEFAULT_SET)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse and validate a vendors fixture document
///
/// # Errors
///
/// Returns an error if the YAML is malformed (unknown categories and impossible
/// dates included), the currency is unknown, or any vendor or product fails
/// validation. Vendor slugs and product identifiers must
/// be unique across the document.
pub fn catalog_from_yaml(contents: &str) -> Result<Catalog, FixtureError> {
    let fixture: VendorsFixture = serde_norway::from_str(contents)?;

    let currency = Currency::find(&fixture.currency)
        .ok_or_else(|| FixtureError::UnknownCurrency(fixture.currency.clone()))?;

    let vendors = fixture
        .vendors
        .into_iter()
        .map(|vendor| vendor.try_into_vendor(currency))
        .collect::<Result<Vec<_>, _>>()?;

    check_unique(&vendors)?;

    Ok(Catalog::new(vendors, currency))
}

fn check_unique(vendors: &[Vendor]) -> Result<(), FixtureError> {
    let mut slugs = FxHashSet::default();
    let mut product_ids = FxHashSet::default();

    for vendor in vendors {
        if !slugs.insert(vendor.slug().as_str()) {
            return Err(FixtureError::DuplicateVendor(vendor.slug().to_string()));
        }

        for product in vendor.products() {
            if !product_ids.insert(product.id().as_str()) {
                return Err(FixtureError::DuplicateProduct(product.id().to_string()));
            }
        }
    }

    Ok(())
}
