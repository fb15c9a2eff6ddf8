//! Catalog

use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    products::Product,
    vendors::{Vendor, flatten_listings},
};

/// Errors related to catalog lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No vendor has the requested slug.
    #[error("Vendor not found: {0}")]
    VendorNotFound(String),
}

/// Catalog
///
/// Every vendor on the marketplace, priced in a single currency.
#[derive(Debug, Clone)]
pub struct Catalog {
    vendors: Vec<Vendor>,
    currency: &'static Currency,
}

impl Catalog {
    /// Create a catalog from vendors priced in `currency`.
    pub fn new(vendors: Vec<Vendor>, currency: &'static Currency) -> Self {
        Self { vendors, currency }
    }

    /// All vendors, in directory order.
    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    /// Find a vendor by slug.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::VendorNotFound`] if no vendor has this slug.
    pub fn vendor(&self, slug: &str) -> Result<&Vendor, CatalogError> {
        self.vendors
            .iter()
            .find(|vendor| vendor.slug().as_str() == slug)
            .ok_or_else(|| CatalogError::VendorNotFound(slug.to_string()))
    }

    /// Every product on the marketplace with its vendor name attached.
    pub fn listings(&self) -> Vec<Product> {
        flatten_listings(&self.vendors)
    }

    /// Number of products across all vendors.
    pub fn product_count(&self) -> usize {
        self.vendors.iter().map(|vendor| vendor.products().len()).sum()
    }

    /// Currency every price is quoted in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::NGN;
    use testresult::TestResult;

    use crate::vendors::tests::vendor;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                vendor(
                    "rigaaley-tech",
                    "Rigaaley Tech",
                    &[("rt-001", "iPhone 15 Pro Max", 1_100_000)],
                ),
                vendor("gadget-zone", "Gadget Zone NG", &[
                    ("gz-001", "Wireless Charging Pad", 25_000),
                    ("gz-002", "Bluetooth Speaker", 45_000),
                ]),
            ],
            NGN,
        )
    }

    #[test]
    fn vendor_lookup_by_slug() -> TestResult {
        let catalog = catalog();

        assert_eq!(catalog.vendor("gadget-zone")?.name(), "Gadget Zone NG");

        Ok(())
    }

    #[test]
    fn missing_vendor_is_an_error() {
        let catalog = catalog();

        assert_eq!(
            catalog.vendor("nope").err(),
            Some(CatalogError::VendorNotFound("nope".to_string()))
        );
    }

    #[test]
    fn listings_cover_every_product() {
        let catalog = catalog();

        assert_eq!(catalog.product_count(), 3);
        assert_eq!(catalog.listings().len(), 3);
        assert_eq!(catalog.currency(), NGN);
    }
}
