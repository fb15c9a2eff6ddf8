//! Products

use std::fmt;

use jiff::civil::Date;
use rusty_money::{Money, iso::Currency};

use crate::categories::Category;

/// Product identifier, unique across the marketplace (e.g. `rt-001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product
///
/// Values are immutable once built. A product listed under a vendor carries no
/// vendor name; listings flattened out of a vendor carry a copy of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money<'static, Currency>,
    image: String,
    category: Category,
    created_at: Date,
    verified: bool,
    vendor: Option<String>,
}

impl Product {
    /// Create a new product without a vendor name attached.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money<'static, Currency>,
        category: Category,
        created_at: Date,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: String::new(),
            category,
            created_at,
            verified: false,
            vendor: None,
        }
    }

    /// Returns a copy of this product with the given image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Returns a copy of this product with the given verified flag.
    #[must_use]
    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Returns a copy of this product attributed to the named vendor.
    #[must_use]
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    /// Product identifier
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Asking price
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }

    /// Image reference (asset path or URL); empty when none was given.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Category
    pub fn category(&self) -> Category {
        self.category
    }

    /// Date the product was listed.
    pub fn created_at(&self) -> Date {
        self.created_at
    }

    /// Whether the listing has been verified.
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Vendor display name, present on flattened listings.
    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref()
    }
}
