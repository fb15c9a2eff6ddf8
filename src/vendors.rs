//! Vendors

use std::fmt;

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::{categories::Category, products::Product};

/// URL-safe vendor identifier (e.g. `rigaaley-tech`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VendorSlug(String);

impl VendorSlug {
    /// Wrap a slug string.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Whether the slug only uses lowercase ASCII letters, digits and single inner hyphens.
    pub fn is_url_safe(&self) -> bool {
        !self.0.is_empty()
            && !self.0.starts_with('-')
            && !self.0.ends_with('-')
            && !self.0.contains("--")
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    /// Slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VendorSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Social handles published by a vendor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    /// Instagram handle
    pub instagram: Option<String>,

    /// Twitter handle
    pub twitter: Option<String>,

    /// Facebook page
    pub facebook: Option<String>,

    /// WhatsApp number in international format
    pub whatsapp: Option<String>,
}

/// Read-only display attributes of a vendor storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorProfile {
    /// Average review rating, out of 5.
    pub rating: Decimal,

    /// Number of reviews behind the rating.
    pub review_count: u32,

    /// Completed sales.
    pub total_sales: u32,

    /// Where the vendor trades from.
    pub location: String,

    /// Date the vendor joined the marketplace.
    pub joined: Date,

    /// Response-time blurb (e.g. "Usually responds within 1 hour").
    pub response_time: String,

    /// Headline category of the store.
    pub category: Category,

    /// Logo image reference.
    pub logo: String,

    /// Hero banner image reference.
    pub hero_image: String,

    /// Contact phone number.
    pub contact_phone: Option<String>,

    /// Contact email address.
    pub contact_email: Option<String>,

    /// Social handles.
    pub social: SocialLinks,
}

/// Vendor
///
/// A vendor owns its products outright; nothing else holds them. Global views
/// get copies through [`Vendor::listings`].
#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    slug: VendorSlug,
    name: String,
    description: String,
    verified: bool,
    profile: VendorProfile,
    products: Vec<Product>,
}

impl Vendor {
    /// Create a new vendor with its products.
    pub fn new(
        slug: VendorSlug,
        name: impl Into<String>,
        description: impl Into<String>,
        verified: bool,
        profile: VendorProfile,
        products: Vec<Product>,
    ) -> Self {
        Self {
            slug,
            name: name.into(),
            description: description.into(),
            verified,
            profile,
            products,
        }
    }

    /// Vendor slug
    pub fn slug(&self) -> &VendorSlug {
        &self.slug
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Storefront description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the vendor is verified.
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Display attributes
    pub fn profile(&self) -> &VendorProfile {
        &self.profile
    }

    /// Products owned by this vendor, in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Copies of this vendor's products with the vendor name attached.
    pub fn listings(&self) -> impl Iterator<Item = Product> + '_ {
        self.products
            .iter()
            .map(|product| product.clone().with_vendor(self.name.as_str()))
    }
}

/// Flatten every vendor's products into one list, vendor order then product order.
pub fn flatten_listings(vendors: &[Vendor]) -> Vec<Product> {
    vendors.iter().flat_map(Vendor::listings).collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use jiff::civil::date;
    use rusty_money::{Money, iso::NGN};

    use crate::products::ProductId;

    use super::*;

    pub(crate) fn profile(category: Category) -> VendorProfile {
        VendorProfile {
            rating: Decimal::new(48, 1),
            review_count: 342,
            total_sales: 1250,
            location: "Lagos, Nigeria".to_string(),
            joined: date(2019, 3, 15),
            response_time: "Usually responds within 1 hour".to_string(),
            category,
            logo: "/placeholder.svg".to_string(),
            hero_image: "hero-vendors.jpg".to_string(),
            contact_phone: None,
            contact_email: None,
            social: SocialLinks::default(),
        }
    }

    pub(crate) fn vendor(slug: &str, name: &str, products: &[(&str, &str, i64)]) -> Vendor {
        let products = products
            .iter()
            .map(|(id, product_name, price)| {
                Product::new(
                    ProductId::new(*id),
                    *product_name,
                    Money::from_major(*price, NGN),
                    Category::Electronics,
                    date(2024, 1, 20),
                )
            })
            .collect();

        Vendor::new(
            VendorSlug::new(slug),
            name,
            "Premium electronics",
            true,
            profile(Category::Electronics),
            products,
        )
    }

    #[test]
    fn listings_attach_vendor_name_without_touching_owned_products() {
        let vendor = vendor(
            "rigaaley-tech",
            "Rigaaley Tech",
            &[("rt-001", "iPhone 15 Pro Max", 1_100_000)],
        );

        let listings: Vec<Product> = vendor.listings().collect();

        assert_eq!(listings.len(), 1);
        assert!(
            listings.iter().all(|listing| listing.vendor() == Some("Rigaaley Tech")),
            "every listing carries the vendor name"
        );
        assert!(
            vendor.products().iter().all(|product| product.vendor().is_none()),
            "owned products stay unattributed"
        );
    }

    #[test]
    fn flatten_keeps_vendor_then_product_order() {
        let vendors = [
            vendor("a", "A", &[("a-1", "One", 1), ("a-2", "Two", 2)]),
            vendor("b", "B", &[("b-1", "Three", 3)]),
        ];

        let ids: Vec<String> = flatten_listings(&vendors)
            .iter()
            .map(|product| product.id().to_string())
            .collect();

        assert_eq!(ids, ["a-1", "a-2", "b-1"]);
    }

    #[test]
    fn flatten_of_no_vendors_is_empty() {
        assert!(flatten_listings(&[]).is_empty());
    }

    #[test]
    fn slug_url_safety() {
        assert!(VendorSlug::new("motors-hub").is_url_safe());
        assert!(VendorSlug::new("gadget-zone2").is_url_safe());
        assert!(!VendorSlug::new("Motors Hub").is_url_safe());
        assert!(!VendorSlug::new("-motors").is_url_safe());
        assert!(!VendorSlug::new("motors--hub").is_url_safe());
        assert!(!VendorSlug::new("").is_url_safe());
    }
}
