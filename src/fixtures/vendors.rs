//! Vendor Fixtures

use jiff::civil::Date;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    categories::Category,
    fixtures::FixtureError,
    products::{Product, ProductId},
    vendors::{SocialLinks, Vendor, VendorProfile, VendorSlug},
};

/// Top level of a vendors fixture file
#[derive(Debug, Deserialize)]
pub struct VendorsFixture {
    /// ISO code of the currency every price is quoted in (e.g. `NGN`)
    pub currency: String,

    /// Vendors in directory order
    pub vendors: Vec<VendorFixture>,
}

/// Vendor Fixture
#[derive(Debug, Deserialize)]
pub struct VendorFixture {
    /// URL-safe slug
    pub slug: String,

    /// Display name
    pub name: String,

    /// Storefront description
    pub description: String,

    /// Verified vendor flag
    #[serde(default)]
    pub verified: bool,

    /// Average rating out of 5
    pub rating: Decimal,

    /// Number of reviews
    #[serde(default)]
    pub review_count: u32,

    /// Completed sales
    #[serde(default)]
    pub total_sales: u32,

    /// Trading location
    pub location: String,

    /// Join date (`YYYY-MM-DD`)
    pub joined: Date,

    /// Response-time blurb
    pub response_time: String,

    /// Headline category
    pub category: Category,

    /// Logo image reference
    #[serde(default)]
    pub logo: String,

    /// Hero image reference
    #[serde(default)]
    pub hero_image: String,

    /// Contact phone number
    pub contact_phone: Option<String>,

    /// Contact email address
    pub contact_email: Option<String>,

    /// Social handles
    #[serde(default)]
    pub social: SocialFixture,

    /// Products owned by the vendor
    #[serde(default)]
    pub products: Vec<ProductFixture>,
}

/// Social handles in YAML
#[derive(Debug, Default, Deserialize)]
pub struct SocialFixture {
    /// Instagram handle
    pub instagram: Option<String>,

    /// Twitter handle
    pub twitter: Option<String>,

    /// Facebook page
    pub facebook: Option<String>,

    /// WhatsApp number
    pub whatsapp: Option<String>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Marketplace-unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Price in whole currency units
    pub price: i64,

    /// Image reference
    #[serde(default)]
    pub image: String,

    /// Category
    pub category: Category,

    /// Listing date (`YYYY-MM-DD`)
    pub created_at: Date,

    /// Verified listing flag
    #[serde(default)]
    pub verified: bool,
}

impl VendorFixture {
    /// Convert into a [`Vendor`] priced in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if the slug is not URL-safe or a product price is negative.
    pub fn try_into_vendor(self, currency: &'static Currency) -> Result<Vendor, FixtureError> {
        let slug = VendorSlug::new(self.slug);

        if !slug.is_url_safe() {
            return Err(FixtureError::InvalidSlug(slug.to_string()));
        }

        let products = self
            .products
            .into_iter()
            .map(|product| product.try_into_product(currency))
            .collect::<Result<Vec<_>, _>>()?;

        let profile = VendorProfile {
            rating: self.rating,
            review_count: self.review_count,
            total_sales: self.total_sales,
            location: self.location,
            joined: self.joined,
            response_time: self.response_time,
            category: self.category,
            logo: self.logo,
            hero_image: self.hero_image,
            contact_phone: self.contact_phone,
            contact_email: self.contact_email,
            social: SocialLinks {
                instagram: self.social.instagram,
                twitter: self.social.twitter,
                facebook: self.social.facebook,
                whatsapp: self.social.whatsapp,
            },
        };

        Ok(Vendor::new(
            slug,
            self.name,
            self.description,
            self.verified,
            profile,
            products,
        ))
    }
}

impl ProductFixture {
    /// Convert into a [`Product`] priced in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if the price is negative.
    pub fn try_into_product(self, currency: &'static Currency) -> Result<Product, FixtureError> {
        if self.price < 0 {
            return Err(FixtureError::NegativePrice {
                product: self.id,
                price: self.price,
            });
        }

        let product = Product::new(
            ProductId::new(self.id),
            self.name,
            Money::from_major(self.price, currency),
            self.category,
            self.created_at,
        );

        Ok(product
            .with_image(self.image)
            .with_verified(self.verified))
    }
}
