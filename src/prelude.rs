//! PadiSquare prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError},
    categories::{ALL_PRODUCTS, Category, CategoryError, CategoryFilter},
    fixtures::{Fixture, FixtureError},
    inquiry::{inquiry_message, whatsapp_link},
    pricing::format_price,
    products::{Product, ProductId},
    query::{
        CatalogQuery, PAGER_WINDOW, Page, SortOption, SortOptionError, filter_products,
        paginate_products, sort_products, total_pages, visible_pages,
    },
    render::{ListingTable, RenderError, write_vendor_directory, write_vendor_profile},
    theme::{Theme, ThemeError},
    vendors::{SocialLinks, Vendor, VendorProfile, VendorSlug, flatten_listings},
    views::{BrowseState, Surface, SurfaceError},
};
