//! PadiSquare
//!
//! Catalog engine for a multi-vendor marketplace storefront: vendors and the
//! products they own, the filter/sort/paginate pipeline shared by every browsing
//! surface, and the presentation helpers that turn a result page into output.

pub mod catalog;
pub mod categories;
pub mod fixtures;
pub mod inquiry;
pub mod observability;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod query;
pub mod render;
pub mod theme;
pub mod vendors;
pub mod views;
