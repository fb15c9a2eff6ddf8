//! Filter stage

use crate::{categories::CategoryFilter, products::Product};

/// Keep the products matching both the category selector and the search text.
///
/// A product survives when the selector matches its category and its name
/// contains `search` as a case-insensitive substring. An empty `search`
/// matches every name. Surviving products keep their input order.
pub fn filter_products(
    products: &[Product],
    category: &CategoryFilter,
    search: &str,
) -> Vec<Product> {
    let needle = search.to_lowercase();

    products
        .iter()
        .filter(|product| matches(product, category, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercase.
pub(crate) fn matches(product: &Product, category: &CategoryFilter, needle: &str) -> bool {
    category.matches(product.category())
        && (needle.is_empty() || product.name().to_lowercase().contains(needle))
}
