//! Sort stage

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::products::Product;

/// Errors raised when a sort option is parsed strictly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortOptionError {
    /// The string names no sort option.
    #[error("Unknown sort option: {0}")]
    Unknown(String),
}

/// Ordering applied to a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOption {
    /// Cheapest first.
    PriceLow,

    /// Most expensive first.
    PriceHigh,

    /// Newest listing first.
    Recent,
}

impl SortOption {
    /// Every sort option, in the order a picker lists them.
    pub const ALL: [SortOption; 3] = [
        SortOption::Recent,
        SortOption::PriceLow,
        SortOption::PriceHigh,
    ];

    /// Wire name (`price-low`, `price-high`, `recent`).
    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Recent => "recent",
        }
    }

    /// Label shown in a sort picker.
    pub fn label(self) -> &'static str {
        match self {
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::Recent => "Most Recent",
        }
    }

    /// Lenient parse: `None` for anything unrecognised, which sorts as a pass-through.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = SortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| SortOptionError::Unknown(s.to_string()))
    }
}

/// Return a sorted copy of `products`.
///
/// The sort is stable: products with equal keys keep their input order. With no
/// sort option the copy is returned in input order.
pub fn sort_products(products: &[Product], sort: Option<SortOption>) -> Vec<Product> {
    let mut sorted = products.to_vec();

    match sort {
        Some(SortOption::PriceLow) => {
            sorted.sort_by_key(|product| product.price().to_minor_units());
        }
        Some(SortOption::PriceHigh) => {
            sorted.sort_by(|a, b| b.price().to_minor_units().cmp(&a.price().to_minor_units()));
        }
        Some(SortOption::Recent) => {
            sorted.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        }
        None => {}
    }

    sorted
}

#[cfg(test)]
mod tests {
    use crate::{categories::Category, query::test_support::product};

    use super::*;

    fn products() -> Vec<Product> {
        vec![
            product("rt-001", "iPhone 15 Pro Max", 1_100_000, Category::Electronics, "2024-01-25"),
            product("mh-001", "Toyota Altis 2021", 15_000_000, Category::Vehicles, "2024-01-20"),
            product("af-002", "Premium Cotton T-Shirt", 25_000, Category::Clothing, "2024-01-24"),
            product("gz-001", "Wireless Charging Pad", 25_000, Category::Electronics, "2024-01-25"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|product| product.id().as_str()).collect()
    }

    #[test]
    fn price_low_sorts_ascending_and_keeps_ties_in_input_order() {
        let sorted = sort_products(&products(), Some(SortOption::PriceLow));

        assert_eq!(ids(&sorted), ["af-002", "gz-001", "rt-001", "mh-001"]);
    }

    #[test]
    fn price_high_sorts_descending() {
        let sorted = sort_products(&products(), Some(SortOption::PriceHigh));

        assert_eq!(ids(&sorted), ["mh-001", "rt-001", "af-002", "gz-001"]);
    }

    #[test]
    fn recent_sorts_newest_first() {
        let sorted = sort_products(&products(), Some(SortOption::Recent));

        assert_eq!(ids(&sorted), ["rt-001", "gz-001", "af-002", "mh-001"]);
    }

    #[test]
    fn no_option_passes_through() {
        let input = products();

        assert_eq!(sort_products(&input, None), input);
    }

    #[test]
    fn input_is_not_reordered() {
        let input = products();
        let before = input.clone();

        let _sorted = sort_products(&input, Some(SortOption::PriceHigh));

        assert_eq!(input, before);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        for option in SortOption::ALL {
            let once = sort_products(&products(), Some(option));
            let twice = sort_products(&once, Some(option));

            assert_eq!(once, twice, "{option} should be idempotent");
        }
    }

    #[test]
    fn wire_names_parse() {
        assert_eq!(SortOption::parse("price-low"), Some(SortOption::PriceLow));
        assert_eq!(SortOption::parse("price-high"), Some(SortOption::PriceHigh));
        assert_eq!(SortOption::parse("recent"), Some(SortOption::Recent));
        assert_eq!(SortOption::parse("popular"), None);
    }

    #[test]
    fn strict_parse_reports_unknown_option() {
        assert_eq!(
            "popular".parse::<SortOption>(),
            Err(SortOptionError::Unknown("popular".to_string()))
        );
    }
}
