//! Categories

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Display label of the wildcard category selector.
pub const ALL_PRODUCTS: &str = "All products";

/// Errors raised when a category label is parsed strictly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryError {
    /// The label does not name a known category.
    #[error("Unknown category: {0}")]
    Unknown(String),
}

/// Product category
///
/// Fixtures name categories by their label (`Electronics`, `Clothing`, `Vehicles`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    /// Phones, computers, audio and accessories.
    Electronics,

    /// Apparel, footwear and bags.
    Clothing,

    /// Cars and other vehicles.
    Vehicles,
}

impl Category {
    /// Every concrete category, in display order.
    pub const ALL: [Category; 3] = [Category::Electronics, Category::Clothing, Category::Vehicles];

    /// Display label of the category.
    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Vehicles => "Vehicles",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| CategoryError::Unknown(s.to_string()))
    }
}

/// Category selector applied by the catalog filter.
///
/// [`CategoryFilter::All`] is a wildcard and never compared against a product's
/// category. [`CategoryFilter::Unknown`] keeps a label that names no category; it
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Match every product.
    #[default]
    All,

    /// Match products in exactly this category.
    Only(Category),

    /// A label outside the category set.
    Unknown(String),
}

impl CategoryFilter {
    /// Selectors offered to shoppers: the wildcard followed by each category.
    pub fn selectors() -> [CategoryFilter; 4] {
        [
            CategoryFilter::All,
            CategoryFilter::Only(Category::Electronics),
            CategoryFilter::Only(Category::Clothing),
            CategoryFilter::Only(Category::Vehicles),
        ]
    }

    /// Parse a display label, mapping anything unrecognised to [`CategoryFilter::Unknown`].
    pub fn from_label(label: &str) -> Self {
        if label == ALL_PRODUCTS {
            return CategoryFilter::All;
        }

        label
            .parse::<Category>()
            .map_or_else(|_err| CategoryFilter::Unknown(label.to_string()), CategoryFilter::Only)
    }

    /// Whether a product in `category` passes this selector.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
            CategoryFilter::Unknown(_) => false,
        }
    }

    /// Heading shown above a result list for this selector.
    pub fn heading(&self) -> &str {
        match self {
            CategoryFilter::All => "All Products",
            CategoryFilter::Only(category) => category.label(),
            CategoryFilter::Unknown(label) => label,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_PRODUCTS),
            CategoryFilter::Only(category) => category.fmt(f),
            CategoryFilter::Unknown(label) => f.write_str(label),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryError;

    /// Strict parse: unknown labels are an error rather than a match-nothing filter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match CategoryFilter::from_label(s) {
            CategoryFilter::Unknown(label) => Err(CategoryError::Unknown(label)),
            filter => Ok(filter),
        }
    }
}
