//! Browsing surfaces
//!
//! Each surface of the storefront instantiates the catalog query with its own
//! page size and its own browse state. The state holder is where the "new
//! filter, back to page 1" rule lives; the pipeline itself is stateless.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    categories::CategoryFilter,
    products::Product,
    query::{CatalogQuery, Page, SortOption, total_pages},
};

/// Errors raised when a surface name is parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// The string names no surface.
    #[error("Unknown surface: {0}")]
    Unknown(String),
}

/// A storefront context that lists products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Home page feed of marketplace listings.
    HomeFeed,

    /// Dedicated search page.
    Search,

    /// Full product listing across all vendors.
    Listings,

    /// A single vendor's mini-site.
    VendorSite,
}

impl Surface {
    /// Every surface.
    pub const ALL: [Surface; 4] = [
        Surface::HomeFeed,
        Surface::Search,
        Surface::Listings,
        Surface::VendorSite,
    ];

    /// Products shown per page.
    pub fn page_size(self) -> usize {
        match self {
            Surface::HomeFeed | Surface::Search => 4,
            Surface::Listings | Surface::VendorSite => 8,
        }
    }

    /// Ordering applied before the shopper picks one.
    pub fn default_sort(self) -> Option<SortOption> {
        match self {
            Surface::HomeFeed | Surface::Search => None,
            Surface::Listings | Surface::VendorSite => Some(SortOption::Recent),
        }
    }

    /// Command-line name.
    pub fn as_str(self) -> &'static str {
        match self {
            Surface::HomeFeed => "home",
            Surface::Search => "search",
            Surface::Listings => "products",
            Surface::VendorSite => "vendor-site",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Surface {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Surface::ALL
            .into_iter()
            .find(|surface| surface.as_str() == s)
            .ok_or_else(|| SurfaceError::Unknown(s.to_string()))
    }
}

/// Browse state
///
/// Category, search text, sort option and current page of one surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    surface: Surface,
    category: CategoryFilter,
    search: String,
    sort: Option<SortOption>,
    page: usize,
}

impl BrowseState {
    /// Fresh state for `surface`: every category, no search, default sort, page 1.
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            category: CategoryFilter::All,
            search: String::new(),
            sort: surface.default_sort(),
            page: 1,
        }
    }

    /// Surface this state belongs to.
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Current category selector.
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current sort option.
    pub fn sort(&self) -> Option<SortOption> {
        self.sort
    }

    /// Requested page; may lie outside the result range until clamped by [`BrowseState::page`].
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Select a category and go back to page 1.
    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.category = category.into();
        self.page = 1;
    }

    /// Change the search text and go back to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Change the sort option and go back to page 1.
    pub fn set_sort(&mut self, sort: Option<SortOption>) {
        self.sort = sort;
        self.page = 1;
    }

    /// Request a page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Move to the next page, stopping at the last page of `products`.
    pub fn next_page(&mut self, products: &[Product]) {
        let last = self.last_page(products);

        self.page = self.clamped(last).saturating_add(1).min(last);
    }

    /// Move to the previous page, stopping at page 1.
    pub fn previous_page(&mut self, products: &[Product]) {
        let last = self.last_page(products);

        self.page = self.clamped(last).saturating_sub(1).max(1);
    }

    /// Query matching the current state, page taken as-is.
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery {
            category: self.category.clone(),
            search: self.search.clone(),
            sort: self.sort,
            page: self.page,
            page_size: self.surface.page_size(),
        }
    }

    /// Run the query over `products`, with the page clamped into range.
    pub fn page(&self, products: &[Product]) -> Page {
        let last = self.last_page(products);

        self.query().with_page(self.clamped(last)).run(products)
    }

    fn last_page(&self, products: &[Product]) -> usize {
        let query = self.query();

        total_pages(query.matching(products).len(), query.page_size).max(1)
    }

    fn clamped(&self, last: usize) -> usize {
        self.page.clamp(1, last)
    }
}
