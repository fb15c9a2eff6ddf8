//! Catalog query pipeline
//!
//! Reduces a product collection to the page a shopper should see. Every
//! browsing surface runs the same three stages in the same order: filter by
//! category and search text, sort, then paginate. Each stage returns a new
//! sequence and leaves its input alone.

use tracing::debug;

use crate::{categories::CategoryFilter, products::Product};

pub mod filter;
pub mod paginate;
pub mod sort;

#[cfg(test)]
pub(crate) mod test_support;

pub use filter::filter_products;
pub use paginate::{PAGER_WINDOW, paginate_products, total_pages, visible_pages};
pub use sort::{SortOption, SortOptionError, sort_products};

/// A single page of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Products on this page, at most the page size.
    pub items: Vec<Product>,

    /// 1-indexed page number that was requested.
    pub page: usize,

    /// Products per page.
    pub page_size: usize,

    /// Pages available for the matching products.
    pub total_pages: usize,

    /// Products matching the filter, across all pages.
    pub total_items: usize,
}

impl Page {
    /// Whether there is a page after this one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether there is a page before this one.
    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }
}

/// Catalog query
///
/// All parameters of one pipeline run. Changing the category, search text or
/// sort option through the `with_*` builders moves the query back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Category selector.
    pub category: CategoryFilter,

    /// Free-text search matched against product names.
    pub search: String,

    /// Ordering; `None` keeps the filtered order.
    pub sort: Option<SortOption>,

    /// 1-indexed page number.
    pub page: usize,

    /// Products per page.
    pub page_size: usize,
}

impl CatalogQuery {
    /// First page of the unfiltered, unsorted catalog.
    pub fn new(page_size: usize) -> Self {
        Self {
            category: CategoryFilter::All,
            search: String::new(),
            sort: None,
            page: 1,
            page_size,
        }
    }

    /// Select a category; resets to page 1.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self.page = 1;
        self
    }

    /// Set the search text; resets to page 1.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self.page = 1;
        self
    }

    /// Set the sort option; resets to page 1.
    #[must_use]
    pub fn with_sort(mut self, sort: Option<SortOption>) -> Self {
        self.sort = sort;
        self.page = 1;
        self
    }

    /// Jump to a page.
    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Filter and sort `products`, without paginating.
    pub fn matching(&self, products: &[Product]) -> Vec<Product> {
        let filtered = filter_products(products, &self.category, &self.search);

        sort_products(&filtered, self.sort)
    }

    /// Run filter, sort and paginate over `products`.
    pub fn run(&self, products: &[Product]) -> Page {
        let matching = self.matching(products);
        let total_items = matching.len();
        let items = paginate_products(&matching, self.page, self.page_size);

        debug!(
            category = %self.category,
            search = %self.search,
            sort = ?self.sort,
            page = self.page,
            page_size = self.page_size,
            total_items,
            returned = items.len(),
            "ran catalog query"
        );

        Page {
            items,
            page: self.page,
            page_size: self.page_size,
            total_pages: total_pages(total_items, self.page_size),
            total_items,
        }
    }
}
