//! Pagination stage

use smallvec::SmallVec;

use crate::products::Product;

/// Most page numbers a pager shows at once.
pub const PAGER_WINDOW: usize = 5;

/// Return page `page` (1-indexed) of `products`, `page_size` products per page.
///
/// Pages before the first, past the last, or of size zero are empty.
pub fn paginate_products(products: &[Product], page: usize, page_size: usize) -> Vec<Product> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }

    let Some(start) = (page - 1).checked_mul(page_size) else {
        return Vec::new();
    };

    products.iter().skip(start).take(page_size).cloned().collect()
}

/// Number of pages needed for `count` products at `page_size` per page.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }

    count.div_ceil(page_size)
}

/// Page numbers a pager shows around `current`.
///
/// At most [`PAGER_WINDOW`] numbers: every page when they all fit, otherwise the
/// first five near the start, the last five near the end, and a window centred on
/// `current` in between. `current` is clamped into `1..=total`. No pages are
/// shown when there is at most one page.
pub fn visible_pages(current: usize, total: usize) -> SmallVec<[usize; PAGER_WINDOW]> {
    if total <= 1 {
        return SmallVec::new();
    }

    let current = current.clamp(1, total);

    let first = if total <= PAGER_WINDOW || current <= 3 {
        1
    } else if current.saturating_add(2) >= total {
        total - PAGER_WINDOW + 1
    } else {
        current - 2
    };

    let last = first.saturating_add(PAGER_WINDOW - 1).min(total);

    (first..=last).collect()
}
