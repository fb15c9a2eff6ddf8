use std::io;

use clap::Args;
use tracing::debug;

use padisquare::{
    catalog::Catalog,
    categories::CategoryFilter,
    products::Product,
    query::SortOption,
    render::ListingTable,
    theme::Theme,
    views::{BrowseState, Surface},
};

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct BrowseArgs {
    /// Surface to browse (home, search, products, vendor-site)
    #[arg(long, default_value_t = Surface::Listings)]
    pub(crate) surface: Surface,

    /// Vendor slug, for the vendor-site surface
    #[arg(long)]
    pub(crate) vendor: Option<String>,

    /// Category ("All products", Electronics, Clothing, Vehicles)
    #[arg(long)]
    pub(crate) category: Option<CategoryFilter>,

    /// Case-insensitive text matched against product names
    #[arg(long)]
    pub(crate) search: Option<String>,

    /// Sort order (price-low, price-high, recent); defaults per surface
    #[arg(long)]
    pub(crate) sort: Option<SortOption>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
}

pub(crate) fn run(catalog: &Catalog, args: BrowseArgs, theme: Theme) -> Result<(), CliError> {
    let products: Vec<Product> = match (args.surface, args.vendor.as_deref()) {
        (Surface::VendorSite, Some(slug)) => catalog.vendor(slug)?.listings().collect(),
        (Surface::VendorSite, None) => return Err(CliError::MissingVendor),
        (surface, Some(_)) => return Err(CliError::VendorOutsideSite(surface.to_string())),
        (_, None) => catalog.listings(),
    };

    let mut state = BrowseState::new(args.surface);

    if let Some(category) = args.category {
        state.set_category(category);
    }

    if let Some(search) = args.search {
        state.set_search(search);
    }

    if let Some(sort) = args.sort {
        state.set_sort(Some(sort));
    }

    state.set_page(args.page);

    let page = state.page(&products);

    debug!(
        surface = %args.surface,
        requested_page = args.page,
        page = page.page,
        total_pages = page.total_pages,
        "rendering page"
    );

    ListingTable::new(&page, state.category(), theme)
        .with_sort(state.sort())
        .write_to(io::stdout().lock())?;

    Ok(())
}
