//! Rendering
//!
//! Terminal tables for result pages, the vendor directory and vendor profiles.
//! The [`Theme`] picks border style and accent colours.

use std::{fmt::Write as _, io};

use tabled::{
    Table,
    builder::Builder,
    settings::{
        Alignment, Color, Style, Theme as TableTheme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    categories::CategoryFilter,
    inquiry::whatsapp_link,
    pricing::format_price,
    products::Product,
    query::{Page, SortOption, visible_pages},
    theme::Theme,
    vendors::Vendor,
};

/// Errors that can occur while rendering output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

const PRICE_COLUMN: usize = 4;

/// A page of products laid out as a table with a pager footer.
#[derive(Debug)]
pub struct ListingTable<'a> {
    page: &'a Page,
    heading: &'a CategoryFilter,
    sort: Option<SortOption>,
    theme: Theme,
}

impl<'a> ListingTable<'a> {
    /// Prepare a table for `page`, headed by the active category selector.
    pub fn new(page: &'a Page, heading: &'a CategoryFilter, theme: Theme) -> Self {
        Self {
            page,
            heading,
            sort: None,
            theme,
        }
    }

    /// Name the sort option the page was ordered by.
    #[must_use]
    pub fn with_sort(mut self, sort: Option<SortOption>) -> Self {
        self.sort = sort;
        self
    }

    /// Writes the table to `out`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), RenderError> {
        writeln!(
            out,
            "{} ({} items)",
            self.heading.heading(),
            self.page.total_items
        )?;
        writeln!(out, "{}", category_bar(self.heading))?;

        if let Some(sort) = self.sort {
            writeln!(out, "Sorted by: {}", sort.label())?;
        }

        if self.page.items.is_empty() {
            writeln!(out, "No products found.")?;
            return Ok(());
        }

        let mut builder = Builder::default();

        builder.push_record(["", "Product", "Vendor", "Category", "Price", "Listed", "Verified"]);

        let offset = self.page.page.saturating_sub(1) * self.page.page_size;

        for (idx, product) in self.page.items.iter().enumerate() {
            builder.push_record(product_row(offset + idx + 1, product));
        }

        let mut table = builder.build();

        table.with(border_style(self.theme));
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(PRICE_COLUMN..=PRICE_COLUMN), Alignment::right());

        for row in 1..=self.page.items.len() {
            table.modify((row, PRICE_COLUMN), accent(self.theme));
        }

        writeln!(out, "{}", finish(&table, self.theme))?;

        if let Some(pager) = pager_line(self.page) {
            writeln!(out, "{pager}")?;
        }

        Ok(())
    }
}

fn product_row(position: usize, product: &Product) -> [String; 7] {
    [
        format!("#{position:<3}"),
        product.name().to_string(),
        product.vendor().unwrap_or_default().to_string(),
        product.category().to_string(),
        format_price(product.price()),
        product.created_at().to_string(),
        if product.is_verified() { "✓" } else { "" }.to_string(),
    ]
}

/// Category picker such as `[All products] Electronics Clothing Vehicles`.
fn category_bar(active: &CategoryFilter) -> String {
    CategoryFilter::selectors()
        .iter()
        .map(|selector| {
            if selector == active {
                format!("[{selector}]")
            } else {
                selector.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pager footer such as `‹ 1 [2] 3 ›  page 2 of 3`; `None` for a single page.
fn pager_line(page: &Page) -> Option<String> {
    let numbers = visible_pages(page.page, page.total_pages);

    if numbers.is_empty() {
        return None;
    }

    let mut line = String::new();

    line.push_str(if page.has_previous() { "‹ " } else { "  " });

    for number in numbers {
        if number == page.page {
            _ = write!(line, "[{number}] ");
        } else {
            _ = write!(line, "{number} ");
        }
    }

    line.push_str(if page.has_next() { "›" } else { " " });

    _ = write!(line, "  page {} of {}", page.page, page.total_pages);

    Some(line)
}

/// Writes the vendor directory as a table.
///
/// # Errors
///
/// Returns a [`RenderError`] if writing fails.
pub fn write_vendor_directory(
    mut out: impl io::Write,
    vendors: &[Vendor],
    theme: Theme,
) -> Result<(), RenderError> {
    let mut builder = Builder::default();

    builder.push_record([
        "Vendor", "Slug", "Category", "Rating", "Reviews", "Location", "Products",
    ]);

    for vendor in vendors {
        let profile = vendor.profile();
        let name = if vendor.is_verified() {
            format!("{} ✓", vendor.name())
        } else {
            vendor.name().to_string()
        };

        builder.push_record([
            name,
            vendor.slug().to_string(),
            profile.category.to_string(),
            profile.rating.to_string(),
            profile.review_count.to_string(),
            profile.location.clone(),
            vendor.products().len().to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(border_style(theme));
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..5), Alignment::right());

    writeln!(out, "{}", finish(&table, theme))?;

    Ok(())
}

/// Writes one vendor's profile, with an inquiry link for its newest product.
///
/// # Errors
///
/// Returns a [`RenderError`] if writing fails.
pub fn write_vendor_profile(mut out: impl io::Write, vendor: &Vendor) -> Result<(), RenderError> {
    let profile = vendor.profile();

    writeln!(
        out,
        "{}{}",
        vendor.name(),
        if vendor.is_verified() { " (Verified)" } else { "" }
    )?;
    writeln!(out, "{}", vendor.description())?;
    writeln!(out)?;
    writeln!(
        out,
        "Rating:    {} ({} reviews), {} sales",
        profile.rating, profile.review_count, profile.total_sales
    )?;
    writeln!(out, "Location:  {}", profile.location)?;
    writeln!(out, "Joined:    {}", profile.joined)?;
    writeln!(out, "Response:  {}", profile.response_time)?;

    if let Some(phone) = &profile.contact_phone {
        writeln!(out, "Phone:     {phone}")?;
    }

    if let Some(email) = &profile.contact_email {
        writeln!(out, "Email:     {email}")?;
    }

    for (network, handle) in [
        ("Instagram", &profile.social.instagram),
        ("Twitter", &profile.social.twitter),
        ("Facebook", &profile.social.facebook),
        ("WhatsApp", &profile.social.whatsapp),
    ] {
        if let Some(handle) = handle {
            writeln!(out, "{network:<10} {handle}")?;
        }
    }

    let newest = vendor
        .products()
        .iter()
        .max_by_key(|product| product.created_at());

    if let Some(product) = newest {
        writeln!(out)?;
        writeln!(
            out,
            "Ask about {}: {}",
            product.name(),
            whatsapp_link(product, profile.social.whatsapp.as_deref())
        )?;
    }

    Ok(())
}

fn border_style(theme: Theme) -> TableTheme {
    match theme {
        Theme::Light => TableTheme::from(Style::sharp()),
        Theme::Dark => TableTheme::from(Style::modern_rounded()),
    }
}

/// Dark theme dims borders so cell content stands out.
fn finish(table: &Table, theme: Theme) -> String {
    match theme {
        Theme::Light => table.to_string(),
        Theme::Dark => colorize_borders(&table.to_string()),
    }
}

/// Wraps runs of box-drawing characters (U+2500..U+257F) in ANSI dark-grey escapes.
fn colorize_borders(table: &str) -> String {
    let mut out = String::with_capacity(table.len() + 256);
    let mut in_run = false;

    for ch in table.chars() {
        let box_char = ('\u{2500}'..='\u{257F}').contains(&ch);

        if box_char && !in_run {
            out.push_str("\x1b[90m");
            in_run = true;
        } else if !box_char && in_run {
            out.push_str("\x1b[0m");
            in_run = false;
        }

        out.push(ch);
    }

    if in_run {
        out.push_str("\x1b[0m");
    }

    out
}

fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::FG_BLUE,
        Theme::Dark => Color::FG_GREEN,
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        categories::Category,
        query::{CatalogQuery, test_support::product},
        vendors::tests::vendor,
    };

    use super::*;

    fn products() -> Vec<Product> {
        vec![
            product("rt-001", "iPhone 15 Pro Max", 1_100_000, Category::Electronics, "2024-01-25")
                .with_vendor("Rigaaley Tech"),
            product("mh-001", "Toyota Altis 2021", 15_000_000, Category::Vehicles, "2024-01-20")
                .with_vendor("Motors Hub Nigeria"),
            product("af-001", "Designer Sneakers", 150_000, Category::Clothing, "2024-01-25")
                .with_vendor("Anita Fashion House"),
        ]
    }

    fn render(page: &Page, theme: Theme) -> Result<String, Box<dyn std::error::Error>> {
        let mut out = Vec::new();

        ListingTable::new(page, &CategoryFilter::All, theme).write_to(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn listing_table_shows_products_and_prices() -> TestResult {
        let page = CatalogQuery::new(8).run(&products());
        let output = render(&page, Theme::Light)?;

        assert!(output.starts_with("All Products (3 items)"), "got {output}");
        assert!(output.contains("iPhone 15 Pro Max"), "got {output}");
        assert!(output.contains("Motors Hub Nigeria"), "got {output}");
        assert!(output.contains("₦15,000,000"), "got {output}");
        assert!(!output.contains("page 1 of"), "single page has no pager: {output}");

        Ok(())
    }

    #[test]
    fn listing_table_shows_pager_for_multiple_pages() -> TestResult {
        let page = CatalogQuery::new(1).with_page(2).run(&products());
        let output = render(&page, Theme::Dark)?;

        assert!(output.contains("‹ 1 [2] 3 ›  page 2 of 3"), "got {output}");
        assert!(output.contains("\x1b[90m"), "dark theme dims borders");

        Ok(())
    }

    #[test]
    fn empty_page_says_so() -> TestResult {
        let page = CatalogQuery::new(8).with_search("bicycle").run(&products());
        let output = render(&page, Theme::Light)?;

        assert!(output.contains("No products found."), "got {output}");

        Ok(())
    }

    #[test]
    fn listing_table_names_category_and_sort() -> TestResult {
        let heading = CategoryFilter::Only(Category::Electronics);
        let page = CatalogQuery::new(8)
            .with_category(Category::Electronics)
            .with_sort(Some(SortOption::PriceHigh))
            .run(&products());
        let mut out = Vec::new();

        ListingTable::new(&page, &heading, Theme::Light)
            .with_sort(Some(SortOption::PriceHigh))
            .write_to(&mut out)?;
        let output = String::from_utf8(out)?;

        assert!(output.starts_with("Electronics (1 items)"), "got {output}");
        assert!(
            output.contains("All products [Electronics] Clothing Vehicles"),
            "got {output}"
        );
        assert!(output.contains("Sorted by: Price: High to Low"), "got {output}");

        Ok(())
    }

    #[test]
    fn unsorted_table_has_no_sort_line() -> TestResult {
        let page = CatalogQuery::new(8).run(&products());
        let output = render(&page, Theme::Light)?;

        assert!(output.contains("[All products] Electronics"), "got {output}");
        assert!(!output.contains("Sorted by"), "got {output}");

        Ok(())
    }

    #[test]
    fn pager_line_marks_current_page() {
        let page = Page {
            items: Vec::new(),
            page: 1,
            page_size: 4,
            total_pages: 2,
            total_items: 5,
        };

        assert_eq!(pager_line(&page).as_deref(), Some("  [1] 2 ›  page 1 of 2"));
    }

    #[test]
    fn vendor_directory_lists_vendors() -> TestResult {
        let vendors = [vendor(
            "rigaaley-tech",
            "Rigaaley Tech",
            &[("rt-001", "iPhone 15 Pro Max", 1_100_000)],
        )];
        let mut out = Vec::new();

        write_vendor_directory(&mut out, &vendors, Theme::Light)?;
        let output = String::from_utf8(out)?;

        assert!(output.contains("Rigaaley Tech ✓"), "got {output}");
        assert!(output.contains("rigaaley-tech"), "got {output}");
        assert!(output.contains("4.8"), "got {output}");

        Ok(())
    }

    #[test]
    fn vendor_profile_links_newest_product() -> TestResult {
        let vendor = vendor(
            "rigaaley-tech",
            "Rigaaley Tech",
            &[("rt-001", "iPhone 15 Pro Max", 1_100_000)],
        );
        let mut out = Vec::new();

        write_vendor_profile(&mut out, &vendor)?;
        let output = String::from_utf8(out)?;

        assert!(output.starts_with("Rigaaley Tech (Verified)"), "got {output}");
        assert!(
            output.contains("Ask about iPhone 15 Pro Max: https://wa.me/?text="),
            "got {output}"
        );

        Ok(())
    }
}
