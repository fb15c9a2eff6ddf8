//! Shared helpers for pipeline tests.

use jiff::civil::Date;
use rusty_money::{Money, iso::NGN};

use crate::{
    categories::Category,
    products::{Product, ProductId},
};

/// Build a verified NGN product; `created_at` is `YYYY-MM-DD`.
#[expect(clippy::expect_used, reason = "test fixtures use literal dates")]
pub(crate) fn product(
    id: &str,
    name: &str,
    price: i64,
    category: Category,
    created_at: &str,
) -> Product {
    let created_at = created_at.parse::<Date>().expect("valid test date");

    Product::new(ProductId::new(id), name, Money::from_major(price, NGN), category, created_at)
        .with_verified(true)
}
