//! Product inquiries
//!
//! Shoppers contact a vendor about a listing through a prefilled WhatsApp
//! message; there is no in-app messaging.

use crate::{pricing::format_price, products::Product};

/// Prefilled message a shopper sends about `product`.
pub fn inquiry_message(product: &Product) -> String {
    format!(
        "Hi, I'm interested in \"{}\" listed at {} on your PadiSquare store.",
        product.name(),
        format_price(product.price())
    )
}

/// `wa.me` link opening a chat prefilled with the inquiry message.
///
/// Non-digit characters are stripped from `number`; without a usable number the
/// link lets the shopper pick the recipient.
pub fn whatsapp_link(product: &Product, number: Option<&str>) -> String {
    let digits: String = number
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    format!(
        "https://wa.me/{digits}?text={}",
        urlencoding::encode(&inquiry_message(product))
    )
}
