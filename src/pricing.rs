//! Pricing

use rusty_money::{Formatter, LocalFormat, Money, Params, Position, iso::Currency};

const SYMBOL_FIRST: &[Position] = &[Position::Sign, Position::Symbol, Position::Amount];
const SYMBOL_LAST: &[Position] = &[Position::Sign, Position::Amount, Position::Symbol];

/// Formats a price in whole currency units, grouped the way the currency's
/// locale groups digits and with any fractional part dropped (e.g. `₦1,100,000`).
pub fn format_price(price: &Money<'_, Currency>) -> String {
    let currency = price.currency();
    let format = LocalFormat::from_locale(currency.locale);
    let whole = Money::from_decimal(price.amount().trunc(), currency);

    Formatter::money(
        &whole,
        Params {
            digit_separator: format.digit_separator,
            exponent_separator: format.exponent_separator,
            separator_pattern: format.digit_separator_pattern,
            positions: if currency.symbol_first { SYMBOL_FIRST } else { SYMBOL_LAST },
            rounding: Some(0),
            symbol: Some(currency.symbol),
            code: Some(currency.iso_alpha_code),
        },
    )
}
