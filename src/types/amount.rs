use rust_decimal::Decimal;
use std::str::FromStr;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Parses a numeric cell the way a spreadsheet export writes it.
///
/// Plain decimals (`1000`, `-12.50`, `+3`) and scientific notation (`1.5e6`) are
/// accepted. Anything else, including an empty cell, yields `None` so the caller
/// can apply its own default.
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let value = value.trim();

    if value.is_empty() {
        return None;
    }

    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// Period-over-period change in percent.
///
/// Returns `None` when the earlier value is exactly zero: the change is undefined
/// rather than infinite.
pub fn percent_change(previous: Decimal, current: Decimal) -> Option<Decimal> {
    if previous.is_zero() {
        return None;
    }

    (current - previous)
        .checked_div(previous)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
}
