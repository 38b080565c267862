use format_num::format_num;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Whole-unit amount with thousands separators, e.g. `-1,234,568`.
pub fn amount(value: Decimal) -> String {
    let rounded = value.round();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let magnitude = rounded.abs().to_f64().unwrap_or_default();

    format!("{sign}{}", format_num!(",.0f", magnitude))
}

pub fn count(value: u64) -> String {
    format_num!(",.0f", value as f64)
}

/// Signed one-decimal percentage, or `undefined` when there is no baseline.
pub fn change(value: Option<Decimal>, undefined: &str) -> String {
    value.and_then(|change| change.to_f64())
        .map(|change| format!("{change:+.1}%"))
        .unwrap_or_else(|| undefined.to_string())
}

/// Short amount for chart labels: `1.2B`, `3.4M`, `5.6K`, or the integer part.
pub fn compact(value: Decimal) -> String {
    let number = value.to_f64().unwrap_or_default();
    let magnitude = number.abs();

    if magnitude >= 1e9 {
        format!("{:.1}B", number / 1e9)
    } else if magnitude >= 1e6 {
        format!("{:.1}M", number / 1e6)
    } else if magnitude >= 1e3 {
        format!("{:.1}K", number / 1e3)
    } else {
        let whole = value.trunc();

        if whole.is_zero() { "0".to_string() } else { whole.to_string() }
    }
}
