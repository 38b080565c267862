use chrono::{NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: [&str; 8] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p"
];

const DATE_FORMATS: [&str; 3] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d-%b-%Y"
];

/// Reads a transaction timestamp; the first matching format wins.
///
/// Date-only values land at midnight. Month-first is assumed for slash dates.
pub fn parse_transaction_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    DATE_TIME_FORMATS.iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS.iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
