use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::loader::columns::{self, ColumnIndex};
use crate::loader::dates::parse_transaction_date;
use crate::loader::LoadError;
use crate::models::Transaction;
use crate::types::{parse_amount, Period};

pub const MISSING_COUNTRY: &str = "N/A";

/// Normalized rows of one source file plus the room columns it provides.
#[derive(Debug)]
pub struct SourceRows {
    pub records: Vec<Transaction>,
    pub has_room_type: bool,
    pub has_room_class: bool
}

/// Reads one export and stamps every row with `period`.
///
/// # Errors
/// Returns `LoadError` if the file is absent or cannot be read as CSV. Cell
/// level problems never fail the load; each field falls back to its default.
pub fn read_source(path: &Path, period: Period) -> Result<SourceRows, LoadError> {
    if !path.is_file() {
        return Err(LoadError::missing_source(period, path));
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|error| LoadError::csv(path, error))?;

    let headers = reader.byte_headers()
        .map(|headers| StringRecord::from_byte_record_lossy(headers.clone()))
        .map_err(|error| LoadError::csv(path, error))?;

    let index = ColumnIndex::from_headers(&headers);
    let mut records = Vec::new();

    for result in reader.byte_records() {
        let record = result.map_err(|error| LoadError::csv(path, error))?;
        let record = StringRecord::from_byte_record_lossy(record);

        records.push(normalize(&index, &record, period));
    }

    info!("Loaded {} rows for period [{period}] from {}", records.len(), path.display());

    Ok(SourceRows {
        records,
        has_room_type: index.contains(columns::ROOM_TYPE),
        has_room_class: index.contains(columns::ROOM_CLASS)
    })
}

fn normalize(index: &ColumnIndex, record: &StringRecord, period: Period) -> Transaction {
    let cell = |column: &str| index.cell(record, column);
    let text = |column: &str| cell(column).unwrap_or_default().to_string();

    let transaction_date = cell(columns::TRANSACTION_DATE).and_then(|value| {
        let parsed = parse_transaction_date(value);

        if parsed.is_none() {
            debug!("Unreadable transaction date [{value}] in period [{period}], row will be excluded");
        }

        parsed
    });

    Transaction {
        period,
        transaction_date,
        net_amount: amount_or_zero(cell(columns::NET_AMOUNT), columns::NET_AMOUNT),
        gross_amount: amount_or_zero(cell(columns::GROSS_AMOUNT), columns::GROSS_AMOUNT),
        country: cell(columns::COUNTRY).unwrap_or(MISSING_COUNTRY).to_string(),
        group_code: cell(columns::GROUP_CODE).and_then(|value| {
            let parsed = parse_amount(value);

            if parsed.is_none() {
                debug!("Unreadable transaction code group [{value}] in period [{period}]");
            }

            parsed
        }),
        description: cell(columns::DESCRIPTION).map(str::to_string),
        room_type: text(columns::ROOM_TYPE),
        room_class: text(columns::ROOM_CLASS),
        room_class_variant: text(columns::ROOM_CLASS_VARIANT),
        first_name: cell(columns::FIRST_NAME).map(str::to_string)
    }
}

fn amount_or_zero(value: Option<&str>, column: &str) -> Decimal {
    match value.map(|raw| (raw, parse_amount(raw))) {
        Some((_, Some(amount))) => amount,
        Some((raw, None)) if raw.parse::<f64>().is_ok_and(f64::is_finite) => {
            debug!("{column} [{raw}] is outside the representable range, defaulting to 0");
            Decimal::ZERO
        }
        Some((raw, None)) => {
            debug!("Unreadable {column} [{raw}], defaulting to 0");
            Decimal::ZERO
        }
        None => Decimal::ZERO
    }
}
