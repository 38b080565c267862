use std::collections::HashMap;

use csv::StringRecord;

pub const TRANSACTION_DATE: &str = "Transaction Date";
pub const NET_AMOUNT: &str = "Net Amount";
pub const GROSS_AMOUNT: &str = "Gross Amount";
pub const COUNTRY: &str = "Country";
pub const GROUP_CODE: &str = "Transaction Code Group";
pub const DESCRIPTION: &str = "Transaction Code Description";
pub const ROOM_TYPE: &str = "Room Type";
pub const ROOM_CLASS: &str = "Room Class";
pub const ROOM_CLASS_VARIANT: &str = "Room Class.1";
pub const FIRST_NAME: &str = "First Name";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Header name to position lookup for one source file.
///
/// A repeated header gets a numeric suffix on each repeat (`Room Class`,
/// `Room Class.1`, ...) so both copies stay addressable.
#[derive(Debug, Default)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>
}

impl ColumnIndex {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut positions = HashMap::new();
        let mut repeats = HashMap::<String, usize>::new();

        for (position, header) in headers.iter().enumerate() {
            let name = header.trim_start_matches(BYTE_ORDER_MARK).trim().to_string();
            let seen = repeats.entry(name.clone()).or_insert(0);

            let key = match *seen {
                0 => name,
                count => format!("{name}.{count}")
            };

            *seen += 1;
            positions.insert(key, position);
        }

        Self { positions }
    }

    pub fn contains(&self, column: &str) -> bool {
        self.positions.contains_key(column)
    }

    /// Non-blank cell of `column`, `None` when the column or the value is missing.
    pub fn cell<'r>(&self, record: &'r StringRecord, column: &str) -> Option<&'r str> {
        self.positions.get(column)
            .and_then(|position| record.get(*position))
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}
