mod columns;
mod csv_source;
mod dates;
mod errors;

use std::path::{Path, PathBuf};

use tokio::task::{spawn_blocking, JoinHandle};

use crate::models::{RoomColumn, TransactionTable};
use crate::types::Period;

use csv_source::{read_source, SourceRows};

pub use errors::LoadError;

/// Export holding the January 2025 transactions.
pub const SOURCE_2025: &str = "Spend by Country (1).csv";
/// Export holding the January 2026 transactions.
pub const SOURCE_2026: &str = "Spend by Country.csv";

/// Loads both exports from `base_dir` into one unified table.
///
/// The files are read on blocking tasks and concatenated with the 2025 rows
/// first. Rows with unreadable dates are kept; callers drop them through
/// `TransactionTable::dated`.
///
/// # Errors
/// Fails if either file is missing or unreadable. Both periods are required,
/// there is no partial result.
pub async fn load_data(base_dir: &Path) -> Result<TransactionTable, LoadError> {
    let earlier = spawn_source_reader(base_dir.join(SOURCE_2025), Period::Jan2025);
    let later = spawn_source_reader(base_dir.join(SOURCE_2026), Period::Jan2026);

    let (earlier, later) = tokio::try_join!(earlier, later)?;

    Ok(concat(earlier?, later?))
}

fn spawn_source_reader(path: PathBuf, period: Period) -> JoinHandle<Result<SourceRows, LoadError>> {
    spawn_blocking(move || read_source(&path, period))
}

fn concat(earlier: SourceRows, later: SourceRows) -> TransactionTable {
    let room_column = if earlier.has_room_type || later.has_room_type || !(earlier.has_room_class || later.has_room_class) {
        RoomColumn::RoomType
    } else {
        RoomColumn::RoomClass
    };

    let mut records = earlier.records;
    records.extend(later.records);

    TransactionTable::new(records, room_column)
}
