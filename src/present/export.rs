use std::fs;
use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::info;

use crate::present::{ChartSpec, ExportError};
use crate::report::GuestRanking;
use crate::types::Period;

pub const EXPORT_FILE_NAME: &str = "top_guests.csv";
pub const EXPORT_CONTENT_TYPE: &str = "text/csv";

const BYTE_ORDER_MARK: &[u8] = b"\xEF\xBB\xBF";

/// Serializes the top-guests table as UTF-8 CSV with a byte order mark.
pub fn top_guests_csv(ranking: &GuestRanking) -> Result<Vec<u8>, ExportError> {
    let mut writer = Writer::from_writer(BYTE_ORDER_MARK.to_vec());

    let mut header = vec!["Guest".to_string()];
    header.extend(Period::ALL.iter().map(|period| format!("Net 1/{}", period.year())));
    writer.write_record(&header)?;

    for row in &ranking.rows {
        let mut record = vec![row.key.clone()];
        record.extend(Period::ALL.iter().map(|period| row.net.get(*period).normalize().to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;

    writer.into_inner().map_err(|error| ExportError::Io(error.into_error()))
}

/// Writes the top-guests export. A directory target receives `top_guests.csv`.
pub fn write_top_guests(target: &Path, ranking: &GuestRanking) -> Result<PathBuf, ExportError> {
    let path = if target.is_dir() {
        target.join(EXPORT_FILE_NAME)
    } else {
        target.to_path_buf()
    };

    let content = top_guests_csv(ranking)?;
    fs::write(&path, content).map_err(|error| ExportError::write(&path, error))?;

    info!("Wrote {} ({EXPORT_CONTENT_TYPE}) with {} guests", path.display(), ranking.rows.len());

    Ok(path)
}

/// Writes every chart as `<name>.json` under `directory`, creating it if needed.
pub fn write_charts(directory: &Path, charts: &[ChartSpec]) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(directory).map_err(|error| ExportError::write(directory, error))?;

    charts.iter()
        .map(|chart| -> Result<PathBuf, ExportError> {
            let path = directory.join(format!("{}.json", chart.name));
            fs::write(&path, chart.to_json()?).map_err(|error| ExportError::write(&path, error))?;
            Ok(path)
        })
        .collect()
}
