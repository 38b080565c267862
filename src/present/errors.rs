use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Export error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Export error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Export error: could not write [{}]: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error
    }
}

impl ExportError {
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }
}
