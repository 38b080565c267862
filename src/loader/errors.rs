use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

use crate::types::Period;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Source file for period [{period}] was not found at [{}]", path.display())]
    MissingSource {
        period: Period,
        path: PathBuf
    },
    #[error("Source file [{}] could not be read: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error
    },
    #[error("Source reader task failed: {0}")]
    Join(#[from] JoinError)
}

impl LoadError {
    pub fn missing_source(period: Period, path: impl Into<PathBuf>) -> Self {
        Self::MissingSource { period, path: path.into() }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv { path: path.into(), source }
    }
}
