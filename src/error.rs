use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HitlogError>;

#[derive(Debug, Error)]
pub enum HitlogError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {column}")]
    MissingColumn { column: &'static str },

    #[error("Row {row}: missing timestamp")]
    MissingTimestamp { row: usize },

    #[error("Row {row}: missing user_id")]
    MissingUserId { row: usize },
}

impl HitlogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HitlogError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for malformed input, false for filesystem failures.
    pub fn is_data_error(&self) -> bool {
        !matches!(self, HitlogError::Io { .. })
    }
}
