use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("input file {} does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("header row is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("data row {line_index} invalid: {message}")]
    DataRow { line_index: u64, message: String },
}

impl ReaderError {
    /// True when the failure is a parse problem rather than a missing or unreadable file.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ReaderError::Csv { .. } | ReaderError::MissingColumn { .. } | ReaderError::DataRow { .. }
        )
    }
}
