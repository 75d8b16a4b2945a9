// crates/adcvolt-core/src/error.rs

use std::path::PathBuf;

use adcvolt_parser::ReaderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read sensor data: {0}")]
    Parse(#[source] ReaderError),

    #[error("Failed to write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl From<ReaderError> for PipelineError {
    fn from(err: ReaderError) -> Self {
        match err {
            ReaderError::NotFound { path } => PipelineError::NotFound { path },
            other => PipelineError::Parse(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
