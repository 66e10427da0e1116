//! Error types for catalog ingestion.

use celldex_model::FIELD_COUNT;
use thiserror::Error;

/// Errors that can occur while reading a catalog CSV file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be opened.
    #[error("open catalog file")]
    Io(#[from] std::io::Error),

    /// The CSV structure itself is malformed.
    #[error("malformed csv")]
    Csv(#[from] csv::Error),

    /// A data row does not have exactly the schema's field count.
    #[error("line {line}: row has {found} fields, expected {expected}", expected = FIELD_COUNT)]
    RowShape { line: u64, found: usize },
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
