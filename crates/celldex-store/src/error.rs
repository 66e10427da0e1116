use celldex_model::RecordId;
use thiserror::Error;

/// Errors surfaced by [`crate::RecordStore`] lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The identifier was never assigned or the record has been deleted.
    #[error("no record with id {0}")]
    NotFound(RecordId),
}
