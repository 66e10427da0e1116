use thiserror::Error;

use crate::attribute::FIELD_COUNT;

/// Errors raised by model-type constructors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A source row was split into the wrong number of fields.
    #[error("row has {found} fields, expected {expected}", expected = FIELD_COUNT)]
    RowShape { found: usize },
}
