//! Data model for the phone-catalog workspace: the fixed attribute schema,
//! typed records, and raw source rows.

pub mod attribute;
pub mod error;
pub mod raw;
pub mod record;

pub use attribute::{Attribute, AttributeSpec, FIELD_COUNT, FieldKind, ParseRule, SCHEMA};
pub use error::ModelError;
pub use raw::RawRow;
pub use record::{FieldValue, Record, RecordId};
