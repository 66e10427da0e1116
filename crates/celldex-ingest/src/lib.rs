//! Catalog CSV ingestion.
//!
//! The one entry point, [`read_raw_rows`], turns a catalog file into
//! validated [`celldex_model::RawRow`]s and is the only place the crate
//! tree touches the filesystem. Row content is not interpreted here; that
//! is normalization's job downstream.

pub mod csv_rows;
pub mod error;

pub use csv_rows::read_raw_rows;
pub use error::{IngestError, Result};
