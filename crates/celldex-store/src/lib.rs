//! In-memory storage of normalized phone records.
//!
//! [`RecordStore`] is the single owner of all [`celldex_model::Record`]s in
//! a run: rows enter through [`RecordStore::ingest`] (normalize + append)
//! and every downstream query reads the store through borrows. Identifiers
//! are dense at insertion time but become sparse after deletions; lookups
//! against a dangling identifier fail with [`StoreError::NotFound`].

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::RecordStore;
