//! Analytical queries over a [`celldex_store::RecordStore`].
//!
//! Every operation is a read-only traversal: queries borrow the store,
//! return `Option`/empty collections for "nothing qualifies", and never
//! mutate or abort on odd records. Result structs serialize with serde so
//! callers can render them as JSON as easily as tables.
//!
//! Tie-breaking is deterministic everywhere: the store's ascending-id
//! iteration order (or ascending group key) decides winners.

pub mod releases;
pub mod values;
pub mod weights;

pub use releases::{busiest_year, delayed_releases, release_histogram, releases_in};
pub use values::{ModeResult, mode, single_feature};
pub use weights::{
    OemAverage, RecordEntry, WeightStats, heaviest_oem, oem_average_weights, weight_stats,
};
