//! Library components of the catalog CLI: logging setup, the
//! ingest-to-report pipeline, and the owned report types.

pub mod logging;
pub mod pipeline;
pub mod types;
