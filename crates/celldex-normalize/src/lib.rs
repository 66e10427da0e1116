//! Normalization of raw catalog cells into typed record fields.
//!
//! The pipeline is split in two layers:
//!
//! - [`text`]: lexical helpers shared by several rules (quoted-run
//!   stripping, four-digit year scanning, leading-number parsing).
//! - [`rules`]: one total function per attribute plus [`normalize_row`],
//!   which assembles a full [`celldex_model::Record`] from a
//!   [`celldex_model::RawRow`].
//!
//! All rules are pure and infallible. Content that does not match an
//! attribute's expected shape degrades to that attribute's default value
//! rather than producing an error.

pub mod rules;
pub mod text;

pub use rules::{
    announced_year, display_type_text, normalize_row, os_text, plain_text, sim_text, status_text,
    text_unless_dash,
};
pub use text::{extract_quoted, first_year, first_year_run, leading_number, quoted_or_raw};
