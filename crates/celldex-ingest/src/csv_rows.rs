//! CSV file to validated raw rows.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use csv::ReaderBuilder;

use celldex_model::{ModelError, RawRow};

use crate::error::{IngestError, Result};

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Read every data row of a catalog CSV file.
///
/// The first line is the header and is skipped. Cells are trimmed and
/// BOM-stripped; embedded delimiters inside quoted cells are handled by the
/// CSV parser, so a quoted cell reaches normalization as one field. Every
/// data row must carry exactly the schema's field count.
///
/// # Errors
///
/// [`IngestError::Io`] when the file cannot be opened,
/// [`IngestError::Csv`] for malformed CSV, and [`IngestError::RowShape`]
/// (with the 1-based line number) for a row with the wrong field count.
pub fn read_raw_rows(path: &Path) -> Result<Vec<RawRow>> {
    let started = Instant::now();
    let file = File::open(path)?;
    // Flexible so uneven rows reach our own shape check, which reports the
    // offending line instead of the csv crate's record index.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        // Header occupies line 1, so the first data record starts at 2.
        let line = record
            .position()
            .map_or((index + 2) as u64, csv::Position::line);
        let fields: Vec<String> = record.iter().map(normalize_cell).collect();
        let row = RawRow::new(fields).map_err(|source| match source {
            ModelError::RowShape { found } => IngestError::RowShape { line, found },
        })?;
        rows.push(row);
    }

    tracing::info!(
        path = %path.display(),
        rows = rows.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Read catalog rows"
    );
    Ok(rows)
}
