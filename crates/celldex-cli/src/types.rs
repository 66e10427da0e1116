//! Owned result types for the report pipeline.
//!
//! Queries over the store hand back borrows; the CLI re-shapes them into
//! these owned structs so one [`CatalogReport`] can outlive the store and
//! serialize as a single JSON document.

use std::collections::BTreeMap;
use std::path::PathBuf;

use celldex_model::{Record, RecordId};
use celldex_report::{ModeResult, OemAverage};
use serde::Serialize;

/// Everything the `report` subcommand computes for one catalog file.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    /// Source file the report was built from.
    pub source: PathBuf,
    /// Live records after ingestion.
    pub record_count: usize,
    /// Global weight statistics; `None` when no record has a weight.
    pub weight: Option<WeightSummary>,
    /// Release count per announcement year.
    pub releases_by_year: BTreeMap<i32, usize>,
    /// Year with the most releases.
    pub busiest_year: Option<YearCount>,
    /// Release count for the year requested with `--year`, if any.
    pub releases_in: Option<YearCount>,
    /// Most frequent value of the selected attribute.
    pub mode: Option<ModeResult>,
    /// Records whose status year differs from their announcement year.
    pub delayed: Vec<RecordLine>,
    /// Records advertising exactly one feature.
    pub single_feature: Vec<RecordLine>,
    /// Mean weight per manufacturer, absent-manufacturer bucket first.
    pub oem_averages: Vec<OemAverage>,
    /// Manufacturer with the highest mean weight.
    pub heaviest_oem: Option<OemAverage>,
}

/// Owned counterpart of the store's weight statistics.
#[derive(Debug, Clone, Serialize)]
pub struct WeightSummary {
    pub lightest: RecordLine,
    pub heaviest: RecordLine,
    pub mean_grams: f64,
}

/// A year and how many releases fell into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// One record, owned, together with its identifier.
#[derive(Debug, Clone, Serialize)]
pub struct RecordLine {
    pub id: RecordId,
    pub record: Record,
}

impl RecordLine {
    pub fn new(id: RecordId, record: &Record) -> Self {
        Self {
            id,
            record: record.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_with_stable_keys() {
        let report = CatalogReport {
            source: PathBuf::from("catalog.csv"),
            record_count: 1,
            weight: None,
            releases_by_year: BTreeMap::from([(2022, 1)]),
            busiest_year: Some(YearCount {
                year: 2022,
                count: 1,
            }),
            releases_in: None,
            mode: None,
            delayed: Vec::new(),
            single_feature: Vec::new(),
            oem_averages: Vec::new(),
            heaviest_oem: None,
        };

        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["record_count"], 1);
        assert_eq!(json["releases_by_year"]["2022"], 1);
        assert_eq!(json["busiest_year"]["year"], 2022);
        assert!(json["weight"].is_null());
        assert!(json["delayed"].as_array().expect("array").is_empty());
    }

    #[test]
    fn test_record_line_nests_the_full_record() {
        let line = RecordLine::new(
            RecordId::new(3),
            &Record {
                oem: Some("Nokia".to_string()),
                ..Record::default()
            },
        );
        let json = serde_json::to_value(&line).expect("serialize line");
        assert_eq!(json["id"], 3);
        assert_eq!(json["record"]["oem"], "Nokia");
    }
}
