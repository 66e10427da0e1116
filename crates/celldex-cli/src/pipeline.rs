//! Ingest-to-report pipeline shared by the subcommands.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use celldex_ingest::read_raw_rows;
use celldex_model::{Attribute, Record, RecordId};
use celldex_report::{
    busiest_year, delayed_releases, heaviest_oem, mode, oem_average_weights, release_histogram,
    releases_in, single_feature, weight_stats,
};
use celldex_store::RecordStore;

use crate::types::{CatalogReport, RecordLine, WeightSummary, YearCount};

/// Read a catalog file and populate a fresh store from it.
pub fn load_store(catalog: &Path) -> Result<RecordStore> {
    let rows =
        read_raw_rows(catalog).with_context(|| format!("ingest {}", catalog.display()))?;
    let mut store = RecordStore::new();
    let ingested = store.ingest(rows);
    debug!(ingested, "store populated");
    Ok(store)
}

/// Ingest `catalog` and run the full set of queries over it.
pub fn build_catalog_report(
    catalog: &Path,
    year: Option<i32>,
    attribute: Attribute,
) -> Result<CatalogReport> {
    let span = info_span!("report", catalog = %catalog.display());
    let _guard = span.enter();
    let store = load_store(catalog)?;
    Ok(report_from_store(catalog, &store, year, attribute))
}

/// Run every query against an already-populated store.
pub fn report_from_store(
    source: &Path,
    store: &RecordStore,
    year: Option<i32>,
    attribute: Attribute,
) -> CatalogReport {
    let weight = weight_stats(store).map(|stats| WeightSummary {
        lightest: RecordLine::new(stats.lightest.id, stats.lightest.record),
        heaviest: RecordLine::new(stats.heaviest.id, stats.heaviest.record),
        mean_grams: stats.mean_grams,
    });

    CatalogReport {
        source: source.to_path_buf(),
        record_count: store.len(),
        weight,
        releases_by_year: release_histogram(store),
        busiest_year: busiest_year(store).map(|(year, count)| YearCount { year, count }),
        releases_in: year.map(|year| YearCount {
            year,
            count: releases_in(store, year),
        }),
        mode: mode(store, attribute),
        delayed: owned_lines(delayed_releases(store)),
        single_feature: owned_lines(single_feature(store)),
        oem_averages: oem_average_weights(store),
        heaviest_oem: heaviest_oem(store),
    }
}

fn owned_lines(entries: Vec<(RecordId, &Record)>) -> Vec<RecordLine> {
    entries
        .into_iter()
        .map(|(id, record)| RecordLine::new(id, record))
        .collect()
}
