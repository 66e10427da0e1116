//! Launch-year queries: histograms, busiest year, delayed releases.

use std::collections::BTreeMap;

use celldex_model::{Record, RecordId};
use celldex_normalize::first_year;
use celldex_store::RecordStore;

/// A record counts as released when it carries an announcement year and
/// was not cancelled.
fn counts_as_release(record: &Record) -> bool {
    record.launch_announced > 0 && !record.launch_status.contains("Cancelled")
}

/// Release count per announcement year, ascending. Years with no releases
/// are simply absent.
pub fn release_histogram(store: &RecordStore) -> BTreeMap<i32, usize> {
    let mut histogram = BTreeMap::new();
    for (_, record) in store.iter() {
        if counts_as_release(record) {
            *histogram.entry(record.launch_announced).or_insert(0) += 1;
        }
    }
    histogram
}

/// Number of releases announced in one year; 0 when the year is absent.
pub fn releases_in(store: &RecordStore, year: i32) -> usize {
    store
        .iter()
        .filter(|(_, record)| counts_as_release(record) && record.launch_announced == year)
        .count()
}

/// The year with the most releases and its count; ties resolve to the
/// earliest year. `None` when no record counts as a release.
pub fn busiest_year(store: &RecordStore) -> Option<(i32, usize)> {
    let mut best: Option<(i32, usize)> = None;
    for (year, count) in release_histogram(store) {
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((year, count)),
        }
    }
    best
}

/// Records whose launch status names a year other than the one they were
/// announced in. Status text without a positive four-digit year never
/// qualifies, so "Discontinued" and empty statuses are skipped.
pub fn delayed_releases(store: &RecordStore) -> Vec<(RecordId, &Record)> {
    store
        .iter()
        .filter(|(_, record)| {
            matches!(
                first_year(&record.launch_status),
                Some(year) if year > 0 && year != record.launch_announced
            )
        })
        .collect()
}
