//! Weight statistics, global and per manufacturer.
//!
//! The two views treat the 0.0 no-data sentinel differently on purpose:
//! global stats exclude zero-weight records entirely, while per-OEM
//! averages keep them in the denominator. Callers comparing the two should
//! expect the per-OEM means to sit lower on sparse data.

use celldex_model::{Record, RecordId};
use celldex_store::RecordStore;
use serde::Serialize;

/// One stored record together with its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecordEntry<'a> {
    pub id: RecordId,
    pub record: &'a Record,
}

/// Extremes and mean of body weight across the store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightStats<'a> {
    pub lightest: RecordEntry<'a>,
    pub heaviest: RecordEntry<'a>,
    pub mean_grams: f64,
}

/// Mean body weight of one manufacturer's records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OemAverage {
    /// Verbatim manufacturer name; `None` is the absent-manufacturer bucket.
    pub oem: Option<String>,
    pub mean_grams: f64,
    pub count: usize,
}

/// Minimum, maximum and mean weight over records with a known weight
/// (BodyWeight > 0.0). `None` when no record qualifies. Ties on the
/// extremes resolve to the record first seen in ascending-id order.
pub fn weight_stats(store: &RecordStore) -> Option<WeightStats<'_>> {
    let mut lightest: Option<RecordEntry<'_>> = None;
    let mut heaviest: Option<RecordEntry<'_>> = None;
    let mut sum = 0.0;
    let mut count = 0usize;

    for (id, record) in store.iter() {
        if record.body_weight <= 0.0 {
            continue;
        }
        let entry = RecordEntry { id, record };
        match lightest {
            Some(current) if record.body_weight >= current.record.body_weight => {}
            _ => lightest = Some(entry),
        }
        match heaviest {
            Some(current) if record.body_weight <= current.record.body_weight => {}
            _ => heaviest = Some(entry),
        }
        sum += record.body_weight;
        count += 1;
    }

    Some(WeightStats {
        lightest: lightest?,
        heaviest: heaviest?,
        mean_grams: sum / count as f64,
    })
}

/// Mean weight per manufacturer, zero weights included in the denominator.
/// One entry per bucket in [`RecordStore::group_by_oem`] order: the absent
/// bucket first, then manufacturers ascending.
pub fn oem_average_weights(store: &RecordStore) -> Vec<OemAverage> {
    store
        .group_by_oem()
        .into_iter()
        .map(|(oem, members)| {
            let sum: f64 = members.iter().map(|(_, record)| record.body_weight).sum();
            OemAverage {
                oem: oem.map(str::to_string),
                mean_grams: sum / members.len() as f64,
                count: members.len(),
            }
        })
        .collect()
}

/// The manufacturer with the highest mean weight, ties resolving to the
/// earlier bucket. `None` only for an empty store.
pub fn heaviest_oem(store: &RecordStore) -> Option<OemAverage> {
    let mut best: Option<OemAverage> = None;
    for candidate in oem_average_weights(store) {
        match &best {
            Some(current) if candidate.mean_grams <= current.mean_grams => {}
            _ => best = Some(candidate),
        }
    }
    best
}
