//! Value-frequency queries over arbitrary attributes.

use std::collections::HashMap;

use celldex_model::{Attribute, Record, RecordId};
use celldex_store::RecordStore;
use serde::Serialize;

/// Most frequent value of one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeResult {
    pub attribute: Attribute,
    /// Stringified winning value, rendered the way the record prints it.
    pub value: String,
    pub count: usize,
}

/// The most frequent stringified value of `attribute` across the store.
///
/// Absent values never compete. Ties resolve to the value encountered
/// first in ascending-id iteration; `None` when every record is absent
/// for the attribute (or the store is empty).
pub fn mode(store: &RecordStore, attribute: Attribute) -> Option<ModeResult> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for (_, record) in store.iter() {
        let field = record.field(attribute);
        if field.is_absent() {
            continue;
        }
        let value = field.to_string();
        match counts.get_mut(&value) {
            Some(count) => *count += 1,
            None => {
                counts.insert(value.clone(), 1);
                first_seen.push(value);
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for value in &first_seen {
        let count = counts[value.as_str()];
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((value, count)),
        }
    }

    best.map(|(value, count)| ModeResult {
        attribute,
        value: value.to_string(),
        count,
    })
}

/// Records advertising exactly one feature: splitting FeatureSensors on
/// `,` yields a single element. A record with an empty feature list
/// qualifies, since the empty string still splits to one element.
pub fn single_feature(store: &RecordStore) -> Vec<(RecordId, &Record)> {
    store
        .iter()
        .filter(|(_, record)| record.feature_sensors.split(',').count() == 1)
        .collect()
}
