//! Query behavior over small hand-built stores.

use celldex_model::{Attribute, Record};
use celldex_report::{
    busiest_year, delayed_releases, heaviest_oem, mode, oem_average_weights, release_histogram,
    releases_in, single_feature, weight_stats,
};
use celldex_store::RecordStore;

fn phone(oem: &str, year: i32, status: &str, weight: f64) -> Record {
    Record {
        oem: Some(oem.to_string()),
        launch_announced: year,
        launch_status: status.to_string(),
        body_weight: weight,
        ..Record::default()
    }
}

#[test]
fn weight_stats_excludes_zero_weight_records() {
    let mut store = RecordStore::new();
    store.insert_record(phone("A", 2020, "2020", 0.0));
    store.insert_record(phone("B", 2020, "2020", 150.0));

    let stats = weight_stats(&store).unwrap();
    assert_eq!(stats.lightest.record.body_weight, 150.0);
    assert_eq!(stats.heaviest.record.body_weight, 150.0);
    assert_eq!(stats.mean_grams, 150.0);
}

#[test]
fn weight_stats_extremes_and_mean() {
    let mut store = RecordStore::new();
    store.insert_record(phone("A", 2020, "2020", 120.0));
    store.insert_record(phone("B", 2021, "2021", 240.0));
    store.insert_record(phone("C", 2022, "2022", 180.0));

    let stats = weight_stats(&store).unwrap();
    assert_eq!(stats.lightest.record.oem.as_deref(), Some("A"));
    assert_eq!(stats.heaviest.record.oem.as_deref(), Some("B"));
    assert_eq!(stats.mean_grams, 180.0);
}

#[test]
fn weight_stats_ties_keep_first_record() {
    let mut store = RecordStore::new();
    let first = store.insert_record(phone("A", 2020, "2020", 150.0));
    store.insert_record(phone("B", 2020, "2020", 150.0));

    let stats = weight_stats(&store).unwrap();
    assert_eq!(stats.lightest.id, first);
    assert_eq!(stats.heaviest.id, first);
}

#[test]
fn weight_stats_empty_when_nothing_weighed() {
    let mut store = RecordStore::new();
    store.insert_record(phone("A", 2020, "2020", 0.0));
    assert!(weight_stats(&store).is_none());
    assert!(weight_stats(&RecordStore::new()).is_none());
}

#[test]
fn histogram_skips_cancelled_and_yearless() {
    let mut store = RecordStore::new();
    store.insert_record(phone("A", 2020, "2020", 1.0));
    store.insert_record(phone("B", 2020, "2021", 1.0));
    store.insert_record(phone("C", 2021, "Cancelled", 1.0));
    store.insert_record(phone("D", 0, "", 1.0));

    let histogram = release_histogram(&store);
    assert_eq!(histogram.get(&2020), Some(&2));
    assert_eq!(histogram.get(&2021), None);
    assert_eq!(histogram.len(), 1);
}

#[test]
fn releases_in_absent_year_is_zero() {
    let mut store = RecordStore::new();
    store.insert_record(phone("A", 2020, "2020", 1.0));
    assert_eq!(releases_in(&store, 2020), 1);
    assert_eq!(releases_in(&store, 1999), 0);
}

#[test]
fn busiest_year_breaks_ties_toward_earliest() {
    let mut store = RecordStore::new();
    store.insert_record(phone("A", 2021, "2021", 1.0));
    store.insert_record(phone("B", 2019, "2019", 1.0));
    store.insert_record(phone("C", 2021, "2021", 1.0));
    store.insert_record(phone("D", 2019, "2019", 1.0));

    assert_eq!(busiest_year(&store), Some((2019, 2)));
    assert!(busiest_year(&RecordStore::new()).is_none());
}

#[test]
fn delayed_release_needs_a_different_status_year() {
    let mut store = RecordStore::new();
    let delayed = store.insert_record(phone("A", 2022, "2023", 1.0));
    store.insert_record(phone("B", 2022, "2022", 1.0));
    store.insert_record(phone("C", 2022, "Discontinued", 1.0));
    store.insert_record(phone("D", 2022, "", 1.0));

    let hits = delayed_releases(&store);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, delayed);
}

#[test]
fn mode_skips_absent_values() {
    let mut store = RecordStore::new();
    store.insert_record(phone("Samsung", 2020, "2020", 1.0));
    store.insert_record(Record::default());
    store.insert_record(phone("Samsung", 2021, "2021", 1.0));
    store.insert_record(phone("Nokia", 2021, "2021", 1.0));

    let result = mode(&store, Attribute::Oem).unwrap();
    assert_eq!(result.value, "Samsung");
    assert_eq!(result.count, 2);
    // A store of only absent values has no mode.
    let mut absent_only = RecordStore::new();
    absent_only.insert_record(Record::default());
    assert!(mode(&absent_only, Attribute::Oem).is_none());
}

#[test]
fn mode_ties_keep_first_encountered_value() {
    let mut store = RecordStore::new();
    store.insert_record(phone("Nokia", 2020, "2020", 1.0));
    store.insert_record(phone("Apple", 2020, "2020", 1.0));

    let result = mode(&store, Attribute::Oem).unwrap();
    assert_eq!(result.value, "Nokia");
    assert_eq!(result.count, 1);
}

#[test]
fn mode_works_on_numeric_attributes() {
    let mut store = RecordStore::new();
    store.insert_record(phone("A", 2020, "2020", 1.0));
    store.insert_record(phone("B", 2021, "2021", 1.0));
    store.insert_record(phone("C", 2021, "2021", 1.0));

    let result = mode(&store, Attribute::LaunchAnnounced).unwrap();
    assert_eq!(result.value, "2021");
    assert_eq!(result.count, 2);
}

#[test]
fn single_feature_includes_empty_and_commaless() {
    let mut store = RecordStore::new();
    store.insert_record(Record {
        feature_sensors: "Accelerometer".to_string(),
        ..Record::default()
    });
    store.insert_record(Record {
        feature_sensors: "Accelerometer, gyro".to_string(),
        ..Record::default()
    });
    store.insert_record(Record::default());

    let singles = single_feature(&store);
    assert_eq!(singles.len(), 2);
    assert_eq!(singles[0].1.feature_sensors, "Accelerometer");
    assert_eq!(singles[1].1.feature_sensors, "");
}

#[test]
fn oem_averages_include_zero_weights() {
    let mut store = RecordStore::new();
    store.insert_record(phone("Samsung", 2020, "2020", 100.0));
    store.insert_record(phone("Samsung", 2021, "2021", 0.0));

    let averages = oem_average_weights(&store);
    assert_eq!(averages.len(), 1);
    // The zero-weight record stays in the denominator, unlike weight_stats.
    assert_eq!(averages[0].mean_grams, 50.0);
    assert_eq!(averages[0].count, 2);
}

#[test]
fn oem_averages_put_absent_bucket_first() {
    let mut store = RecordStore::new();
    store.insert_record(phone("Nokia", 2020, "2020", 100.0));
    store.insert_record(Record {
        body_weight: 80.0,
        ..Record::default()
    });

    let averages = oem_average_weights(&store);
    assert_eq!(averages[0].oem, None);
    assert_eq!(averages[1].oem.as_deref(), Some("Nokia"));
}

#[test]
fn heaviest_oem_takes_highest_mean() {
    let mut store = RecordStore::new();
    store.insert_record(phone("Light", 2020, "2020", 100.0));
    store.insert_record(phone("Heavy", 2020, "2020", 210.0));
    store.insert_record(phone("Heavy", 2021, "2021", 190.0));

    let winner = heaviest_oem(&store).unwrap();
    assert_eq!(winner.oem.as_deref(), Some("Heavy"));
    assert_eq!(winner.mean_grams, 200.0);
    assert!(heaviest_oem(&RecordStore::new()).is_none());
}

#[test]
fn report_results_serialize_to_json() {
    let mut store = RecordStore::new();
    store.insert_record(phone("Samsung", 2022, "2022", 167.0));

    let stats = weight_stats(&store).unwrap();
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["mean_grams"], 167.0);
    assert_eq!(json["lightest"]["record"]["oem"], "Samsung");

    let result = mode(&store, Attribute::Oem).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["attribute"], "oem");
    assert_eq!(json["value"], "Samsung");
}
