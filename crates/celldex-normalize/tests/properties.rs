//! Property tests for the lexical helpers and row normalization.

use celldex_model::RawRow;
use celldex_normalize::{extract_quoted, first_year, leading_number, normalize_row};
use proptest::prelude::*;

proptest! {
    /// Only the first space-delimited segment matters to the number parse.
    /// Compared via bit patterns so a generated "NaN" cell cannot trip the
    /// assertion on NaN != NaN.
    #[test]
    fn leading_number_ignores_trailing_segments(s in any::<String>()) {
        let with_tail = format!("{s} tail");
        prop_assert_eq!(
            leading_number(&s).map(f64::to_bits),
            leading_number(&with_tail).map(f64::to_bits)
        );
    }

    /// A matched year is always four digits and appears verbatim in the input.
    #[test]
    fn first_year_is_a_substring_run(s in any::<String>()) {
        if let Some(year) = first_year(&s) {
            prop_assert!((0..=9999).contains(&year));
            let padded = format!("{year:04}");
            prop_assert!(s.contains(&padded));
        }
    }

    /// Quote stripping never leaves a quote character behind.
    #[test]
    fn extracted_quote_runs_are_quote_free(s in any::<String>()) {
        if let Some(inner) = extract_quoted(&s) {
            prop_assert!(!inner.contains('"'));
        }
    }

    /// Normalization is total over arbitrary cell content and keeps the
    /// announcement year inside the four-digit range.
    #[test]
    fn normalize_row_never_fails(fields in prop::collection::vec(any::<String>(), 12)) {
        let row = RawRow::new(fields).unwrap();
        let record = normalize_row(&row);
        prop_assert!((0..=9999).contains(&record.launch_announced));
        prop_assert!(record.launch_status.is_empty()
            || record.launch_status == "Discontinued"
            || record.launch_status == "Cancelled"
            || record.launch_status.chars().all(|c| c.is_ascii_digit()));
    }

    /// Non-empty manufacturer and model cells survive verbatim.
    #[test]
    fn oem_and_model_pass_through(oem in ".+", model in ".+") {
        let mut fields = vec![String::new(); 12];
        fields[0] = oem.clone();
        fields[1] = model.clone();
        let record = normalize_row(&RawRow::new(fields).unwrap());
        prop_assert_eq!(record.oem.as_deref(), Some(oem.as_str()));
        prop_assert_eq!(record.model.as_deref(), Some(model.as_str()));
    }
}
