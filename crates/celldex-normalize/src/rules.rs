//! Per-attribute normalization rules and whole-row assembly.
//!
//! Every rule is total: malformed content degrades to the attribute's
//! defined default (absent, 0, 0.0, or raw passthrough) instead of failing.
//! The pipeline would rather ingest every row than reject a bad one.

use celldex_model::{Attribute, RawRow, Record};

use crate::text::{extract_quoted, first_year, first_year_run, leading_number, quoted_or_raw};

/// Verbatim text; empty means absent.
pub fn plain_text(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Announcement year: quoted run stripped first, then the first four-digit
/// run; 0 when none is found.
pub fn announced_year(raw: &str) -> i32 {
    first_year(&quoted_or_raw(raw)).unwrap_or(0)
}

/// Launch status: the two keywords verbatim, else the first four-digit run
/// as text (empty when the text carries no year).
pub fn status_text(raw: &str) -> String {
    if raw == "Discontinued" || raw == "Cancelled" {
        return raw.to_string();
    }
    first_year_run(raw).unwrap_or_default().to_string()
}

/// Verbatim text; the literal `-` sentinel means absent.
pub fn text_unless_dash(raw: &str) -> Option<String> {
    if raw == "-" {
        None
    } else {
        Some(raw.to_string())
    }
}

/// SIM variant: quoted run stripped, kept only when the result mentions SIM.
pub fn sim_text(raw: &str) -> Option<String> {
    let text = quoted_or_raw(raw);
    if text.contains("SIM") {
        Some(text.into_owned())
    } else {
        None
    }
}

/// Display type: quoted run preferred; a bare `-` means absent; anything
/// else passes through raw.
pub fn display_type_text(raw: &str) -> Option<String> {
    if let Some(inner) = extract_quoted(raw) {
        return Some(inner);
    }
    if raw == "-" { None } else { Some(raw.to_string()) }
}

/// Operating system: quoted run stripped, truncated at the first comma;
/// empty after truncation means absent.
pub fn os_text(raw: &str) -> Option<String> {
    let text = quoted_or_raw(raw);
    let head = text.split(',').next().unwrap_or_default();
    if head.is_empty() {
        None
    } else {
        Some(head.to_string())
    }
}

/// Normalize one raw row into a typed [`Record`].
///
/// Pure and total: the same row always yields the same record, and no
/// content can make it fail. Field rules are independent of each other.
pub fn normalize_row(row: &RawRow) -> Record {
    Record {
        oem: plain_text(row.get(Attribute::Oem)),
        model: plain_text(row.get(Attribute::Model)),
        launch_announced: announced_year(row.get(Attribute::LaunchAnnounced)),
        launch_status: status_text(row.get(Attribute::LaunchStatus)),
        body_dimensions: text_unless_dash(row.get(Attribute::BodyDimensions)),
        body_weight: leading_number(row.get(Attribute::BodyWeight)).unwrap_or(0.0),
        sim: sim_text(row.get(Attribute::Sim)),
        display_type: display_type_text(row.get(Attribute::DisplayType)),
        display_size: leading_number(row.get(Attribute::DisplaySize)).unwrap_or(0.0),
        display_resolution: quoted_or_raw(row.get(Attribute::DisplayResolution)).into_owned(),
        feature_sensors: quoted_or_raw(row.get(Attribute::FeatureSensors)).into_owned(),
        os: os_text(row.get(Attribute::Os)),
    }
}
