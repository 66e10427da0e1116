//! Typed records and their identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::attribute::Attribute;

/// Stable identifier of a stored record.
///
/// Identifiers are assigned by the store in strictly increasing order
/// starting at 0 and are never reused, even after deletion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RecordId(u32);

impl RecordId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

/// One normalized phone record: one typed value per [`Attribute`].
///
/// Absence (`None`) is a per-attribute signal distinct from the numeric
/// zero defaults: a missing OEM is `None`, while an unparseable weight is
/// `0.0`. Equality compares the normalized values only; identifiers live
/// in the store, so two records built from the same raw row are equal.
/// `Default` yields the record of a fully unparseable row: every field at
/// its degradation value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub oem: Option<String>,
    pub model: Option<String>,
    /// Announcement year; 0 when no four-digit year was found.
    pub launch_announced: i32,
    /// "Discontinued", "Cancelled", a four-digit year, or empty.
    pub launch_status: String,
    pub body_dimensions: Option<String>,
    /// Weight in grams; 0.0 doubles as the no-data sentinel.
    pub body_weight: f64,
    pub sim: Option<String>,
    pub display_type: Option<String>,
    /// Diagonal in inches; 0.0 doubles as the no-data sentinel.
    pub display_size: f64,
    pub display_resolution: String,
    pub feature_sensors: String,
    pub os: Option<String>,
}

impl Record {
    /// Borrowed view of one attribute, uniform across the three value
    /// shapes. Lets callers stringify or compare any column without
    /// matching on the concrete field.
    pub fn field(&self, attribute: Attribute) -> FieldValue<'_> {
        match attribute {
            Attribute::Oem => FieldValue::optional(&self.oem),
            Attribute::Model => FieldValue::optional(&self.model),
            Attribute::LaunchAnnounced => FieldValue::Int(self.launch_announced),
            Attribute::LaunchStatus => FieldValue::Text(&self.launch_status),
            Attribute::BodyDimensions => FieldValue::optional(&self.body_dimensions),
            Attribute::BodyWeight => FieldValue::Float(self.body_weight),
            Attribute::Sim => FieldValue::optional(&self.sim),
            Attribute::DisplayType => FieldValue::optional(&self.display_type),
            Attribute::DisplaySize => FieldValue::Float(self.display_size),
            Attribute::DisplayResolution => FieldValue::Text(&self.display_resolution),
            Attribute::FeatureSensors => FieldValue::Text(&self.feature_sensors),
            Attribute::Os => FieldValue::optional(&self.os),
        }
    }

    /// Multi-line rendering of the record with one `Header: value` line per
    /// attribute, absent values shown as `-`.
    pub fn to_verbose(&self, id: RecordId) -> String {
        let mut out = format!("Index: {id}");
        for attribute in Attribute::ALL {
            out.push('\n');
            out.push_str(attribute.as_str());
            out.push_str(": ");
            out.push_str(&self.field(attribute).to_string());
        }
        out
    }
}

/// Borrowed attribute value: the three concrete shapes plus absence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(i32),
    Float(f64),
    Absent,
}

impl<'a> FieldValue<'a> {
    fn optional(value: &'a Option<String>) -> Self {
        match value {
            Some(text) => FieldValue::Text(text),
            None => FieldValue::Absent,
        }
    }

    /// True when the attribute holds no value.
    pub fn is_absent(self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Int(value) => write!(f, "{value}"),
            FieldValue::Float(value) => write!(f, "{value}"),
            FieldValue::Absent => f.write_str("-"),
        }
    }
}
