//! The fixed attribute schema of a phone record.
//!
//! Source files carry twelve columns in a fixed order. Each column has a
//! stable display name, a target shape (optional text, text, year, decimal)
//! and a normalization rule. All three live in one immutable [`SCHEMA`]
//! table so that nothing else in the workspace hard-codes column indices or
//! header strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of columns in a source row. Rows of any other width are rejected
/// at [`crate::RawRow`] construction.
pub const FIELD_COUNT: usize = 12;

/// One of the twelve schema columns, in source-file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Manufacturer name, verbatim.
    Oem,
    /// Model name, verbatim.
    Model,
    /// Announcement year extracted from free text.
    LaunchAnnounced,
    /// "Discontinued"/"Cancelled" keyword or the release year found in text.
    LaunchStatus,
    /// Physical dimensions, `-` meaning no data.
    BodyDimensions,
    /// Weight in grams, numeric prefix of e.g. `167 g (5.89 oz)`.
    BodyWeight,
    /// SIM variant, kept only when the text actually mentions SIM.
    Sim,
    /// Display panel technology.
    DisplayType,
    /// Diagonal in inches, numeric prefix of e.g. `5.8 inches`.
    DisplaySize,
    /// Pixel resolution text.
    DisplayResolution,
    /// Comma-separated sensor list.
    FeatureSensors,
    /// Operating system, truncated at the first comma.
    Os,
}

impl Attribute {
    /// All attributes in source-column order.
    pub const ALL: [Attribute; FIELD_COUNT] = [
        Attribute::Oem,
        Attribute::Model,
        Attribute::LaunchAnnounced,
        Attribute::LaunchStatus,
        Attribute::BodyDimensions,
        Attribute::BodyWeight,
        Attribute::Sim,
        Attribute::DisplayType,
        Attribute::DisplaySize,
        Attribute::DisplayResolution,
        Attribute::FeatureSensors,
        Attribute::Os,
    ];

    /// Zero-based source column index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Schema metadata for this attribute.
    pub fn spec(self) -> &'static AttributeSpec {
        &SCHEMA[self.index()]
    }

    /// The column header as it appears in reports and source files.
    pub fn as_str(self) -> &'static str {
        self.spec().name
    }

    /// Target shape of the normalized value.
    pub fn kind(self) -> FieldKind {
        self.spec().kind
    }

    /// Normalization rule applied to the raw field.
    pub fn rule(self) -> ParseRule {
        self.spec().rule
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = String;

    /// Look an attribute up by display name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Attribute::ALL
            .into_iter()
            .find(|attribute| attribute.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown attribute: {s}"))
    }
}

/// Target shape of a normalized attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Text that may be absent.
    OptionalText,
    /// Text that is always present (possibly empty).
    Text,
    /// Four-digit year; 0 when no year was found.
    Year,
    /// Floating-point measurement; 0.0 when unparseable.
    Decimal,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::OptionalText => "optional text",
            FieldKind::Text => "text",
            FieldKind::Year => "year",
            FieldKind::Decimal => "decimal",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalization rule for one source column.
///
/// The rules describe how raw text degrades into the typed default; the
/// normalizer implements them, reports display them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseRule {
    /// Keep verbatim; empty means absent.
    Verbatim,
    /// Strip a quoted run if present, then take the first four-digit year.
    QuotedYear,
    /// Keep "Discontinued"/"Cancelled" verbatim, else take the first
    /// four-digit year as text.
    StatusKeywordOrYear,
    /// Keep verbatim; a literal `-` means absent.
    DashSentinel,
    /// Parse the text before the first space as a number.
    LeadingNumber,
    /// Strip a quoted run if present; keep only if it mentions SIM.
    SimGate,
    /// Prefer a quoted run; a literal `-` means absent; else keep raw.
    QuotedOrDash,
    /// Prefer a quoted run, else keep the raw text.
    QuotedOrRaw,
    /// Strip a quoted run if present, truncate at the first comma; empty
    /// means absent.
    QuotedFirstComma,
}

impl ParseRule {
    /// One-line rule summary for schema listings.
    pub fn describe(self) -> &'static str {
        match self {
            ParseRule::Verbatim => "verbatim, absent when empty",
            ParseRule::QuotedYear => "quoted run stripped, then first 4-digit year (0 when none)",
            ParseRule::StatusKeywordOrYear => {
                "Discontinued/Cancelled kept verbatim, else first 4-digit year"
            }
            ParseRule::DashSentinel => "verbatim, absent when the field is \"-\"",
            ParseRule::LeadingNumber => "number before the first space (0 when unparseable)",
            ParseRule::SimGate => "quoted run stripped, kept only when it contains \"SIM\"",
            ParseRule::QuotedOrDash => "quoted run preferred, absent when the field is \"-\"",
            ParseRule::QuotedOrRaw => "quoted run preferred, else raw text",
            ParseRule::QuotedFirstComma => {
                "quoted run stripped, truncated at the first comma, absent when empty"
            }
        }
    }
}

/// Immutable metadata for one schema column.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    pub attribute: Attribute,
    /// Display name, matching the source file header.
    pub name: &'static str,
    pub kind: FieldKind,
    pub rule: ParseRule,
}

/// The schema descriptor: one entry per column, in source order.
///
/// Indexed by [`Attribute::index`]; the unit tests pin the ordering.
pub static SCHEMA: [AttributeSpec; FIELD_COUNT] = [
    AttributeSpec {
        attribute: Attribute::Oem,
        name: "OEM",
        kind: FieldKind::OptionalText,
        rule: ParseRule::Verbatim,
    },
    AttributeSpec {
        attribute: Attribute::Model,
        name: "Model",
        kind: FieldKind::OptionalText,
        rule: ParseRule::Verbatim,
    },
    AttributeSpec {
        attribute: Attribute::LaunchAnnounced,
        name: "Launch Announced",
        kind: FieldKind::Year,
        rule: ParseRule::QuotedYear,
    },
    AttributeSpec {
        attribute: Attribute::LaunchStatus,
        name: "Launch Status",
        kind: FieldKind::Text,
        rule: ParseRule::StatusKeywordOrYear,
    },
    AttributeSpec {
        attribute: Attribute::BodyDimensions,
        name: "Body Dimensions",
        kind: FieldKind::OptionalText,
        rule: ParseRule::DashSentinel,
    },
    AttributeSpec {
        attribute: Attribute::BodyWeight,
        name: "Body Weight",
        kind: FieldKind::Decimal,
        rule: ParseRule::LeadingNumber,
    },
    AttributeSpec {
        attribute: Attribute::Sim,
        name: "SIM Type",
        kind: FieldKind::OptionalText,
        rule: ParseRule::SimGate,
    },
    AttributeSpec {
        attribute: Attribute::DisplayType,
        name: "Display Type",
        kind: FieldKind::OptionalText,
        rule: ParseRule::QuotedOrDash,
    },
    AttributeSpec {
        attribute: Attribute::DisplaySize,
        name: "Display Size",
        kind: FieldKind::Decimal,
        rule: ParseRule::LeadingNumber,
    },
    AttributeSpec {
        attribute: Attribute::DisplayResolution,
        name: "Display Resolution",
        kind: FieldKind::Text,
        rule: ParseRule::QuotedOrRaw,
    },
    AttributeSpec {
        attribute: Attribute::FeatureSensors,
        name: "Features",
        kind: FieldKind::Text,
        rule: ParseRule::QuotedOrRaw,
    },
    AttributeSpec {
        attribute: Attribute::Os,
        name: "OS",
        kind: FieldKind::OptionalText,
        rule: ParseRule::QuotedFirstComma,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_order_matches_indices() {
        for (idx, spec) in SCHEMA.iter().enumerate() {
            assert_eq!(spec.attribute.index(), idx);
            assert_eq!(Attribute::ALL[idx], spec.attribute);
        }
    }

    #[test]
    fn test_attribute_from_str() {
        assert_eq!("OEM".parse::<Attribute>().unwrap(), Attribute::Oem);
        assert_eq!("oem".parse::<Attribute>().unwrap(), Attribute::Oem);
        assert_eq!(
            "launch status".parse::<Attribute>().unwrap(),
            Attribute::LaunchStatus
        );
        assert_eq!("SIM Type".parse::<Attribute>().unwrap(), Attribute::Sim);
        assert!("battery".parse::<Attribute>().is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Attribute::Oem.to_string(), "OEM");
        assert_eq!(Attribute::FeatureSensors.to_string(), "Features");
        assert_eq!(Attribute::Os.to_string(), "OS");
    }

    #[test]
    fn test_numeric_attributes_are_decimal() {
        assert_eq!(Attribute::BodyWeight.kind(), FieldKind::Decimal);
        assert_eq!(Attribute::DisplaySize.kind(), FieldKind::Decimal);
        assert_eq!(Attribute::LaunchAnnounced.kind(), FieldKind::Year);
    }
}
