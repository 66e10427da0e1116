//! Raw source rows as delivered by the CSV boundary.

use crate::attribute::{Attribute, FIELD_COUNT};
use crate::error::ModelError;

/// One already-split source row: exactly [`FIELD_COUNT`] raw string fields
/// in schema order. The width is checked once at construction so the
/// normalizer never has to guess about short or long rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow([String; FIELD_COUNT]);

impl RawRow {
    /// Wrap a split row, failing fast on any width other than
    /// [`FIELD_COUNT`].
    pub fn new(fields: Vec<String>) -> Result<Self, ModelError> {
        let found = fields.len();
        let fields: [String; FIELD_COUNT] = fields
            .try_into()
            .map_err(|_| ModelError::RowShape { found })?;
        Ok(Self(fields))
    }

    /// Build a row from string literals; fixture and test convenience.
    pub fn from_fields(fields: [&str; FIELD_COUNT]) -> Self {
        Self(fields.map(String::from))
    }

    /// The raw text of one column.
    pub fn get(&self, attribute: Attribute) -> &str {
        &self.0[attribute.index()]
    }

    /// All fields in schema order.
    pub fn fields(&self) -> &[String; FIELD_COUNT] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_and_long_rows() {
        let short = vec!["a".to_string(); FIELD_COUNT - 1];
        assert!(matches!(
            RawRow::new(short),
            Err(ModelError::RowShape { found }) if found == FIELD_COUNT - 1
        ));

        let long = vec!["a".to_string(); FIELD_COUNT + 1];
        assert!(matches!(
            RawRow::new(long),
            Err(ModelError::RowShape { found }) if found == FIELD_COUNT + 1
        ));
    }

    #[test]
    fn test_indexes_by_attribute() {
        let row = RawRow::from_fields([
            "Samsung", "Galaxy", "2022", "2022", "dims", "167 g", "Nano-SIM", "OLED", "5.8",
            "1080", "gyro", "Android",
        ]);
        assert_eq!(row.get(Attribute::Oem), "Samsung");
        assert_eq!(row.get(Attribute::BodyWeight), "167 g");
        assert_eq!(row.get(Attribute::Os), "Android");
    }
}
