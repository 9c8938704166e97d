use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Smallest table a quiz or reference table can be built for.
pub const TABLE_MIN: u8 = 1;
/// Largest table a quiz or reference table can be built for.
pub const TABLE_MAX: u8 = 20;

/// Smallest multiplicand used in questions and reference rows.
pub const MULTIPLICAND_MIN: u8 = 1;
/// Largest multiplicand used in questions and reference rows.
pub const MULTIPLICAND_MAX: u8 = 12;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("table number must be between 1 and 20, got {provided}")]
    OutOfRange { provided: u8 },

    #[error("failed to parse table number from string")]
    NotANumber,
}

//
// ─── TABLE NUMBER ──────────────────────────────────────────────────────────────
//

/// A multiplication table selector, guaranteed to be in the range 1-20.
///
/// Constructing a `TableNumber` is the only place the table range is checked;
/// every API downstream (generator, session, storage) can rely on it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TableNumber(u8);

impl TableNumber {
    /// Creates a validated table number.
    ///
    /// # Errors
    ///
    /// Returns `TableError::OutOfRange` if `value` is outside 1-20.
    pub fn new(value: u8) -> Result<Self, TableError> {
        if !(TABLE_MIN..=TABLE_MAX).contains(&value) {
            return Err(TableError::OutOfRange { provided: value });
        }
        Ok(Self(value))
    }

    /// Returns the underlying u8 value
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Product of this table with the given multiplicand.
    #[must_use]
    pub fn product(&self, multiplicand: u8) -> u32 {
        u32::from(self.0) * u32::from(multiplicand)
    }

    /// The reference rows for this table, `1 × n` through `12 × n`.
    #[must_use]
    pub fn rows(&self) -> Vec<TableRow> {
        (MULTIPLICAND_MIN..=MULTIPLICAND_MAX)
            .map(|multiplicand| TableRow {
                multiplicand,
                product: self.product(multiplicand),
            })
            .collect()
    }
}

impl TryFrom<u8> for TableNumber {
    type Error = TableError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TableNumber> for u8 {
    fn from(table: TableNumber) -> Self {
        table.0
    }
}

impl fmt::Debug for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TableNumber({})", self.0)
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TableNumber {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u8>().map_err(|_| TableError::NotANumber)?;
        Self::new(value)
    }
}

//
// ─── REFERENCE ROW ─────────────────────────────────────────────────────────────
//

/// One row of a reference table: `table × multiplicand = product`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow {
    pub multiplicand: u8,
    pub product: u32,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        for value in TABLE_MIN..=TABLE_MAX {
            assert!(TableNumber::new(value).is_ok());
        }
    }

    #[test]
    fn rejects_out_of_range() {
        let err = TableNumber::new(0).unwrap_err();
        assert_eq!(err, TableError::OutOfRange { provided: 0 });

        let err = TableNumber::new(21).unwrap_err();
        assert_eq!(err, TableError::OutOfRange { provided: 21 });
    }

    #[test]
    fn parses_from_string_with_range_check() {
        let table: TableNumber = "7".parse().unwrap();
        assert_eq!(table.value(), 7);

        assert_eq!(
            "25".parse::<TableNumber>().unwrap_err(),
            TableError::OutOfRange { provided: 25 }
        );
        assert_eq!(
            "seven".parse::<TableNumber>().unwrap_err(),
            TableError::NotANumber
        );
    }

    #[test]
    fn rows_cover_all_multiplicands() {
        let table = TableNumber::new(9).unwrap();
        let rows = table.rows();

        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].multiplicand, 1);
        assert_eq!(rows[0].product, 9);
        assert_eq!(rows[11].multiplicand, 12);
        assert_eq!(rows[11].product, 108);
    }

    #[test]
    fn product_is_table_times_multiplicand() {
        let table = TableNumber::new(20).unwrap();
        assert_eq!(table.product(12), 240);
    }
}
