//! Core types and data structures for the price verifier

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A raw value read out of a spreadsheet cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum RawCell {
    /// The cell holds nothing
    #[default]
    Empty,
    /// The cell holds a numeric value
    Number(f64),
    /// The cell holds text, possibly a locale-formatted number
    Text(String),
}

impl RawCell {
    /// Whether the cell holds nothing
    pub fn is_empty(&self) -> bool {
        matches!(self, RawCell::Empty)
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        RawCell::Number(value)
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        RawCell::Text(value.to_string())
    }
}

impl From<String> for RawCell {
    fn from(value: String) -> Self {
        RawCell::Text(value)
    }
}

impl<T: Into<RawCell>> From<Option<T>> for RawCell {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawCell::Empty, Into::into)
    }
}

/// The outcome of parsing a single cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParsedAmount {
    /// The cell was empty
    Absent,
    /// The cell held something that is not a number
    Unparsable,
    /// An exact decimal amount
    Value(BigDecimal),
}

impl ParsedAmount {
    /// Returns the amount if one was parsed
    ///
    /// Absent and unparsable cells are equivalent for comparison purposes.
    pub fn value(&self) -> Option<&BigDecimal> {
        match self {
            ParsedAmount::Value(amount) => Some(amount),
            ParsedAmount::Absent | ParsedAmount::Unparsable => None,
        }
    }

    /// Whether an amount was parsed
    pub fn is_value(&self) -> bool {
        matches!(self, ParsedAmount::Value(_))
    }
}

impl From<BigDecimal> for ParsedAmount {
    fn from(amount: BigDecimal) -> Self {
        ParsedAmount::Value(amount)
    }
}

/// Why a cell pair could not be compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipReason {
    /// The BGN cell was empty
    MissingSource,
    /// The BGN cell could not be parsed
    UnparsableSource,
    /// The EUR cell was empty
    MissingTarget,
    /// The EUR cell could not be parsed
    UnparsableTarget,
    /// The conversion itself could not be carried out
    Computation,
}

/// Classification of one BGN/EUR cell pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComparisonResult {
    /// The given EUR amount equals the converted BGN amount
    Match { expected_eur: BigDecimal },
    /// The given EUR amount differs from the converted BGN amount
    Mismatch {
        expected_eur: BigDecimal,
        given_eur: BigDecimal,
    },
    /// No comparison could be made
    NotApplicable {
        reason: SkipReason,
        /// Converted amount, when the BGN side was usable
        expected_eur: Option<BigDecimal>,
    },
}

impl ComparisonResult {
    /// Whether the amounts agree
    pub fn is_match(&self) -> bool {
        matches!(self, ComparisonResult::Match { .. })
    }

    /// Whether the amounts disagree
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ComparisonResult::Mismatch { .. })
    }

    /// Whether the pair was skipped
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, ComparisonResult::NotApplicable { .. })
    }

    /// Expected minus given, for mismatches only
    ///
    /// Positive means the file's EUR value is lower than expected.
    pub fn difference(&self) -> Option<BigDecimal> {
        match self {
            ComparisonResult::Mismatch {
                expected_eur,
                given_eur,
            } => Some(expected_eur - given_eur),
            _ => None,
        }
    }

    /// The converted EUR amount, if the BGN side could be converted
    pub fn expected_eur(&self) -> Option<&BigDecimal> {
        match self {
            ComparisonResult::Match { expected_eur }
            | ComparisonResult::Mismatch { expected_eur, .. } => Some(expected_eur),
            ComparisonResult::NotApplicable { expected_eur, .. } => expected_eur.as_ref(),
        }
    }
}

/// A single disagreement between the two tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MismatchRecord {
    /// Data row number, 1-based (the header row is not counted)
    pub row: usize,
    /// Column name as requested by the caller
    pub column: String,
    /// BGN amount as parsed from the source table
    pub source_bgn: BigDecimal,
    /// BGN amount converted to EUR and rounded
    pub calculated_eur: BigDecimal,
    /// EUR amount from the target table, rounded
    pub given_eur: BigDecimal,
    /// `calculated_eur - given_eur`
    pub difference: BigDecimal,
}

impl MismatchRecord {
    /// Create a record, deriving the difference from the two EUR amounts
    pub fn new(
        row: usize,
        column: String,
        source_bgn: BigDecimal,
        calculated_eur: BigDecimal,
        given_eur: BigDecimal,
    ) -> Self {
        let difference = &calculated_eur - &given_eur;
        Self {
            row,
            column,
            source_bgn,
            calculated_eur,
            given_eur,
            difference,
        }
    }

    /// Row number as shown by a spreadsheet, where the header is row 1
    pub fn sheet_row(&self) -> usize {
        self.row + 1
    }
}

/// Errors that can occur around a verification run
#[derive(Debug, thiserror::Error)]
pub enum VerifierError {
    #[error("Please select at least one column to verify")]
    NoColumnsSelected,
    #[error("Invalid conversion rate: {0}")]
    InvalidRate(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Export error: {0}")]
    Export(String),
}

/// Result type for verifier operations
pub type VerifierResult<T> = Result<T, VerifierError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_raw_cell_conversions() {
        assert_eq!(RawCell::from(12.5), RawCell::Number(12.5));
        assert_eq!(RawCell::from("1,20"), RawCell::Text("1,20".to_string()));
        assert_eq!(RawCell::from(None::<f64>), RawCell::Empty);
        assert!(RawCell::default().is_empty());
    }

    #[test]
    fn test_parsed_amount_value() {
        let amount = ParsedAmount::from(BigDecimal::from(5));
        assert_eq!(amount.value(), Some(&BigDecimal::from(5)));
        assert!(ParsedAmount::Absent.value().is_none());
        assert!(ParsedAmount::Unparsable.value().is_none());
        assert_ne!(ParsedAmount::Absent, ParsedAmount::Unparsable);
    }

    #[test]
    fn test_mismatch_record_difference() {
        let record = MismatchRecord::new(
            1,
            "Price".to_string(),
            BigDecimal::from(100),
            BigDecimal::from_str("51.13").unwrap(),
            BigDecimal::from_str("51.00").unwrap(),
        );

        assert_eq!(record.difference, BigDecimal::from_str("0.13").unwrap());
        assert_eq!(record.sheet_row(), 2);
    }

    #[test]
    fn test_difference_sign_flips_when_swapped() {
        let expected = BigDecimal::from_str("51.13").unwrap();
        let given = BigDecimal::from_str("51.00").unwrap();

        let forward = ComparisonResult::Mismatch {
            expected_eur: expected.clone(),
            given_eur: given.clone(),
        };
        let swapped = ComparisonResult::Mismatch {
            expected_eur: given,
            given_eur: expected,
        };

        let d = forward.difference().unwrap();
        assert_eq!(swapped.difference().unwrap(), -d);
    }

    #[test]
    fn test_not_applicable_has_no_difference() {
        let result = ComparisonResult::NotApplicable {
            reason: SkipReason::MissingTarget,
            expected_eur: Some(BigDecimal::from(1)),
        };
        assert!(result.difference().is_none());
        assert_eq!(result.expected_eur(), Some(&BigDecimal::from(1)));
    }
}
