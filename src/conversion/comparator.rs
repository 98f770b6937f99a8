//! Classifies a BGN amount and an EUR amount as matching or not

use bigdecimal::BigDecimal;

use crate::conversion::rate::{round_half_up, ConversionRate};
use crate::types::*;

/// Checks EUR amounts against BGN amounts at a given rate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyComparator {
    rate: ConversionRate,
}

impl CurrencyComparator {
    /// Create a comparator for the given rate
    pub fn new(rate: ConversionRate) -> Self {
        Self { rate }
    }

    /// Rate used for every conversion
    pub fn rate(&self) -> &ConversionRate {
        &self.rate
    }

    /// The EUR amount a BGN amount should be listed at, rounded to cents
    pub fn expected_eur(&self, bgn: &BigDecimal) -> Option<BigDecimal> {
        self.rate.convert(bgn)
    }

    /// Compare one pair of parsed cells
    ///
    /// A pair without a usable BGN amount is never flagged, whatever the EUR
    /// side holds. A usable BGN amount with no EUR amount is not applicable
    /// either, but the expected EUR amount is still reported.
    pub fn compare(&self, bgn: &ParsedAmount, eur: &ParsedAmount) -> ComparisonResult {
        let source = match bgn {
            ParsedAmount::Value(amount) => amount,
            ParsedAmount::Absent => return not_applicable(SkipReason::MissingSource, None),
            ParsedAmount::Unparsable => {
                return not_applicable(SkipReason::UnparsableSource, None)
            }
        };

        let Some(expected_eur) = self.expected_eur(source) else {
            return not_applicable(SkipReason::Computation, None);
        };

        let given_eur = match eur {
            ParsedAmount::Value(amount) => round_half_up(amount),
            ParsedAmount::Absent => {
                return not_applicable(SkipReason::MissingTarget, Some(expected_eur))
            }
            ParsedAmount::Unparsable => {
                return not_applicable(SkipReason::UnparsableTarget, Some(expected_eur))
            }
        };

        if expected_eur == given_eur {
            ComparisonResult::Match { expected_eur }
        } else {
            ComparisonResult::Mismatch {
                expected_eur,
                given_eur,
            }
        }
    }
}

fn not_applicable(reason: SkipReason, expected_eur: Option<BigDecimal>) -> ComparisonResult {
    ComparisonResult::NotApplicable {
        reason,
        expected_eur,
    }
}
