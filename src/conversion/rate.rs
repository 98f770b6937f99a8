//! The fixed BGN/EUR rate and the rounding applied to every amount

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::*;
use crate::utils::validation::validate_rate;

/// Official rate, in BGN per 1 EUR
pub const BGN_PER_EUR: &str = "1.95583";

/// Every EUR amount is compared at cent precision
pub const AMOUNT_SCALE: i64 = 2;

/// Round to cents, ties away from zero
///
/// `0.005` becomes `0.01` and `-0.005` becomes `-0.01`. This is not banker's
/// rounding, which would turn both into `0.00`.
pub fn round_half_up(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(AMOUNT_SCALE, RoundingMode::HalfUp)
}

/// How many BGN make up one EUR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BigDecimal", into = "BigDecimal")]
pub struct ConversionRate {
    bgn_per_eur: BigDecimal,
}

impl ConversionRate {
    /// Create a rate, rejecting zero and negative values
    pub fn new(bgn_per_eur: BigDecimal) -> VerifierResult<Self> {
        validate_rate(&bgn_per_eur)?;
        Ok(Self { bgn_per_eur })
    }

    /// The fixed legal rate of 1.95583 BGN per EUR
    pub fn bgn_to_eur() -> Self {
        Self {
            bgn_per_eur: BigDecimal::new(195_583.into(), 5),
        }
    }

    /// The rate as an exact decimal
    pub fn bgn_per_eur(&self) -> &BigDecimal {
        &self.bgn_per_eur
    }

    /// Convert a BGN amount to EUR, rounded half-up to cents
    ///
    /// The quotient is computed on the unscaled integers, so the result is
    /// exact however many digits the amount has. Returns `None` when the
    /// division cannot be carried out.
    pub fn convert(&self, bgn: &BigDecimal) -> Option<BigDecimal> {
        let (rate_digits, rate_scale) = self.bgn_per_eur.as_bigint_and_exponent();
        if rate_digits.sign() != Sign::Plus {
            return None;
        }
        let (bgn_digits, bgn_scale) = bgn.as_bigint_and_exponent();

        // cents = bgn_digits * 10^(rate_scale - bgn_scale + AMOUNT_SCALE) / rate_digits
        let shift = rate_scale
            .checked_sub(bgn_scale)?
            .checked_add(AMOUNT_SCALE)?;
        let (numerator, denominator) = if shift >= 0 {
            (bgn_digits * ten_pow(shift)?, rate_digits)
        } else {
            (bgn_digits, rate_digits * ten_pow(shift.checked_neg()?)?)
        };

        let quotient = &numerator / &denominator;
        let remainder = &numerator % &denominator;
        let cents = if remainder.magnitude() * 2u32 >= *denominator.magnitude() {
            match numerator.sign() {
                Sign::Minus => quotient - 1,
                _ => quotient + 1,
            }
        } else {
            quotient
        };

        Some(BigDecimal::new(cents, AMOUNT_SCALE))
    }
}

fn ten_pow(exponent: i64) -> Option<BigInt> {
    u32::try_from(exponent).ok().map(|e| BigInt::from(10).pow(e))
}

impl Default for ConversionRate {
    fn default() -> Self {
        Self::bgn_to_eur()
    }
}

impl TryFrom<BigDecimal> for ConversionRate {
    type Error = VerifierError;

    fn try_from(bgn_per_eur: BigDecimal) -> Result<Self, Self::Error> {
        Self::new(bgn_per_eur)
    }
}

impl From<ConversionRate> for BigDecimal {
    fn from(rate: ConversionRate) -> Self {
        rate.bgn_per_eur
    }
}

impl fmt::Display for ConversionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1 EUR = {} BGN", self.bgn_per_eur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fixed_rate_value() {
        let rate = ConversionRate::bgn_to_eur();
        assert_eq!(rate.bgn_per_eur(), &dec(BGN_PER_EUR));
        assert_eq!(rate, ConversionRate::default());
        assert_eq!(rate.to_string(), "1 EUR = 1.95583 BGN");
    }

    #[test]
    fn test_round_half_up_ties_away_from_zero() {
        assert_eq!(round_half_up(&dec("0.005")), dec("0.01"));
        assert_eq!(round_half_up(&dec("0.015")), dec("0.02"));
        assert_eq!(round_half_up(&dec("0.025")), dec("0.03"));
        assert_eq!(round_half_up(&dec("-0.005")), dec("-0.01"));
        assert_eq!(round_half_up(&dec("2.3449")), dec("2.34"));
        assert_eq!(round_half_up(&dec("7")), dec("7.00"));
    }

    #[test]
    fn test_round_half_up_is_idempotent() {
        for s in ["0", "0.005", "1.999", "-12.345", "51.1291", "1234567.895", "-0.0049"] {
            let once = round_half_up(&dec(s));
            let twice = round_half_up(&once);
            assert_eq!(once, twice, "rounding {s} twice changed the result");
        }
    }

    #[test]
    fn test_convert_divides_by_rate() {
        let rate = ConversionRate::bgn_to_eur();
        assert_eq!(rate.convert(&dec("1.95583")), Some(dec("1.00")));
        assert_eq!(rate.convert(&dec("100")), Some(dec("51.13")));
        assert_eq!(rate.convert(&dec("-100")), Some(dec("-51.13")));
        assert_eq!(rate.convert(&dec("0")), Some(dec("0.00")));
        assert_eq!(rate.convert(&dec("1e3")), Some(dec("511.29")));
    }

    #[test]
    fn test_convert_ties_away_from_zero() {
        let rate = ConversionRate::bgn_to_eur();
        assert_eq!(rate.convert(&dec("0.00977915")), Some(dec("0.01")));
        assert_eq!(rate.convert(&dec("-0.00977915")), Some(dec("-0.01")));
        assert_eq!(rate.convert(&dec("0.00977914")), Some(dec("0.00")));
    }

    #[test]
    fn test_convert_is_exact_for_long_amounts() {
        let rate = ConversionRate::bgn_to_eur();

        // 1.95583 * 10^110 has 116 digits, more than default division precision
        let bgn = dec(&format!("195583{}", "0".repeat(105)));
        let expected = dec(&format!("1{}", "0".repeat(110)));
        assert_eq!(rate.convert(&bgn), Some(expected.clone()));

        let just_below = &bgn - dec("0.01");
        assert_eq!(rate.convert(&just_below), Some(expected - dec("0.01")));

        assert_eq!(rate.convert(&dec("1.95583e5000")), Some(dec("1e5000")));
    }

    #[test]
    fn test_invalid_rates_rejected() {
        assert!(ConversionRate::new(BigDecimal::from(0)).is_err());
        assert!(ConversionRate::new(dec("-1.95583")).is_err());
        assert!(ConversionRate::new(dec("2")).is_ok());
    }

    #[test]
    fn test_rate_deserialization_validates() {
        let rate: ConversionRate = serde_json::from_str("\"1.95583\"").unwrap();
        assert_eq!(rate, ConversionRate::bgn_to_eur());

        let invalid: Result<ConversionRate, _> = serde_json::from_str("\"0\"");
        assert!(invalid.is_err());
    }
}
