//! Turns raw spreadsheet cells into exact decimal amounts

use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::types::*;

/// Largest decimal exponent accepted in a cell
///
/// Conversion and rounding scale amounts by `10^exponent` as exact integers,
/// so this bounds their size rather than their precision.
const MAX_EXPONENT: i64 = 10_000;

/// Characters used as thousands separators in exported price lists
const GROUP_SEPARATORS: [char; 3] = [' ', '\u{00A0}', '\u{202F}'];

/// Parse a raw cell into an exact amount
///
/// Empty cells are [`ParsedAmount::Absent`]. Text is trimmed, stripped of
/// thousands separators and read with `,` as the decimal separator, so
/// `"1 234,56"` parses to `1234.56`. Anything that is not a finite number is
/// [`ParsedAmount::Unparsable`]; this function never fails.
pub fn parse(raw: &RawCell) -> ParsedAmount {
    match raw {
        RawCell::Empty => ParsedAmount::Absent,
        RawCell::Number(value) => parse_number(*value),
        RawCell::Text(text) => parse_text(text),
    }
}

fn parse_number(value: f64) -> ParsedAmount {
    if !value.is_finite() {
        return ParsedAmount::Unparsable;
    }
    // Shortest round-trip form, so 0.1 stays 0.1 rather than its binary expansion
    decimal_from_str(&value.to_string())
}

fn parse_text(text: &str) -> ParsedAmount {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !GROUP_SEPARATORS.contains(c))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return ParsedAmount::Unparsable;
    }
    decimal_from_str(&cleaned)
}

fn decimal_from_str(s: &str) -> ParsedAmount {
    match BigDecimal::from_str(s) {
        Ok(amount) => {
            let (_, scale) = amount.as_bigint_and_exponent();
            if scale.abs() > MAX_EXPONENT {
                ParsedAmount::Unparsable
            } else {
                ParsedAmount::Value(amount)
            }
        }
        Err(_) => ParsedAmount::Unparsable,
    }
}
