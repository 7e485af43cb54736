//! Exact conversion between human-typed decimal strings and integer base
//! units.
//!
//! Conversions operate on digit strings and [`U256`] only; no floating point
//! is involved anywhere in this path, so the same input always produces the
//! same base-unit value.

use alloy_primitives::U256;

use crate::error::{Result, SwapError};

/// Parses a human-typed decimal amount into base units.
///
/// Accepts `digits` or `digits.digits`. The fractional part is right-padded
/// with zeros to exactly `decimals` digits; excess fractional precision is
/// truncated, not rounded.
///
/// # Errors
///
/// - [`SwapError::InvalidAmountFormat`] for anything outside the accepted
///   grammar (empty input, `"."`, a missing whole or fractional part, signs,
///   letters, multiple decimal points) or a value exceeding 2^256 − 1 base
///   units.
/// - [`SwapError::ZeroAmount`] when the parsed value is zero; zero-value
///   transfers are not meaningful operations and are rejected up front.
pub fn parse_amount(text: &str, decimals: u8) -> Result<U256> {
    let trimmed = text.trim();
    let invalid = || SwapError::InvalidAmountFormat {
        input: text.to_string(),
    };

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => {
            if fraction.is_empty() {
                return Err(invalid());
            }
            (whole, fraction)
        }
        None => (trimmed, ""),
    };

    if whole.is_empty()
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let decimals = decimals as usize;
    let mut padded = fraction.to_string();
    padded.truncate(decimals);
    while padded.len() < decimals {
        padded.push('0');
    }

    let amount = U256::from_str_radix(&format!("{whole}{padded}"), 10).map_err(|_| invalid())?;
    if amount.is_zero() {
        return Err(SwapError::ZeroAmount);
    }
    Ok(amount)
}

/// Formats base units as a human-readable decimal string.
///
/// The base-unit digit string is left-padded with zeros to at least
/// `decimals + 1` digits and split by position. Trailing zeros are trimmed
/// from the fraction; an all-zero fraction renders as `"0"`, so a
/// whole-number value formats as e.g. `"350.0"` and zero as `"0.0"`.
///
/// Total over all of `U256`; never fails.
pub fn format_amount(amount: U256, decimals: u8) -> String {
    let decimals = decimals as usize;
    let digits = amount.to_string();
    let padded = format!("{digits:0>width$}", width = decimals + 1);
    let split = padded.len() - decimals;
    let whole = &padded[..split];
    let fraction = padded[split..].trim_end_matches('0');

    if fraction.is_empty() {
        format!("{whole}.0")
    } else {
        format!("{whole}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.5", 18, "1500000000000000000")]
    #[case("0.1", 18, "100000000000000000")]
    #[case("1", 6, "1000000")]
    #[case("1.500", 6, "1500000")]
    #[case("350", 6, "350000000")]
    #[case("0.000001", 6, "1")]
    #[case("123", 0, "123")]
    fn parse_accepts_valid_decimals(
        #[case] input: &str,
        #[case] decimals: u8,
        #[case] expected: &str,
    ) {
        let expected = U256::from_str_radix(expected, 10).unwrap();
        assert_eq!(parse_amount(input, decimals).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("1.")]
    #[case(".5")]
    #[case("1.2.3")]
    #[case("-1")]
    #[case("+1")]
    #[case("abc")]
    #[case("1e18")]
    #[case("1,5")]
    #[case("0x10")]
    fn parse_rejects_malformed_input(#[case] input: &str) {
        assert!(matches!(
            parse_amount(input, 18).unwrap_err(),
            SwapError::InvalidAmountFormat { .. }
        ));
    }

    #[rstest]
    #[case("0", 18)]
    #[case("0.0", 18)]
    #[case("0.000", 6)]
    // Excess precision truncates to nothing: 0.0000001 at 6 decimals is zero.
    #[case("0.0000001", 6)]
    fn parse_rejects_zero(#[case] input: &str, #[case] decimals: u8) {
        assert!(matches!(
            parse_amount(input, decimals).unwrap_err(),
            SwapError::ZeroAmount
        ));
    }

    #[test]
    fn parse_truncates_excess_precision() {
        // Truncation, not rounding: the 7th fractional digit is dropped.
        assert_eq!(
            parse_amount("1.2345679", 6).unwrap(),
            U256::from(1_234_567u64)
        );
    }

    #[test]
    fn parse_is_deterministic() {
        assert_eq!(
            parse_amount("123.456", 18).unwrap(),
            parse_amount("123.456", 18).unwrap()
        );
    }

    #[test]
    fn parse_rejects_overflowing_amounts() {
        // 79 nines exceeds 2^256 - 1.
        let input = "9".repeat(79);
        assert!(matches!(
            parse_amount(&input, 0).unwrap_err(),
            SwapError::InvalidAmountFormat { .. }
        ));
    }

    #[rstest]
    #[case("1500000000000000000", 18, "1.5")]
    #[case("100000000000000000", 18, "0.1")]
    #[case("350000000", 6, "350.0")]
    #[case("0", 18, "0.0")]
    #[case("1", 6, "0.000001")]
    #[case("1000000", 6, "1.0")]
    fn format_renders_display_amounts(
        #[case] base_units: &str,
        #[case] decimals: u8,
        #[case] expected: &str,
    ) {
        let amount = U256::from_str_radix(base_units, 10).unwrap();
        assert_eq!(format_amount(amount, decimals), expected);
    }

    #[rstest]
    #[case("1.5", 18, "1.5")]
    #[case("1.500", 6, "1.5")]
    #[case("0.1", 18, "0.1")]
    #[case("42", 6, "42.0")]
    fn format_round_trips_parsed_values(
        #[case] input: &str,
        #[case] decimals: u8,
        #[case] expected: &str,
    ) {
        let amount = parse_amount(input, decimals).unwrap();
        assert_eq!(format_amount(amount, decimals), expected);
    }
}
