//! Monetary amount parsing and formatting
//!
//! The surrounding forms and fixtures carry amounts as locale strings with
//! `,` as the decimal separator (`"45,00"`). This module owns the
//! conversion between that convention and `Decimal`, and the coercion of
//! free-text quantities. Parsing never fails: malformed input degrades to
//! zero (or one, for quantities), so the calculators stay total.
//!
//! Uses rust_decimal for precision calculations.

use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Parse a comma-decimal amount string into a `Decimal`.
///
/// Strips all whitespace, replaces the first `,` with `.`, then parses.
/// Anything unparseable yields `0`. Never panics.
pub fn parse_amount(raw: &str) -> Decimal {
    let normalized: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized = normalized.replacen(',', ".", 1);
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .unwrap_or_default()
}

/// Format a `Decimal` as a comma-decimal amount string with 2 decimals.
///
/// `1234.5` renders as `"1234,50"`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_money(value);
    format!("{:.2}", rounded).replace('.', ",")
}

/// Round a monetary value to display precision (2 decimal places, half-up)
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Coerce a free-text quantity into a positive integer.
///
/// Non-digit characters are stripped before parsing ("2 vnt" is 2);
/// unparseable input defaults to 1; the result is floored at 1.
pub fn parse_quantity(raw: &str) -> u32 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<u32>().unwrap_or(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).expect("literal decimal")
    }

    // ==================== Parsing ====================

    #[test]
    fn test_parse_comma_decimal() {
        assert_eq!(parse_amount("45,00"), dec("45.00"));
        assert_eq!(parse_amount("1234,5"), dec("1234.5"));
        assert_eq!(parse_amount("0,01"), dec("0.01"));
    }

    #[test]
    fn test_parse_strips_whitespace() {
        assert_eq!(parse_amount(" 1 234,56 "), dec("1234.56"));
    }

    #[test]
    fn test_parse_accepts_dot_decimal() {
        assert_eq!(parse_amount("45.00"), dec("45.00"));
    }

    #[test]
    fn test_parse_malformed_degrades_to_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount("1,2,3"), Decimal::ZERO);
        assert_eq!(parse_amount("–"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_negative_preserved() {
        // Clamping to zero is the calculators' job, not the parser's
        assert_eq!(parse_amount("-5,00"), dec("-5.00"));
    }

    // ==================== Formatting ====================

    #[test]
    fn test_format_pads_to_two_decimals() {
        assert_eq!(format_amount(dec("1234.5")), "1234,50");
        assert_eq!(format_amount(dec("0")), "0,00");
    }

    #[test]
    fn test_format_rounds_half_up() {
        assert_eq!(format_amount(dec("10.005")), "10,01");
        assert_eq!(format_amount(dec("8.264462")), "8,26");
    }

    #[test]
    fn test_round_trip_two_decimal_amounts() {
        for raw in ["0,00", "0,01", "45,00", "1234,56", "999999999999,99"] {
            let parsed = parse_amount(raw);
            assert_eq!(parse_amount(&format_amount(parsed)), parsed);
            assert_eq!(format_amount(parsed), raw.replace(" ", ""));
        }
    }

    // ==================== Quantity ====================

    #[test]
    fn test_quantity_parses_digits() {
        assert_eq!(parse_quantity("2"), 2);
        assert_eq!(parse_quantity("2 vnt"), 2);
        assert_eq!(parse_quantity(" 10 "), 10);
    }

    #[test]
    fn test_quantity_floors_at_one() {
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
    }
}
