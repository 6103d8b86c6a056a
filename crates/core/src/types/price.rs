//! Price parsing and formatting using decimal arithmetic.
//!
//! Catalog entries carry a display-formatted price tag such as `"$15"`. The
//! numeric amount used for arithmetic is derived from that tag once, with
//! [`parse_numeric`], and formatted back for display with [`format_amount`].

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places shown for every monetary amount.
pub const DISPLAY_SCALE: u32 = 2;

/// Fractional digits kept when parsing; [`Decimal`] holds at most 28.
const MAX_FRACTION_DIGITS: usize = 28;

/// Convert a display-formatted price tag into a decimal amount.
///
/// Every character that is not an ASCII digit or `.` is stripped and the
/// remainder is parsed as a decimal. A remainder that is not a number (empty,
/// no digits, several decimal points) yields zero; a number too large for
/// [`Decimal`] saturates at [`Decimal::MAX`].
///
/// ```
/// use paradise_nursery_core::parse_numeric;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_numeric("$15"), Decimal::from(15));
/// assert_eq!(parse_numeric("$12.50"), Decimal::new(125, 1));
/// assert_eq!(parse_numeric("abc"), Decimal::ZERO);
/// ```
#[must_use]
pub fn parse_numeric(tag: &str) -> Decimal {
    let digits: String = tag
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let is_number =
        digits.chars().any(|c| c.is_ascii_digit()) && digits.matches('.').count() <= 1;
    if !is_number {
        return Decimal::ZERO;
    }

    let (whole, fraction) = digits.split_once('.').unwrap_or((&digits, ""));
    let fraction = fraction.get(..MAX_FRACTION_DIGITS).unwrap_or(fraction);

    let normalized = if fraction.is_empty() {
        format!("0{whole}")
    } else {
        format!("0{whole}.{fraction}")
    };

    // Well-formed at this point, so a parse failure means the whole part overflows
    normalized.parse::<Decimal>().unwrap_or(Decimal::MAX)
}

/// Format an amount with exactly two decimal places (e.g. `"15.00"`).
///
/// Halves round away from zero.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_SCALE);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_dollar_tag() {
        assert_eq!(parse_numeric("$15"), Decimal::from(15));
    }

    #[test]
    fn test_parse_numeric_with_cents() {
        assert_eq!(parse_numeric("$12.50"), Decimal::new(1250, 2));
    }

    #[test]
    fn test_parse_numeric_letters_only() {
        assert_eq!(parse_numeric("abc"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_numeric_empty() {
        assert_eq!(parse_numeric(""), Decimal::ZERO);
    }

    #[test]
    fn test_parse_numeric_ignores_separators_and_words() {
        assert_eq!(parse_numeric("USD 1,250"), Decimal::from(1250));
        assert_eq!(parse_numeric(" 20 dollars"), Decimal::from(20));
    }

    #[test]
    fn test_parse_numeric_several_points_is_zero() {
        assert_eq!(parse_numeric("1.2.3"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_numeric_minus_sign_is_stripped() {
        assert_eq!(parse_numeric("-$5"), Decimal::from(5));
    }

    #[test]
    fn test_parse_numeric_lone_point_is_zero() {
        assert_eq!(parse_numeric("$."), Decimal::ZERO);
    }

    #[test]
    fn test_parse_numeric_trailing_point() {
        assert_eq!(parse_numeric("$5."), Decimal::from(5));
    }

    #[test]
    fn test_parse_numeric_long_fraction_is_truncated() {
        let tag = format!("0.{}", "3".repeat(40));
        let value = parse_numeric(&tag);
        assert!(value > Decimal::new(3, 1) && value < Decimal::new(4, 1));
    }

    #[test]
    fn test_parse_numeric_too_large_saturates() {
        assert_eq!(parse_numeric("99999999999999999999999999999999"), Decimal::MAX);
        assert_eq!(parse_numeric("$1,000,000,000,000,000,000,000,000,000,000"), Decimal::MAX);
    }

    #[test]
    fn test_format_amount_pads_to_two_places() {
        assert_eq!(format_amount(Decimal::from(15)), "15.00");
        assert_eq!(format_amount(Decimal::new(125, 1)), "12.50");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(Decimal::new(10_005, 3)), "10.01");
        assert_eq!(format_amount(Decimal::new(10_004, 3)), "10.00");
    }
}
