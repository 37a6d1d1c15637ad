// ============================================================================
// Rounding
// Float-to-minor-unit conversion with round half away from zero
// ============================================================================

use crate::error::{MoneyError, MoneyResult};

/// 2^63, the first float above the i64 range
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// -2^63, exactly i64::MIN
const I64_LOWER_BOUND: f64 = -9_223_372_036_854_775_808.0;

/// Compute 10^n at compile time, saturating at i64::MAX
pub const fn pow10(n: u32) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result = result.saturating_mul(10);
        i += 1;
    }
    result
}

/// Round to the nearest integer, ties away from zero (`2.5 -> 3`,
/// `-2.5 -> -3`).
///
/// # Errors
/// Returns `AmountOutOfRange` for NaN, infinities and values outside i64.
#[inline]
pub fn round_half_away(value: f64) -> MoneyResult<i64> {
    if !value.is_finite() {
        return Err(MoneyError::AmountOutOfRange { value });
    }

    let rounded = value.round();
    if rounded >= I64_UPPER_BOUND || rounded < I64_LOWER_BOUND {
        return Err(MoneyError::AmountOutOfRange { value });
    }

    Ok(rounded as i64)
}

/// Convert a major-unit float into minor units at the given multiplier.
#[inline]
pub fn to_minor_units(major: f64, multiplier: i64) -> MoneyResult<i64> {
    round_half_away(major * multiplier as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), 1);
        assert_eq!(pow10(2), 100);
        assert_eq!(pow10(5), 100_000);
        assert_eq!(pow10(40), i64::MAX);
    }

    #[test]
    fn test_ties_go_away_from_zero() {
        assert_eq!(round_half_away(2.5).unwrap(), 3);
        assert_eq!(round_half_away(3.5).unwrap(), 4);
        assert_eq!(round_half_away(-2.5).unwrap(), -3);
        assert_eq!(round_half_away(2.4999).unwrap(), 2);
        assert_eq!(round_half_away(-0.4).unwrap(), 0);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            round_half_away(f64::NAN),
            Err(MoneyError::AmountOutOfRange { .. })
        ));
        assert!(round_half_away(f64::INFINITY).is_err());
        assert!(round_half_away(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_out_of_i64_range_rejected() {
        assert!(round_half_away(1e19).is_err());
        assert!(round_half_away(-1e19).is_err());
        assert_eq!(round_half_away(I64_LOWER_BOUND).unwrap(), i64::MIN);
    }

    #[test]
    fn test_to_minor_units() {
        assert_eq!(to_minor_units(1.01, 100).unwrap(), 101);
        assert_eq!(to_minor_units(0.125, 100).unwrap(), 13);
        assert_eq!(to_minor_units(-0.125, 100).unwrap(), -13);
        assert_eq!(to_minor_units(12.345, 1).unwrap(), 12);
    }
}
