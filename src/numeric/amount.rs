// ============================================================================
// Amount
// Exact signed count of minor currency units
// ============================================================================

use crate::error::{MoneyError, MoneyResult};
use std::fmt;
use std::ops::Neg;

/// Exact signed count of minor units (cents, fils, ...).
///
/// An `Amount` carries no currency; it only means something once paired with
/// one inside a [`Money`](crate::domain::Money). The unit is
/// `10^-minor_unit` of the currency's major unit.
///
/// # Value Range
/// - Minimum: `i64::MIN` minor units
/// - Maximum: `i64::MAX` minor units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Zero minor units
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable amount
    pub const MIN: Self = Self(i64::MIN);

    #[inline]
    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// The raw count of minor units.
    #[inline]
    pub const fn int64(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Whole major units, truncated toward zero.
    #[inline]
    pub const fn major_part(self, multiplier: i64) -> i64 {
        self.0 / multiplier
    }

    /// Remaining minor units as a positive value.
    #[inline]
    pub const fn minor_part(self, multiplier: i64) -> u64 {
        (self.0 % multiplier).unsigned_abs()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> MoneyResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > 0 {
                MoneyError::Overflow
            } else {
                MoneyError::Underflow
            }
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> MoneyResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < 0 {
                MoneyError::Overflow
            } else {
                MoneyError::Underflow
            }
        })
    }
}

impl Neg for Amount {
    type Output = Self;

    // i64::MIN saturates instead of panicking
    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.saturating_neg())
    }
}

impl From<i64> for Amount {
    #[inline]
    fn from(minor_units: i64) -> Self {
        Self(minor_units)
    }
}

impl From<Amount> for i64 {
    #[inline]
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Amount::ZERO.int64(), 0);
        assert_eq!(Amount::MAX.int64(), i64::MAX);
        assert_eq!(Amount::MIN.int64(), i64::MIN);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn test_parts() {
        let a = Amount::new(12345);
        assert_eq!(a.major_part(100), 123);
        assert_eq!(a.minor_part(100), 45);

        let neg = Amount::new(-12345);
        assert_eq!(neg.major_part(100), -123);
        assert_eq!(neg.minor_part(100), 45);

        let yen = Amount::new(12345);
        assert_eq!(yen.major_part(1), 12345);
        assert_eq!(yen.minor_part(1), 0);
    }

    #[test]
    fn test_checked_add() {
        let a = Amount::new(100);
        let b = Amount::new(50);
        assert_eq!(a.checked_add(b).unwrap().int64(), 150);

        let result = Amount::MAX.checked_add(Amount::new(1));
        assert!(matches!(result, Err(MoneyError::Overflow)));

        let result = Amount::MIN.checked_add(Amount::new(-1));
        assert!(matches!(result, Err(MoneyError::Underflow)));
    }

    #[test]
    fn test_checked_sub() {
        let a = Amount::new(100);
        let b = Amount::new(30);
        assert_eq!(a.checked_sub(b).unwrap().int64(), 70);
        assert_eq!(b.checked_sub(a).unwrap().int64(), -70);

        let result = Amount::MIN.checked_sub(Amount::new(1));
        assert!(matches!(result, Err(MoneyError::Underflow)));

        let result = Amount::MAX.checked_sub(Amount::new(-1));
        assert!(matches!(result, Err(MoneyError::Overflow)));
    }

    #[test]
    fn test_negation() {
        assert_eq!((-Amount::new(100)).int64(), -100);
        assert_eq!((-Amount::MIN).int64(), i64::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(-42).to_string(), "-42");
    }
}
