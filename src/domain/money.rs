// ============================================================================
// Money Value Object
// An exact minor-unit amount paired with its currency
// ============================================================================

use super::config::MoneyConfig;
use super::currency::Currency;
use crate::error::{MoneyError, MoneyResult};
use crate::numeric::Amount;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monetary value: an exact count of minor units in a registered currency.
///
/// `Money` is an immutable `Copy` value. Its currency is always resolvable in
/// the registry: constructors that receive an unknown currency substitute the
/// configured default (see [`MoneyConfig::forge_with_currency`]).
///
/// # Example
/// ```
/// use exact_money::domain::Money;
///
/// let price = Money::forge(1999, "EUR").unwrap();
/// let shipping = Money::forge_float(4.5, "EUR").unwrap();
/// let total = price.add(&shipping).unwrap();
///
/// assert_eq!(total.int64(), 2449);
/// assert_eq!(total.to_string(), "EUR 2449");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "crate::codec::MoneyDto", try_from = "crate::codec::MoneyDto")
)]
pub struct Money {
    amount: Amount,
    currency: Currency,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Assemble money from parts that are already known to be valid.
    #[inline]
    pub(crate) const fn from_parts(amount: Amount, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create money from a count of minor units and an ISO code.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the code is not registered.
    pub fn forge(amount: i64, code: &str) -> MoneyResult<Self> {
        let currency = Currency::by_iso_code(code)?;
        Ok(Self::forge_with_currency(amount, currency))
    }

    /// Create money from a major-unit float, rounding half away from zero at
    /// the currency's minor unit.
    ///
    /// # Errors
    /// - `UnknownCurrency` if the code is not registered
    /// - `AmountOutOfRange` if the value is not finite or does not fit i64
    pub fn forge_float(amount: f64, code: &str) -> MoneyResult<Self> {
        let currency = Currency::by_iso_code(code)?;
        Self::forge_float_with_currency(amount, currency)
    }

    /// Create money with an explicit currency, using the process-wide
    /// configuration.
    ///
    /// An invalid currency is silently replaced by the configured default
    /// currency (a warning is logged).
    pub fn forge_with_currency(amount: i64, currency: Currency) -> Self {
        MoneyConfig::global().forge_with_currency(amount, currency)
    }

    /// Float counterpart of [`Money::forge_with_currency`].
    pub fn forge_float_with_currency(amount: f64, currency: Currency) -> MoneyResult<Self> {
        MoneyConfig::global().forge_float_with_currency(amount, currency)
    }

    /// Forge or panic.
    ///
    /// # Panics
    /// Panics if the code is not registered.
    pub fn must_forge(amount: i64, code: &str) -> Self {
        match Self::forge(amount, code) {
            Ok(money) => money,
            Err(err) => panic!("{err}"),
        }
    }

    /// Forge from a float or panic.
    ///
    /// # Panics
    /// Panics if the code is not registered or the amount is out of range.
    pub fn must_forge_float(amount: f64, code: &str) -> Self {
        match Self::forge_float(amount, code) {
            Ok(money) => money,
            Err(err) => panic!("{err}"),
        }
    }

    /// Zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::forge_with_currency(0, currency)
    }

    /// Create money from an exact decimal in major units, rounding half away
    /// from zero at the currency's minor unit.
    ///
    /// # Errors
    /// - `UnknownCurrency` if the code is not registered
    /// - `Overflow`/`Underflow` if the result does not fit i64 minor units
    pub fn from_decimal(amount: Decimal, code: &str) -> MoneyResult<Self> {
        let currency = Currency::by_iso_code(code)?;
        let rounded =
            amount.round_dp_with_strategy(currency.minor_unit(), RoundingStrategy::MidpointAwayFromZero);
        let out_of_range = if amount.is_sign_negative() {
            MoneyError::Underflow
        } else {
            MoneyError::Overflow
        };

        let minor = rounded
            .checked_mul(Decimal::from(currency.minor_unit_multiplier()))
            .and_then(|scaled| scaled.to_i64())
            .ok_or(out_of_range)?;

        Ok(Self::from_parts(Amount::new(minor), currency))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    #[inline]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// The amount as a raw count of minor units.
    #[inline]
    pub const fn int64(&self) -> i64 {
        self.amount.int64()
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    /// Minor units per major unit of this money's currency.
    #[inline]
    pub const fn minor_unit_multiplier(&self) -> i64 {
        self.currency.minor_unit_multiplier()
    }

    /// Major-unit float value. Exactly `0.0` for a zero amount.
    pub fn to_float(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        self.amount.int64() as f64 / self.minor_unit_multiplier() as f64
    }

    /// Exact major-unit decimal, scaled to the currency's minor unit.
    pub fn to_decimal(&self) -> Decimal {
        // registry minor units never exceed 5, well inside Decimal's 28
        Decimal::new(self.amount.int64(), self.currency.minor_unit())
    }

    /// Exact major-unit string keeping the minor-unit width
    /// (`JOD 1000 -> "1.000"`, `VND 1011 -> "1011"`).
    pub fn amount_as_string(&self) -> String {
        self.to_decimal().to_string()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    fn ensure_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            })
        }
    }

    /// Sum of two amounts in the same currency.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if the currencies differ
    /// - `Overflow`/`Underflow` if the sum leaves the i64 range
    pub fn add(&self, addendum: &Money) -> MoneyResult<Money> {
        self.ensure_same_currency(addendum)?;
        let amount = self.amount.checked_add(addendum.amount)?;
        Ok(Self::from_parts(amount, self.currency))
    }

    /// Difference of two amounts in the same currency.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if the currencies differ
    /// - `Overflow`/`Underflow` if the difference leaves the i64 range
    pub fn subtract(&self, subtrahend: &Money) -> MoneyResult<Money> {
        self.ensure_same_currency(subtrahend)?;
        let amount = self.amount.checked_sub(subtrahend.amount)?;
        Ok(Self::from_parts(amount, self.currency))
    }

    /// `percent`% of this amount, re-rounded at the minor unit.
    ///
    /// Goes through the major-unit float, so chaining calls can drift by up
    /// to half a minor unit per call.
    pub fn percent_off(&self, percent: i64) -> MoneyResult<Money> {
        self.percent_off_float(percent as f64)
    }

    /// Fractional-percent variant of [`Money::percent_off`].
    pub fn percent_off_float(&self, percent: f64) -> MoneyResult<Money> {
        let share = self.to_float() * (percent / 100.0);
        Self::forge_float_with_currency(share, self.currency)
    }

    // ========================================================================
    // Decomposition
    // ========================================================================

    /// Split into whole major units and the minor-unit digits.
    ///
    /// The minor part is read from the decimal rendering of the float value,
    /// rounded to exactly minor-unit width, with trailing zeros dropped, so `123.45 -> (123,
    /// 45)`, `1234.50 -> (1234, 5)` and CLF `0.00123 -> (0, 123)`. The sign
    /// stays on the major part.
    ///
    /// # Errors
    /// Returns `DecimalConversion` when float imprecision makes the fraction
    /// round up to a whole unit (only reachable beyond 2^53 minor units).
    pub fn split_major_and_minor(&self) -> MoneyResult<(i64, u64)> {
        let (major, digits) = self.split_digits()?;
        if digits.is_empty() {
            return Ok((major, 0));
        }

        let minor = digits
            .parse::<u64>()
            .map_err(|_| MoneyError::DecimalConversion { repr: digits })?;
        Ok((major, minor))
    }

    /// Major part and the significant minor-unit digits as text.
    pub(crate) fn split_digits(&self) -> MoneyResult<(i64, String)> {
        let value = self.to_float();
        let whole = value.trunc();
        let fraction = (value - whole).abs();
        let major = whole as i64;

        if fraction <= 0.0 {
            return Ok((major, String::new()));
        }

        let width = self.currency.minor_unit() as usize;
        let repr = format!("{fraction:.width$}");
        let digits = repr
            .strip_prefix("0.")
            .filter(|digits| digits.len() == width)
            .ok_or_else(|| MoneyError::DecimalConversion { repr: repr.clone() })?;

        Ok((major, digits.trim_end_matches('0').to_string()))
    }
}

/// Canonical textual form: `"CODE AMOUNT"`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoneyConfig::global().parse(s)
    }
}
