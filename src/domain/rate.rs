// ============================================================================
// Exchange Rate
// Directed conversion factor between two currencies
// ============================================================================

use super::currency::Currency;
use crate::error::{MoneyError, MoneyResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `1 source = rate target`.
///
/// A rate can be applied in either direction: money in the source currency is
/// multiplied by `rate`, money in the target currency is divided by it.
///
/// # Example
/// ```
/// use exact_money::domain::{Currency, Rate};
///
/// let eur = Currency::must_by_iso_code("EUR");
/// let usd = Currency::must_by_iso_code("USD");
/// let rate = Rate::new(eur, usd, 1.1).unwrap();
///
/// assert_eq!(rate.inverse().unwrap().source(), usd);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawRate")
)]
pub struct Rate {
    source: Currency,
    target: Currency,
    rate: f64,
}

impl Rate {
    /// Create a rate.
    ///
    /// # Errors
    /// Returns `InvalidRate` unless `rate` is finite and strictly positive.
    pub fn new(source: Currency, target: Currency, rate: f64) -> MoneyResult<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(MoneyError::InvalidRate { rate });
        }

        Ok(Self {
            source,
            target,
            rate,
        })
    }

    /// Create a rate from ISO codes.
    pub fn from_codes(source: &str, target: &str, rate: f64) -> MoneyResult<Self> {
        Self::new(
            Currency::by_iso_code(source)?,
            Currency::by_iso_code(target)?,
            rate,
        )
    }

    pub const fn source(&self) -> Currency {
        self.source
    }

    pub const fn target(&self) -> Currency {
        self.target
    }

    pub const fn rate(&self) -> f64 {
        self.rate
    }

    /// The same relation seen from the other side: `target -> source` at
    /// `1 / rate`.
    ///
    /// # Errors
    /// Returns `InvalidRate` if the reciprocal is not finite, which happens
    /// for subnormal rates.
    pub fn inverse(&self) -> MoneyResult<Self> {
        Self::new(self.target, self.source, 1.0 / self.rate)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRate {
    source: Currency,
    target: Currency,
    rate: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRate> for Rate {
    type Error = MoneyError;

    fn try_from(raw: RawRate) -> Result<Self, Self::Error> {
        Rate::new(raw.source, raw.target, raw.rate)
    }
}
