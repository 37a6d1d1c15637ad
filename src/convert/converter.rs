// ============================================================================
// Currency Converter
// Applies an exchange rate to money in either direction of the rate
// ============================================================================

use crate::domain::{Currency, Money, Rate};
use crate::error::{MoneyError, MoneyResult};
use crate::numeric::{to_minor_units, Amount};

/// How a rate relates to the money being converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Rate maps the money's currency onto itself
    Identity,
    /// Money is in the rate's source currency: multiply
    Forward,
    /// Money is in the rate's target currency: divide
    Reverse,
}

impl Direction {
    /// Work out which way `rate` applies to money in `currency`.
    ///
    /// # Errors
    /// Returns `CurrencyRateMismatch` if the currency is on neither side.
    pub fn resolve(currency: Currency, rate: &Rate) -> MoneyResult<Self> {
        if rate.source() == currency && rate.target() == currency {
            Ok(Direction::Identity)
        } else if rate.source() == currency {
            Ok(Direction::Forward)
        } else if rate.target() == currency {
            Ok(Direction::Reverse)
        } else {
            Err(MoneyError::CurrencyRateMismatch {
                currency: currency.code().to_string(),
                source_code: rate.source().code().to_string(),
                target_code: rate.target().code().to_string(),
            })
        }
    }
}

/// Convert `money` with `rate`.
///
/// Forward: `round(money * rate * target_multiplier)` in the target currency.
/// Reverse: `round(money / rate * source_multiplier)` in the source currency.
/// Rounding is half away from zero.
///
/// # Errors
/// - `CurrencyRateMismatch` if the money's currency is not part of the rate
/// - `UnknownCurrency` if the resulting currency is not registered
/// - `AmountOutOfRange` if the result does not fit i64 minor units
pub fn convert_to(money: &Money, rate: &Rate) -> MoneyResult<Money> {
    let direction = Direction::resolve(money.currency(), rate)?;

    let (currency, major) = match direction {
        Direction::Identity => return Ok(*money),
        Direction::Forward => (rate.target(), money.to_float() * rate.rate()),
        Direction::Reverse => (rate.source(), money.to_float() / rate.rate()),
    };

    if !currency.is_valid() {
        return Err(MoneyError::unknown_currency(currency.code()));
    }

    let minor = to_minor_units(major, currency.minor_unit_multiplier())?;
    let converted = Money::from_parts(Amount::new(minor), currency);

    tracing::debug!(
        "Converted {} to {} ({:?} at {})",
        money,
        converted,
        direction,
        rate.rate()
    );

    Ok(converted)
}

impl Money {
    /// Convert into the other currency of `rate`. See [`convert_to`].
    pub fn convert_to(&self, rate: &Rate) -> MoneyResult<Money> {
        convert_to(self, rate)
    }
}
