// ============================================================================
// Transfer Objects
// Flattened money representations for wire and storage formats
// ============================================================================

use crate::domain::{Money, MoneyConfig};
use crate::error::{MoneyError, MoneyResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Structured form of [`Money`].
///
/// `unit` is the minor-unit multiplier (`100` for EUR, `1000` for JOD).
/// Older payloads name the field `cents`; both spellings are accepted when reading. `symbol` and
/// `unit` are informational and ignored on the way in: the registry entry
/// for `currency` is authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyDto {
    pub amount: i64,
    pub currency: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub symbol: String,
    #[cfg_attr(feature = "serde", serde(default, alias = "cents"))]
    pub unit: i64,
}

impl MoneyDto {
    /// Rebuild the money value.
    ///
    /// # Errors
    /// - `InvalidMoney` if the currency code is empty
    /// - `UnknownCurrency` if the code is not registered
    pub fn extract_money(&self) -> MoneyResult<Money> {
        if self.currency.is_empty() {
            return Err(MoneyError::InvalidMoney("empty currency".to_string()));
        }
        Money::forge(self.amount, &self.currency)
    }
}

impl From<Money> for MoneyDto {
    fn from(money: Money) -> Self {
        let currency = money.currency();
        Self {
            amount: money.int64(),
            currency: currency.code().to_string(),
            symbol: currency.symbol().to_string(),
            unit: currency.minor_unit_multiplier(),
        }
    }
}

impl TryFrom<MoneyDto> for Money {
    type Error = MoneyError;

    fn try_from(dto: MoneyDto) -> Result<Self, Self::Error> {
        dto.extract_money()
    }
}

/// Money in canonical text form, `"CODE AMOUNT"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ShortDto(pub String);

impl ShortDto {
    /// Parse with the process-wide configuration.
    pub fn extract_money(&self) -> MoneyResult<Money> {
        self.extract_money_with(MoneyConfig::global())
    }

    /// Parse with an explicit configuration.
    pub fn extract_money_with(&self, config: &MoneyConfig) -> MoneyResult<Money> {
        config.parse(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Money {
    pub fn to_dto(&self) -> MoneyDto {
        MoneyDto::from(*self)
    }

    pub fn to_short_dto(&self) -> ShortDto {
        ShortDto(self.to_string())
    }
}
