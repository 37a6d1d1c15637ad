// ============================================================================
// Currency Value Object
// ISO 4217 currency definition resolved from the registry
// ============================================================================

use super::registry;
use crate::error::{MoneyError, MoneyResult};
use crate::numeric::pow10;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A currency: ISO code, minor-unit exponent and display symbol.
///
/// Instances normally come from [`Currency::by_iso_code`]. Two currencies are
/// equal when code and minor unit match; the symbol is display data only.
///
/// # Example
/// ```
/// use exact_money::domain::Currency;
///
/// let jod = Currency::by_iso_code("JOD").unwrap();
/// assert_eq!(jod.minor_unit(), 3);
/// assert_eq!(jod.minor_unit_multiplier(), 1000);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(into = "String")
)]
pub struct Currency {
    code: &'static str,
    minor_unit: u32,
    symbol: &'static str,
}

impl Currency {
    /// Build a currency definition by hand.
    ///
    /// Only definitions whose code is in the registry are valid; anything
    /// else is replaced by the default currency when forged into money.
    pub const fn new(code: &'static str, minor_unit: u32, symbol: &'static str) -> Self {
        Self {
            code,
            minor_unit,
            symbol,
        }
    }

    /// Resolve a currency by ISO code. The code must match the registry
    /// exactly: `"usd"` and `" USD "` are not registered.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the code is not registered.
    pub fn by_iso_code(code: &str) -> MoneyResult<Self> {
        registry::lookup(code).ok_or_else(|| MoneyError::unknown_currency(code))
    }

    /// Resolve a currency or panic.
    ///
    /// # Panics
    /// Panics if the code is not registered.
    pub fn must_by_iso_code(code: &str) -> Self {
        match Self::by_iso_code(code) {
            Ok(currency) => currency,
            Err(err) => panic!("{err}"),
        }
    }

    /// Every registered currency, ordered by code.
    pub fn all() -> impl Iterator<Item = Currency> {
        registry::all()
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Number of decimal digits of the minor unit (2 for cents).
    pub const fn minor_unit(&self) -> u32 {
        self.minor_unit
    }

    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// True iff the code re-resolves in the registry to the same definition.
    pub fn is_valid(&self) -> bool {
        registry::lookup(self.code).is_some_and(|registered| registered == *self)
    }

    /// `10^minor_unit`, the number of minor units in one major unit.
    pub const fn minor_unit_multiplier(&self) -> i64 {
        pow10(self.minor_unit)
    }

    /// True for currencies without a minor unit (JPY, VND, ...).
    pub const fn is_zero_decimal(&self) -> bool {
        self.minor_unit == 0
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.minor_unit == other.minor_unit
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.minor_unit.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::by_iso_code(s)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code.to_string()
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::by_iso_code(&code)
    }
}

// Deserialize via `String` + `TryFrom`; a derive would inherit a
// `'de: 'static` bound from the `&'static str` fields.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Currency::try_from(code).map_err(serde::de::Error::custom)
    }
}
