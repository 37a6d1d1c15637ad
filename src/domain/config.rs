// ============================================================================
// Money Configuration
// Process-wide defaults, installed once at start-up and injectable explicitly
// ============================================================================

use super::currency::Currency;
use super::money::Money;
use super::registry;
use crate::error::{MoneyError, MoneyResult};
use crate::numeric::{to_minor_units, Amount};
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static GLOBAL: OnceLock<MoneyConfig> = OnceLock::new();

/// Defaults consulted when an operation has no usable currency of its own.
///
/// Operations that depend on the default currency exist in two forms: a
/// method on `MoneyConfig` taking the configuration explicitly, and a
/// `Money` associated function that uses [`MoneyConfig::global`].
///
/// # Example
/// ```
/// use exact_money::domain::{Currency, MoneyConfig};
///
/// let config = MoneyConfig::united_states();
/// let unknown = Currency::new("XYZ", 2, "X");
/// let money = config.forge_with_currency(100, unknown);
///
/// assert_eq!(money.currency().code(), "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyConfig {
    /// Currency used for bare amounts and in place of invalid currencies
    pub default_currency: Currency,
}

impl MoneyConfig {
    /// Create a new configuration with the given default currency
    pub fn new(default_currency: Currency) -> Self {
        Self { default_currency }
    }

    /// Builder method: Set the default currency
    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }

    /// Builder method: Set the default currency by ISO code
    pub fn with_default_currency_code(self, code: &str) -> MoneyResult<Self> {
        let currency = Currency::by_iso_code(code)?;
        Ok(self.with_default_currency(currency))
    }

    /// Validate the configuration
    pub fn validate(&self) -> MoneyResult<()> {
        if !self.default_currency.is_valid() {
            return Err(MoneyError::InvalidConfig(format!(
                "default currency {:?} is not registered",
                self.default_currency.code()
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Process-wide Instance
    // ========================================================================

    /// Install this configuration for the whole process.
    ///
    /// Call it at start-up, before anything reads the global configuration.
    /// [`MoneyConfig::global`] falls back to [`MoneyConfig::default`] on first
    /// use and that choice is final, so an earlier `Money::forge`,
    /// `Money::parse`, `str::parse::<Money>` or text `scan` makes this fail.
    ///
    /// # Errors
    /// - `InvalidConfig` if validation fails
    /// - `ConfigAlreadyInstalled` on any call after the first successful one,
    ///   or after the global configuration has been read
    pub fn install(self) -> MoneyResult<()> {
        self.validate()?;
        let code = self.default_currency.code();
        GLOBAL
            .set(self)
            .map_err(|_| MoneyError::ConfigAlreadyInstalled)?;
        tracing::debug!("Installed money configuration, default currency {}", code);
        Ok(())
    }

    /// The installed configuration, or [`MoneyConfig::default`] if none was
    /// installed.
    pub fn global() -> &'static MoneyConfig {
        GLOBAL.get_or_init(MoneyConfig::default)
    }

    // ========================================================================
    // Default-currency Operations
    // ========================================================================

    /// `currency` if it is valid, otherwise the default currency.
    pub fn currency_or_default(&self, currency: Currency) -> Currency {
        if currency.is_valid() {
            return currency;
        }

        let fallback = if self.default_currency.is_valid() {
            self.default_currency
        } else {
            registry::EURO
        };
        tracing::warn!(
            "Currency {:?} is not registered, using default currency {}",
            currency.code(),
            fallback
        );
        fallback
    }

    /// Create money from minor units.
    ///
    /// An invalid currency is replaced by the default currency. This is a
    /// deliberate degradation, not an error; it is logged at `warn`.
    pub fn forge_with_currency(&self, amount: i64, currency: Currency) -> Money {
        Money::from_parts(Amount::new(amount), self.currency_or_default(currency))
    }

    /// Create money from a major-unit float at the (possibly substituted)
    /// currency's minor unit.
    ///
    /// # Errors
    /// Returns `AmountOutOfRange` if the value is not finite or does not fit.
    pub fn forge_float_with_currency(&self, amount: f64, currency: Currency) -> MoneyResult<Money> {
        let currency = self.currency_or_default(currency);
        let minor = to_minor_units(amount, currency.minor_unit_multiplier())?;
        Ok(Money::from_parts(Amount::new(minor), currency))
    }
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self::eurozone()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MoneyConfig {
    /// Euro as default currency
    pub fn eurozone() -> Self {
        Self::new(registry::EURO)
    }

    /// US Dollar as default currency
    pub fn united_states() -> Self {
        Self::new(Currency::new("USD", 2, "$"))
    }
}
