// ============================================================================
// Money Errors
// Error types for currency lookup, arithmetic, conversion and codecs
// ============================================================================

use thiserror::Error;

/// Errors that can occur while building, combining, converting or
/// (de)serializing money values.
#[derive(Debug, Error)]
pub enum MoneyError {
    /// Currency code is not present in the registry
    #[error("unknown currency: {code:?}")]
    UnknownCurrency { code: String },

    /// Arithmetic between two different currencies
    #[error("can't compare or use math with different currencies: {left} and {right}")]
    CurrencyMismatch { left: String, right: String },

    /// Rate references neither the money's currency as source nor as target
    #[error(
        "money currency and rate don't match: currency {currency}, rate source {source_code}, rate target {target_code}"
    )]
    CurrencyRateMismatch {
        currency: String,
        source_code: String,
        target_code: String,
    },

    /// Malformed textual money
    #[error("money should look like `EUR 123`, given {input:?}: {reason}")]
    InvalidFormat { input: String, reason: String },

    /// Fractional part could not be sliced to the minor-unit width
    #[error("can't convert to decimal: {repr}")]
    DecimalConversion { repr: String },

    /// Persistence scan received a value shape it does not understand
    #[error("can't scan money from a {kind} value")]
    UnsupportedScanType { kind: &'static str },

    /// Deserialized object is not a usable money value
    #[error("invalid money object: {0}")]
    InvalidMoney(String),

    /// Result exceeded i64::MAX minor units
    #[error("arithmetic overflow: result exceeded maximum amount")]
    Overflow,

    /// Result below i64::MIN minor units
    #[error("arithmetic underflow: result below minimum amount")]
    Underflow,

    /// Float could not be represented as an i64 count of minor units
    #[error("amount out of range: {value} can't be expressed in minor units")]
    AmountOutOfRange { value: f64 },

    /// Exchange rates must be positive and finite
    #[error("invalid exchange rate: {rate}")]
    InvalidRate { rate: f64 },

    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The process-wide configuration can only be installed once
    #[error("money configuration already installed")]
    ConfigAlreadyInstalled,

    /// Structured text could not be encoded or decoded
    #[cfg(feature = "serde")]
    #[error("json codec error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MoneyError {
    pub(crate) fn unknown_currency(code: impl Into<String>) -> Self {
        MoneyError::UnknownCurrency { code: code.into() }
    }

    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        MoneyError::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
