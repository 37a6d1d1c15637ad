// ============================================================================
// Persistence Driver Values
// Reading money from, and writing it to, a storage column
// ============================================================================

use crate::domain::{Money, MoneyConfig};
use crate::error::{MoneyError, MoneyResult};

/// A value as handed over by a storage driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    Null,
    /// Minor units
    Int(i64),
    /// Canonical text, `"CODE AMOUNT"` or a bare amount
    Text(String),
    /// Major units
    Float(f64),
    Bool(bool),
    Bytes(Vec<u8>),
}

impl DriverValue {
    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Int(_) => "int64",
            DriverValue::Text(_) => "text",
            DriverValue::Float(_) => "float64",
            DriverValue::Bool(_) => "bool",
            DriverValue::Bytes(_) => "bytes",
        }
    }
}

impl From<i64> for DriverValue {
    fn from(value: i64) -> Self {
        DriverValue::Int(value)
    }
}

impl From<f64> for DriverValue {
    fn from(value: f64) -> Self {
        DriverValue::Float(value)
    }
}

impl From<&str> for DriverValue {
    fn from(value: &str) -> Self {
        DriverValue::Text(value.to_string())
    }
}

impl From<String> for DriverValue {
    fn from(value: String) -> Self {
        DriverValue::Text(value)
    }
}

impl From<bool> for DriverValue {
    fn from(value: bool) -> Self {
        DriverValue::Bool(value)
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(value: Vec<u8>) -> Self {
        DriverValue::Bytes(value)
    }
}

impl<T: Into<DriverValue>> From<Option<T>> for DriverValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DriverValue::Null, Into::into)
    }
}

impl MoneyConfig {
    /// Overwrite `target` with `value`, keeping the target's currency for
    /// bare amounts.
    ///
    /// - `Null`: no-op
    /// - `Int`: minor units in the target's currency
    /// - `Text`: parsed, with the target's currency as fallback
    /// - `Float`: major units in the target's currency
    ///
    /// `target` is left untouched on error.
    ///
    /// # Errors
    /// - `UnsupportedScanType` for `Bool` and `Bytes`
    /// - parse or range errors from the text and float paths
    pub fn scan_into(&self, target: &mut Money, value: DriverValue) -> MoneyResult<()> {
        let currency = target.currency();
        let scanned = match value {
            DriverValue::Null => return Ok(()),
            DriverValue::Int(minor) => self.forge_with_currency(minor, currency),
            DriverValue::Text(text) => self.parse_with_fallback(&text, Some(currency))?,
            DriverValue::Float(major) => self.forge_float_with_currency(major, currency)?,
            other => {
                return Err(MoneyError::UnsupportedScanType { kind: other.kind() });
            }
        };

        *target = scanned;
        Ok(())
    }

    /// Integer-only variant of [`MoneyConfig::scan_into`].
    pub fn scan_int64_into(&self, target: &mut Money, value: DriverValue) -> MoneyResult<()> {
        match value {
            DriverValue::Null => Ok(()),
            DriverValue::Int(minor) => {
                *target = self.forge_with_currency(minor, target.currency());
                Ok(())
            }
            other => Err(MoneyError::UnsupportedScanType { kind: other.kind() }),
        }
    }
}

impl Money {
    /// Read a storage value into this money. See [`MoneyConfig::scan_into`].
    pub fn scan(&mut self, value: impl Into<DriverValue>) -> MoneyResult<()> {
        MoneyConfig::global().scan_into(self, value.into())
    }

    /// Read a minor-unit integer into this money.
    pub fn scan_int64(&mut self, value: impl Into<DriverValue>) -> MoneyResult<()> {
        MoneyConfig::global().scan_int64_into(self, value.into())
    }

    /// Storage value: the minor-unit amount only. The currency has to be
    /// stored in a column of its own.
    pub fn value(&self) -> DriverValue {
        DriverValue::Int(self.int64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::{EUR, JPY, USD};

    #[test]
    fn test_value_drops_currency() {
        assert_eq!(USD(1234).value(), DriverValue::Int(1234));
        assert_eq!(JPY(1234).value(), DriverValue::Int(1234));
    }

    #[test]
    fn test_scan_int_keeps_currency() {
        let mut m = USD(0);
        m.scan(4200_i64).unwrap();
        assert_eq!(m, USD(4200));

        let mut m = JPY(0);
        m.scan_int64(15_i64).unwrap();
        assert_eq!(m, JPY(15));
    }

    #[test]
    fn test_scan_text() {
        let mut m = USD(0);
        m.scan("EUR 12").unwrap();
        assert_eq!(m, EUR(12));

        let mut m = USD(0);
        m.scan("12".to_string()).unwrap();
        assert_eq!(m, USD(12));
    }

    #[test]
    fn test_scan_float() {
        let mut m = USD(0);
        m.scan(12.345).unwrap();
        assert_eq!(m, USD(1235));
    }

    #[test]
    fn test_scan_null_is_noop() {
        let mut m = USD(77);
        m.scan(DriverValue::Null).unwrap();
        assert_eq!(m, USD(77));
        m.scan(None::<i64>).unwrap();
        assert_eq!(m, USD(77));
    }

    #[test]
    fn test_scan_unsupported() {
        let mut m = USD(77);
        let err = m.scan(true).unwrap_err();
        assert!(matches!(err, MoneyError::UnsupportedScanType { kind: "bool" }));

        let err = m.scan(vec![1_u8, 2]).unwrap_err();
        assert!(matches!(err, MoneyError::UnsupportedScanType { kind: "bytes" }));

        let err = m.scan_int64("USD 1").unwrap_err();
        assert!(matches!(err, MoneyError::UnsupportedScanType { kind: "text" }));
        assert_eq!(m, USD(77));
    }

    #[test]
    fn test_failed_scan_leaves_target() {
        let mut m = USD(77);
        assert!(m.scan("USD twelve").is_err());
        assert_eq!(m, USD(77));
    }

    #[test]
    fn test_value_scan_round_trip() {
        let stored = EUR(-9150).value();
        let mut restored = Money::zero(EUR(0).currency());
        restored.scan(stored).unwrap();
        assert_eq!(restored, EUR(-9150));
    }
}
