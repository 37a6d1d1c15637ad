// ============================================================================
// Canonical Text Parser
// Reads money written as "CODE AMOUNT" or a bare minor-unit amount
// ============================================================================

use crate::domain::{Currency, Money, MoneyConfig};
use crate::error::{MoneyError, MoneyResult};

impl MoneyConfig {
    /// Parse `"CODE AMOUNT"` or `"AMOUNT"`, where `AMOUNT` is a signed
    /// base-10 count of minor units.
    ///
    /// A bare amount takes `fallback` if it is valid, otherwise this
    /// configuration's default currency. Any run of whitespace separates the
    /// tokens and surrounding whitespace is ignored.
    ///
    /// # Errors
    /// - `InvalidFormat` for empty input, more than two tokens, or an amount
    ///   that is not an i64
    /// - `UnknownCurrency` if the code is not registered
    pub fn parse_with_fallback(&self, s: &str, fallback: Option<Currency>) -> MoneyResult<Money> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let (code, amount) = match tokens.as_slice() {
            [amount] => (None, *amount),
            [code, amount] => (Some(*code), *amount),
            [] => return Err(MoneyError::invalid_format(s, "empty string")),
            _ => {
                return Err(MoneyError::invalid_format(
                    s,
                    format!("expected 1 or 2 fields, found {}", tokens.len()),
                ))
            }
        };

        let amount: i64 = amount
            .parse()
            .map_err(|err| MoneyError::invalid_format(s, format!("amount {amount:?}: {err}")))?;

        let currency = match code {
            Some(code) => Currency::by_iso_code(code)?,
            None => match fallback {
                Some(currency) if currency.is_valid() => currency,
                _ => self.default_currency,
            },
        };

        tracing::trace!("Parsed {:?} as {} {}", s, currency, amount);
        Ok(self.forge_with_currency(amount, currency))
    }

    /// [`MoneyConfig::parse_with_fallback`] without a fallback currency.
    pub fn parse(&self, s: &str) -> MoneyResult<Money> {
        self.parse_with_fallback(s, None)
    }
}

impl Money {
    /// Parse with the process-wide configuration.
    pub fn parse_with_fallback(s: &str, fallback: Option<Currency>) -> MoneyResult<Money> {
        MoneyConfig::global().parse_with_fallback(s, fallback)
    }

    /// Parse with the process-wide configuration and no fallback.
    pub fn parse(s: &str) -> MoneyResult<Money> {
        MoneyConfig::global().parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::{EUR, GBP, USD};

    #[test]
    fn test_parse_errors() {
        let config = MoneyConfig::eurozone();

        for input in ["123 123", "eur 7", "Usd 12"] {
            assert!(
                matches!(config.parse(input), Err(MoneyError::UnknownCurrency { .. })),
                "{input:?} should name an unknown currency"
            );
        }

        for input in ["a", "USD 12.12", "USD 12,12", "  EUR   123 today", "", "   "] {
            assert!(
                matches!(config.parse(input), Err(MoneyError::InvalidFormat { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_ok() {
        let config = MoneyConfig::eurozone();
        let cases = [
            ("0", EUR(0)),
            ("EUR 123", EUR(123)),
            ("  EUR   123  ", EUR(123)),
            ("USD 21312312312312323", USD(21312312312312323)),
            ("3324", EUR(3324)),
            ("EUR -42", EUR(-42)),
        ];

        for (input, want) in cases {
            assert_eq!(config.parse(input).unwrap(), want, "{input:?}");
        }
    }

    #[test]
    fn test_parse_fallback() {
        let config = MoneyConfig::eurozone();
        let gbp = GBP(0).currency();

        assert_eq!(config.parse_with_fallback("12", Some(gbp)).unwrap(), GBP(12));
        // explicit code beats the fallback
        assert_eq!(config.parse_with_fallback("USD 12", Some(gbp)).unwrap(), USD(12));
        // invalid fallback uses the default
        let bogus = Currency::new("XYZ", 2, "X");
        assert_eq!(config.parse_with_fallback("12", Some(bogus)).unwrap(), EUR(12));
    }

    #[test]
    fn test_parse_uses_injected_default() {
        let config = MoneyConfig::united_states();
        assert_eq!(config.parse("99").unwrap(), USD(99));
    }

    #[test]
    fn test_parse_display_round_trip() {
        for money in [EUR(0), EUR(-1), USD(i64::MAX), GBP(i64::MIN)] {
            assert_eq!(Money::parse(&money.to_string()).unwrap(), money);
        }
    }
}
