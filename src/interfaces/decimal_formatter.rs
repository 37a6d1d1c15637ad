// ============================================================================
// Decimal Formatter Interface
// Contract for locale-aware rendering of major-unit amounts
// ============================================================================

/// Renders a major-unit float as locale-grouped text.
///
/// Implementations must print six fractional digits after the locale's
/// decimal separator (`1234.56 -> "1,234.560000"` for `en`). Display code
/// cuts the fraction back to the currency's significant digits, locating it
/// by the last `.` or `,` in the output.
pub trait DecimalFormatter: Send + Sync {
    /// Format `value` for `locale` (a BCP 47 style tag such as `it` or
    /// `de-CH`)
    fn format(&self, value: f64, locale: &str) -> String;

    /// Get the formatter name for logging
    fn name(&self) -> &str;
}

/// Formatter without grouping that ignores the locale
pub struct PlainFormatter;

impl DecimalFormatter for PlainFormatter {
    fn format(&self, value: f64, _locale: &str) -> String {
        format!("{value:.6}")
    }

    fn name(&self) -> &str {
        "plain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_formatter() {
        let formatter = PlainFormatter;
        assert_eq!(formatter.format(1234.56, "it"), "1234.560000");
        assert_eq!(formatter.format(-0.5, "en"), "-0.500000");
        assert_eq!(formatter.name(), "plain");
    }
}
