// ============================================================================
// Display Formatting
// Human-readable, locale-grouped money rendering
// ============================================================================

use super::locale::LocaleFormatter;
use crate::domain::Money;
use crate::error::MoneyResult;
use crate::interfaces::DecimalFormatter;

/// Locale-grouped amount using `formatter`, cut to the significant minor
/// digits (`EUR 1234.00 -> "1,234"`, `EUR 1234.50 -> "1,234.5"`).
///
/// # Errors
/// Returns `DecimalConversion` if the minor digits can't be extracted.
pub fn display_amount_with(
    money: &Money,
    formatter: &dyn DecimalFormatter,
    locale: &str,
) -> MoneyResult<String> {
    let (_, digits) = money.split_digits()?;
    let mut formatted = formatter.format(money.to_float(), locale);
    tracing::trace!("Formatted {} as {:?} ({}, {})", money, formatted, formatter.name(), locale);

    let Some(separator) = formatted.rfind(['.', ',']) else {
        return Ok(formatted);
    };

    let end = if digits.is_empty() {
        separator
    } else {
        (separator + 1 + digits.len()).min(formatted.len())
    };
    formatted.truncate(end);
    Ok(formatted)
}

/// [`display_amount_with`] using the built-in [`LocaleFormatter`].
pub fn display_amount(money: &Money, locale: &str) -> MoneyResult<String> {
    display_amount_with(money, &LocaleFormatter, locale)
}

/// Amount prefixed with the currency symbol: `"€ 1.234,56"`.
pub fn display(money: &Money, locale: &str) -> MoneyResult<String> {
    let amount = display_amount(money, locale)?;
    Ok(format!("{} {}", money.currency().symbol(), amount))
}

/// Amount prefixed with the ISO code: `"EUR 1.234,56"`.
pub fn display_iso(money: &Money, locale: &str) -> MoneyResult<String> {
    let amount = display_amount(money, locale)?;
    Ok(format!("{} {}", money.currency().code(), amount))
}

/// [`display`] or panic.
///
/// # Panics
/// Panics if the minor digits can't be extracted.
pub fn must_display(money: &Money, locale: &str) -> String {
    match display(money, locale) {
        Ok(formatted) => formatted,
        Err(err) => panic!("{err}"),
    }
}
