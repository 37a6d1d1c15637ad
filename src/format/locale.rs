// ============================================================================
// Locale Formatter
// Digit grouping and decimal separators for common locales
// ============================================================================

use crate::interfaces::DecimalFormatter;

/// Separators used by a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    pub group: &'static str,
    pub decimal: &'static str,
}

const COMMA_DOT: Separators = Separators {
    group: ",",
    decimal: ".",
};

const DOT_COMMA: Separators = Separators {
    group: ".",
    decimal: ",",
};

const SPACE_COMMA: Separators = Separators {
    group: "\u{a0}",
    decimal: ",",
};

const APOSTROPHE_DOT: Separators = Separators {
    group: "\u{2019}",
    decimal: ".",
};

/// Built-in [`DecimalFormatter`] grouping thousands by three.
///
/// Unknown locales fall back to `en` conventions.
///
/// # Example
/// ```
/// use exact_money::format::LocaleFormatter;
/// use exact_money::interfaces::DecimalFormatter;
///
/// assert_eq!(LocaleFormatter.format(1234.5, "it"), "1.234,500000");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleFormatter;

impl LocaleFormatter {
    /// Separators for a locale tag. Region-specific rules win over the
    /// language (`de-CH` differs from `de`).
    pub fn separators(locale: &str) -> Separators {
        let tag = locale.trim().replace('_', "-").to_ascii_lowercase();

        match tag.as_str() {
            "de-ch" | "it-ch" | "fr-ch" | "rm-ch" => return APOSTROPHE_DOT,
            "es-mx" | "es-us" | "pt-tl" | "en-za" => return COMMA_DOT,
            _ => {}
        }

        let language = tag.split('-').next().unwrap_or_default();
        match language {
            "it" | "de" | "es" | "pt" | "nl" | "id" | "tr" | "da" | "el" | "ro" | "hr"
            | "sl" | "sr" | "vi" | "is" => DOT_COMMA,
            "ru" | "fr" | "pl" | "cs" | "sk" | "sv" | "nb" | "no" | "fi" | "uk" | "hu"
            | "bg" | "lt" | "lv" | "et" | "be" | "kk" => SPACE_COMMA,
            _ => COMMA_DOT,
        }
    }
}

impl DecimalFormatter for LocaleFormatter {
    fn format(&self, value: f64, locale: &str) -> String {
        let separators = Self::separators(locale);
        let plain = format!("{:.6}", value.abs());
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

        let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 1);
        if value.is_sign_negative() && value != 0.0 {
            out.push('-');
        }
        out.push_str(&group_digits(integer, separators.group));
        out.push_str(separators.decimal);
        out.push_str(fraction);
        out
    }

    fn name(&self) -> &str {
        "locale"
    }
}

/// Insert `group` between every three digits counted from the right.
fn group_digits(digits: &str, group: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * group.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(group);
        }
        out.push(ch);
    }
    out
}
