// ============================================================================
// Currency Registry
// Static ISO 4217 reference table keyed by alphabetic code
// ============================================================================
//
// Read-only for the lifetime of the process. The index is built lazily on
// first lookup and shared by every caller.

use super::currency::Currency;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Euro, the built-in default currency.
pub const EURO: Currency = Currency::new("EUR", 2, "\u{20ac}");

static INDEX: LazyLock<HashMap<&'static str, Currency>> = LazyLock::new(|| {
    CURRENCIES
        .iter()
        .map(|currency| (currency.code(), *currency))
        .collect()
});

/// Look a currency up by its exact (upper-case) ISO code.
pub(crate) fn lookup(code: &str) -> Option<Currency> {
    INDEX.get(code).copied()
}

/// Every registered currency, ordered by code.
pub(crate) fn all() -> impl Iterator<Item = Currency> {
    CURRENCIES.iter().copied()
}

pub(crate) static CURRENCIES: &[Currency] = &[
    Currency::new("AED", 2, ".\u{62f}.\u{625}"),
    Currency::new("AFN", 2, "\u{60b}"),
    Currency::new("ALL", 2, "Lek"),
    Currency::new("AMD", 2, "\u{564}\u{580}."),
    Currency::new("ANG", 2, "\u{192}"),
    Currency::new("AOA", 2, "Kz"),
    Currency::new("ARS", 2, "$"),
    Currency::new("AUD", 2, "A$"),
    Currency::new("AWG", 2, "\u{192}"),
    Currency::new("AZN", 2, "\u{20bc}"),
    Currency::new("BAM", 2, "KM"),
    Currency::new("BBD", 2, "Bds$"),
    Currency::new("BDT", 2, "\u{9f3}"),
    Currency::new("BGN", 2, "\u{43b}\u{432}"),
    Currency::new("BHD", 3, ".\u{62f}.\u{628}"),
    Currency::new("BIF", 0, "FBu"),
    Currency::new("BMD", 2, "BD$"),
    Currency::new("BND", 2, "B$"),
    Currency::new("BOB", 2, "Bs."),
    Currency::new("BRL", 2, "R$"),
    Currency::new("BSD", 2, "B$"),
    Currency::new("BTN", 2, "Nu."),
    Currency::new("BWP", 2, "P"),
    Currency::new("BYN", 2, "Br"),
    Currency::new("BZD", 2, "BZ$"),
    Currency::new("CAD", 2, "CAD$"),
    Currency::new("CDF", 2, "FC"),
    Currency::new("CHF", 2, "CHF"),
    Currency::new("CLF", 5, "UF"),
    Currency::new("CLP", 0, "CLP$"),
    Currency::new("CNY", 2, "\u{5143}"),
    Currency::new("COP", 2, "COP$"),
    Currency::new("CRC", 2, "\u{20a1}"),
    Currency::new("CUC", 2, "CUC$"),
    Currency::new("CUP", 2, "$MN"),
    Currency::new("CVE", 2, "Esc"),
    Currency::new("CZK", 2, "K\u{10d}"),
    Currency::new("DJF", 0, "Fdj"),
    Currency::new("DKK", 2, "kr"),
    Currency::new("DOP", 2, "RD$"),
    Currency::new("DZD", 2, ".\u{62f}.\u{62c}"),
    Currency::new("EGP", 2, "\u{a3}"),
    Currency::new("ERN", 2, "Nfk"),
    Currency::new("ETB", 2, "Br"),
    Currency::new("EUR", 2, "\u{20ac}"),
    Currency::new("FJD", 2, "FJ$"),
    Currency::new("FKP", 2, "\u{a3}"),
    Currency::new("GBP", 2, "\u{a3}"),
    Currency::new("GEL", 2, "\u{10da}"),
    Currency::new("GGP", 2, "\u{a3}"),
    Currency::new("GHS", 2, "\u{20b5}"),
    Currency::new("GIP", 2, "\u{a3}"),
    Currency::new("GMD", 2, "D"),
    Currency::new("GNF", 0, "FG"),
    Currency::new("GTQ", 2, "Q"),
    Currency::new("GYD", 2, "G$"),
    Currency::new("HKD", 2, "HK$"),
    Currency::new("HNL", 2, "L"),
    Currency::new("HRK", 2, "kn"),
    Currency::new("HTG", 2, "G"),
    Currency::new("HUF", 0, "Ft"),
    Currency::new("IDR", 2, "Rp"),
    Currency::new("ILS", 2, "\u{20aa}"),
    Currency::new("IMP", 2, "\u{a3}"),
    Currency::new("INR", 2, "\u{20b9}"),
    Currency::new("IQD", 3, ".\u{62f}.\u{639}"),
    Currency::new("IRR", 2, "\u{fdfc}"),
    Currency::new("ISK", 0, "kr"),
    Currency::new("JEP", 2, "\u{a3}"),
    Currency::new("JMD", 2, "J$"),
    Currency::new("JOD", 3, ".\u{62f}.\u{625}"),
    Currency::new("JPY", 0, "\u{a5}"),
    Currency::new("KES", 2, "KSh"),
    Currency::new("KGS", 2, "\u{441}\u{43e}\u{43c}"),
    Currency::new("KHR", 2, "\u{17db}"),
    Currency::new("KMF", 0, "CF"),
    Currency::new("KPW", 0, "\u{20a9}"),
    Currency::new("KRW", 0, "\u{20a9}"),
    Currency::new("KWD", 3, ".\u{62f}.\u{643}"),
    Currency::new("KYD", 2, "CI$"),
    Currency::new("KZT", 2, "\u{20b8}"),
    Currency::new("LAK", 2, "\u{20ad}"),
    Currency::new("LBP", 2, "\u{a3}"),
    Currency::new("LKR", 2, "\u{20a8}"),
    Currency::new("LRD", 2, "L$"),
    Currency::new("LSL", 2, "L"),
    Currency::new("LYD", 3, ".\u{62f}.\u{644}"),
    Currency::new("MAD", 2, ".\u{62f}.\u{645}"),
    Currency::new("MDL", 2, "lei"),
    Currency::new("MGA", 0, "Ar"),
    Currency::new("MKD", 2, "\u{434}\u{435}\u{43d}"),
    Currency::new("MMK", 2, "K"),
    Currency::new("MNT", 2, "\u{20ae}"),
    Currency::new("MOP", 2, "P"),
    Currency::new("MRO", 0, "UM"),
    Currency::new("MUR", 2, "\u{20a8}"),
    Currency::new("MVR", 2, "MVR"),
    Currency::new("MWK", 2, "MK"),
    Currency::new("MXN", 2, "Mex$"),
    Currency::new("MYR", 2, "RM"),
    Currency::new("MZN", 2, "MT"),
    Currency::new("NAD", 2, "N$"),
    Currency::new("NGN", 2, "\u{20a6}"),
    Currency::new("NIO", 2, "C$"),
    Currency::new("NOK", 2, "kr"),
    Currency::new("NPR", 2, "\u{20a8}"),
    Currency::new("NZD", 2, "NZ$"),
    Currency::new("OMR", 3, "\u{fdfc}"),
    Currency::new("PAB", 2, "B/."),
    Currency::new("PEN", 2, "S/"),
    Currency::new("PGK", 2, "K"),
    Currency::new("PHP", 2, "\u{20b1}"),
    Currency::new("PKR", 2, "\u{20a8}"),
    Currency::new("PLN", 2, "z\u{142}"),
    Currency::new("PYG", 0, "Gs"),
    Currency::new("QAR", 2, "\u{fdfc}"),
    Currency::new("RON", 2, "lei"),
    Currency::new("RSD", 2, "\u{414}\u{438}\u{43d}."),
    Currency::new("RUB", 2, "\u{20bd}"),
    Currency::new("RWF", 0, "FRw"),
    Currency::new("SAR", 2, "\u{fdfc}"),
    Currency::new("SBD", 2, "SI$"),
    Currency::new("SCR", 2, "\u{20a8}"),
    Currency::new("SDG", 2, "\u{a3}"),
    Currency::new("SEK", 2, "kr"),
    Currency::new("SGD", 2, "S$"),
    Currency::new("SHP", 2, "\u{a3}"),
    Currency::new("SLL", 2, "Le"),
    Currency::new("SOS", 2, "Sh"),
    Currency::new("SRD", 2, "SRD$"),
    Currency::new("SSP", 2, "\u{a3}"),
    Currency::new("STD", 2, "Db"),
    Currency::new("SVC", 2, "\u{20a1}"),
    Currency::new("SYP", 2, "\u{a3}"),
    Currency::new("SZL", 2, "\u{a3}"),
    Currency::new("THB", 2, "\u{e3f}"),
    Currency::new("TJS", 2, "SM"),
    Currency::new("TMT", 2, "T"),
    Currency::new("TND", 3, ".\u{62f}.\u{62a}"),
    Currency::new("TOP", 2, "T$"),
    Currency::new("TRY", 2, "\u{20ba}"),
    Currency::new("TTD", 2, "TT$"),
    Currency::new("TWD", 0, "NT$"),
    Currency::new("TZS", 0, "TSh"),
    Currency::new("UAH", 2, "\u{20b4}"),
    Currency::new("UGX", 0, "USh"),
    Currency::new("USD", 2, "$"),
    Currency::new("UYU", 2, "$U"),
    Currency::new("UZS", 2, "so\u{2019}m"),
    Currency::new("VEF", 2, "Bs.F"),
    Currency::new("VES", 2, "Bs.S"),
    Currency::new("VND", 0, "\u{20ab}"),
    Currency::new("VUV", 0, "Vt"),
    Currency::new("WST", 2, "T"),
    Currency::new("XAF", 0, "Fr"),
    Currency::new("XCD", 2, "EC$"),
    Currency::new("XOF", 0, "Fr"),
    Currency::new("XPF", 0, "Fr"),
    Currency::new("YER", 2, "\u{fdfc}"),
    Currency::new("ZAR", 2, "R"),
    Currency::new("ZMW", 2, "ZK"),
    Currency::new("ZWD", 2, "Z$"),
];
