// ============================================================================
// Currency Shortcuts
// One constructor per registered currency: `EUR(100)`, `float::EUR(1.0)`
// ============================================================================
//
// Names keep the ISO spelling, which also avoids `TRY` clashing with the
// `try` keyword.

#![allow(non_snake_case)]

use crate::domain::Money;

macro_rules! currency_shortcuts {
    ($($code:ident),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($code), "` money from minor units. Panics only if the registry lacks the code.")]
            #[inline]
            pub fn $code(amount: i64) -> Money {
                Money::must_forge(amount, stringify!($code))
            }
        )*

        /// Constructors taking major-unit floats.
        pub mod float {
            use crate::domain::Money;

            $(
                #[doc = concat!("`", stringify!($code), "` money from major units, rounded half away from zero.")]
                #[inline]
                pub fn $code(amount: f64) -> Money {
                    Money::must_forge_float(amount, stringify!($code))
                }
            )*
        }
    };
}

currency_shortcuts! {
    AED, AFN, ALL, AMD, ANG, AOA, ARS, AUD, AWG, AZN, BAM, BBD, BDT, BGN,
    BHD, BIF, BMD, BND, BOB, BRL, BSD, BTN, BWP, BYN, BZD, CAD, CDF, CHF,
    CLF, CLP, CNY, COP, CRC, CUC, CUP, CVE, CZK, DJF, DKK, DOP, DZD, EGP,
    ERN, ETB, EUR, FJD, FKP, GBP, GEL, GGP, GHS, GIP, GMD, GNF, GTQ, GYD,
    HKD, HNL, HRK, HTG, HUF, IDR, ILS, IMP, INR, IQD, IRR, ISK, JEP, JMD,
    JOD, JPY, KES, KGS, KHR, KMF, KPW, KRW, KWD, KYD, KZT, LAK, LBP, LKR,
    LRD, LSL, LYD, MAD, MDL, MGA, MKD, MMK, MNT, MOP, MRO, MUR, MVR, MWK,
    MXN, MYR, MZN, NAD, NGN, NIO, NOK, NPR, NZD, OMR, PAB, PEN, PGK, PHP,
    PKR, PLN, PYG, QAR, RON, RSD, RUB, RWF, SAR, SBD, SCR, SDG, SEK, SGD,
    SHP, SLL, SOS, SRD, SSP, STD, SVC, SYP, SZL, THB, TJS, TMT, TND, TOP,
    TRY, TTD, TWD, TZS, UAH, UGX, USD, UYU, UZS, VEF, VES, VND, VUV, WST,
    XAF, XCD, XOF, XPF, YER, ZAR, ZMW, ZWD,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;

    #[test]
    fn test_shortcuts() {
        assert_eq!(EUR(100), Money::must_forge(100, "EUR"));
        assert_eq!(TRY(5).currency().code(), "TRY");
        assert_eq!(float::JOD(1.011).int64(), 1011);
        assert_eq!(float::EUR(1.01), EUR(101));
    }

    #[test]
    fn test_every_registered_currency_has_a_shortcut() {
        // spot checks across the table
        let shortcuts: [fn(i64) -> Money; 6] = [AED, CLF, GBP, KWD, VND, ZWD];
        for shortcut in shortcuts {
            assert!(shortcut(1).currency().is_valid());
        }
        assert!(Currency::all().count() >= 150);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_float_shortcut_panics_on_nan() {
        float::USD(f64::NAN);
    }
}
