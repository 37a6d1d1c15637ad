//! Property tests for the money invariants: exact construction, lossless
//! textual and structured round trips, and currency-safe arithmetic.

use exact_money::prelude::*;
use proptest::prelude::*;

fn any_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::all().collect::<Vec<_>>())
}

fn any_money() -> impl Strategy<Value = Money> {
    (any::<i64>(), any_currency())
        .prop_map(|(amount, currency)| Money::forge_with_currency(amount, currency))
}

#[test]
fn every_registered_code_resolves_to_itself() {
    for currency in Currency::all() {
        let found = Currency::by_iso_code(currency.code()).unwrap();
        assert_eq!(found.code(), currency.code());
        assert_eq!(found, currency);
    }
}

proptest! {
    /// Forging keeps the exact minor-unit amount.
    #[test]
    fn prop_forge_is_exact(amount: i64, currency in any_currency()) {
        let money = Money::forge(amount, currency.code()).unwrap();
        prop_assert_eq!(money.int64(), amount);
        prop_assert_eq!(money.currency(), currency);
    }

    /// Canonical text parses back to the same value.
    #[test]
    fn prop_display_parse_round_trip(money in any_money()) {
        let text = money.to_string();
        let parsed: Money = text.parse().unwrap();
        prop_assert_eq!(parsed, money);
    }

    /// Adding zero is the identity.
    #[test]
    fn prop_add_zero_is_identity(money in any_money()) {
        let zero = Money::zero(money.currency());
        prop_assert_eq!(money.add(&zero).unwrap(), money);
        prop_assert_eq!(money.subtract(&zero).unwrap(), money);
    }

    /// Subtraction undoes addition while nothing overflows.
    #[test]
    fn prop_add_then_subtract(
        a in -(1_i64 << 60)..(1_i64 << 60),
        b in -(1_i64 << 60)..(1_i64 << 60),
        currency in any_currency()
    ) {
        let left = Money::forge_with_currency(a, currency);
        let right = Money::forge_with_currency(b, currency);
        let sum = left.add(&right).unwrap();
        prop_assert_eq!(sum.int64(), a + b);
        prop_assert_eq!(sum.subtract(&right).unwrap(), left);
    }

    /// Different currencies never combine.
    #[test]
    fn prop_mismatched_currencies_rejected(
        a in any_money(),
        b in any_money()
    ) {
        prop_assume!(a.currency() != b.currency());
        let is_mismatch = matches!(a.add(&b), Err(MoneyError::CurrencyMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    /// Whole major units survive the float constructor exactly.
    #[test]
    fn prop_whole_major_units_are_exact(major in -(1_i64 << 40)..(1_i64 << 40)) {
        let money = Money::forge_float(major as f64, "EUR").unwrap();
        prop_assert_eq!(money.int64(), major * 100);
    }

    /// Storage value and scan restore the amount when the currency is known.
    #[test]
    fn prop_value_scan_round_trip(money in any_money()) {
        let mut restored = Money::zero(money.currency());
        restored.scan(money.value()).unwrap();
        prop_assert_eq!(restored, money);
    }

    /// The decimal bridge is lossless.
    #[test]
    fn prop_decimal_bridge_round_trip(amount in (i64::MIN + 1)..=i64::MAX, currency in any_currency()) {
        let money = Money::forge_with_currency(amount, currency);
        let decimal = money.to_decimal();
        let back = Money::from_decimal(decimal, money.currency().code()).unwrap();
        prop_assert_eq!(back, money);
    }
}

#[cfg(feature = "serde")]
proptest! {
    /// Structured text decodes to the same value.
    #[test]
    fn prop_json_round_trip(money in any_money()) {
        let json = money.to_json().unwrap();
        prop_assert_eq!(Money::from_json(&json).unwrap(), money);
    }
}
