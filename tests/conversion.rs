//! Currency conversion across currencies with 0, 2 and 3 minor digits.

use exact_money::prelude::*;

fn money(amount: i64, code: &str) -> Money {
    Money::must_forge(amount, code)
}

fn rate(source: &str, target: &str, rate: f64) -> Rate {
    Rate::from_codes(source, target, rate).unwrap()
}

#[test]
fn conversion_table() {
    let cases = [
        ("eur_to_eur", money(100, "EUR"), rate("EUR", "EUR", 1.0), money(100, "EUR")),
        ("eur_to_usd", money(100, "EUR"), rate("EUR", "USD", 1.1), money(110, "USD")),
        ("eur_to_usd_reverse", money(100, "EUR"), rate("USD", "EUR", 0.91), money(110, "USD")),
        ("vnd_to_eur", money(100_000, "VND"), rate("EUR", "VND", 25258.410459), money(396, "EUR")),
        ("eur_to_vnd", money(100, "EUR"), rate("EUR", "VND", 25258.410459), money(25258, "VND")),
        ("eur_to_tnd", money(100, "EUR"), rate("EUR", "TND", 3.148775), money(3149, "TND")),
        ("tnd_to_eur", money(3149, "TND"), rate("EUR", "TND", 3.148775), money(100, "EUR")),
        ("eur_to_jod", money(123456, "EUR"), rate("EUR", "JOD", 0.78), money(962957, "JOD")),
        ("negative", money(-250, "EUR"), rate("EUR", "USD", 1.1), money(-275, "USD")),
    ];

    for (name, source, rate, want) in cases {
        assert_eq!(convert_to(&source, &rate).unwrap(), want, "{name}");
    }
}

#[test]
fn unrelated_rate_is_rejected() {
    let result = money(100, "GBP").convert_to(&rate("USD", "EUR", 2.0));
    assert!(matches!(result, Err(MoneyError::CurrencyRateMismatch { .. })));
}

#[test]
fn reverse_matches_forward_with_inverse_rate() {
    let eur_usd = rate("EUR", "USD", 1.1);
    for amount in [100, 12345, 999, 1, -250] {
        let dollars = money(amount, "USD");
        assert_eq!(
            dollars.convert_to(&eur_usd).unwrap(),
            dollars.convert_to(&eur_usd.inverse().unwrap()).unwrap(),
            "USD {amount}"
        );
    }
}

#[test]
fn there_and_back_stays_within_one_minor_unit() {
    let eur_usd = rate("EUR", "USD", 1.0837);
    for amount in [1, 99, 10_000, 123_456_789] {
        let original = money(amount, "EUR");
        let back = original
            .convert_to(&eur_usd)
            .and_then(|usd| usd.convert_to(&eur_usd))
            .unwrap();
        assert!(
            (back.int64() - amount).abs() <= 1,
            "EUR {amount} came back as {back}"
        );
    }
}

#[test]
fn conversion_result_is_rounded_half_away_from_zero() {
    // 0.05 EUR * 1.5 = 0.075 USD -> 8 cents
    let converted = money(5, "EUR").convert_to(&rate("EUR", "USD", 1.5)).unwrap();
    assert_eq!(converted.int64(), 8);

    let converted = money(-5, "EUR").convert_to(&rate("EUR", "USD", 1.5)).unwrap();
    assert_eq!(converted.int64(), -8);
}
