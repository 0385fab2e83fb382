//! Conversions between `Amount` and `rust_decimal::Decimal`.

#![allow(clippy::unwrap_used)]

use std::str::FromStr;

use moneta_core::{Amount, CurrencyCode};
use moneta_integration_tests::amount;
use rust_decimal::Decimal;

fn usd() -> CurrencyCode {
    CurrencyCode::parse("USD").unwrap()
}

#[test]
fn test_decimal_round_trip() {
    for s in ["0", "19.99", "-0.0000000000000000000000000001", "79228162514264337593543950335"] {
        let d = Decimal::from_str(s).unwrap();
        let a = Amount::from_rust_decimal(usd(), d);
        assert_eq!(a.to_rust_decimal().unwrap(), d, "{s}");
    }
}

#[test]
fn test_decimal_arithmetic_agrees() {
    let price = Decimal::from_str("19.99").unwrap();
    let qty = Decimal::from(3);

    let a = Amount::from_rust_decimal(usd(), price);
    let total = &a * &moneta_core::BigDecimal::from(3);

    assert_eq!(total.to_rust_decimal().unwrap(), price * qty);
    assert_eq!(total, amount("USD", "59.97"));
}

#[test]
fn test_to_decimal_never_rounds() {
    let third = amount("USD", "1") / amount("USD", "3");
    let a = Amount::new(usd(), third);

    let err = a.to_rust_decimal().unwrap_err();
    assert!(err.to_string().contains("can not be represented as a 96-bit decimal"));
}
