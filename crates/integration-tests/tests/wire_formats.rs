//! End-to-end tests for the text, binary and JSON encodings.

#![allow(clippy::unwrap_used)]

use moneta_core::{Amount, BinaryError, FixedPointMoney, TextError};
use moneta_integration_tests::{amount, init_tracing};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A document embedding amounts, as an order service would store one.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Order {
    id: String,
    subtotal: Amount,
    lines: Vec<Amount>,
}

#[test]
fn test_amount_embeds_in_documents() {
    init_tracing();

    let order = Order {
        id: "ord_1".to_owned(),
        subtotal: amount("USD", "30.5"),
        lines: vec![amount("USD", "10.25"), amount("USD", "20.25")],
    };

    let value = serde_json::to_value(&order).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "ord_1",
            "subtotal": {"currency_code": "USD", "units": "30", "nanos": 500_000_000},
            "lines": [
                {"currency_code": "USD", "units": "10", "nanos": 250_000_000},
                {"currency_code": "USD", "units": "20", "nanos": 250_000_000},
            ],
        })
    );

    let back: Order = serde_json::from_value(value).unwrap();
    assert_eq!(back, order);
    assert_eq!(moneta_core::sum(&back.lines), back.subtotal);
}

#[test]
fn test_document_with_invalid_amount_is_rejected() {
    init_tracing();

    let err = serde_json::from_value::<Order>(json!({
        "id": "ord_2",
        "subtotal": {"currency_code": "USD", "units": "-1", "nanos": 5},
        "lines": [],
    }))
    .unwrap_err();

    assert!(
        err.to_string()
            .contains("sign of units component (-1) does not agree with sign of nanos component (5)"),
        "{err}"
    );
}

#[test]
fn test_json_and_fixed_point_agree() {
    let a = amount("XYZ", "-10.123");
    let from_amount = serde_json::to_value(&a).unwrap();
    let from_raw = serde_json::to_value(FixedPointMoney::try_from(&a).unwrap()).unwrap();
    assert_eq!(from_amount, from_raw);
}

#[test]
fn test_formats_agree_on_value() {
    init_tracing();

    for m in ["0", "1", "-1", "10.123", "-0.000000001", "9223372036854775807.999999999"] {
        let a = amount("XYZ", m);

        let text: Amount = a.to_string().parse().unwrap();
        let binary = Amount::from_binary(&a.to_binary().unwrap()).unwrap();
        let json = Amount::from_json(&a.to_json().unwrap()).unwrap();

        assert_eq!(text, a, "text {m}");
        assert_eq!(binary, a, "binary {m}");
        assert_eq!(json, a, "json {m}");
    }
}

#[test]
fn test_binary_keeps_precision_json_can_not() {
    let a = amount("XYZ", "1.0000000001");

    assert_eq!(Amount::from_binary(&a.to_binary().unwrap()).unwrap(), a);
    assert!(a.to_json().is_err());
}

#[test]
fn test_extreme_exponents_fail_fast() {
    init_tracing();

    for (scale, message) in [
        (-100_000_000_000_i64, "overflows the 64-bit range"),
        (100_000_000_000_i64, "too many decimal places"),
    ] {
        let mut data = vec![3, b'X', b'Y', b'Z'];
        data.extend_from_slice(&scale.to_be_bytes());
        data.push(1);

        let a = Amount::from_binary(&data).unwrap();
        let err = a.to_json().unwrap_err();
        assert!(err.to_string().contains(message), "{scale}: {err}");
    }

    let a: Amount = "XYZ 1e100000000".parse().unwrap();
    assert!(FixedPointMoney::try_from(&a).is_err());
}

#[test]
fn test_decoders_reject_bad_input() {
    init_tracing();

    assert!(matches!(
        "XYZ".parse::<Amount>(),
        Err(TextError::MissingSeparator)
    ));
    assert!(matches!(
        "XYZ \t".parse::<Amount>(),
        Err(TextError::BlankMagnitude)
    ));
    assert_eq!(Amount::from_binary(b""), Err(BinaryError::Empty));
    assert_eq!(
        Amount::from_binary(b"\x05XYZ"),
        Err(BinaryError::Truncated {
            declared: 5,
            available: 3
        })
    );
    assert!(Amount::from_json(r#"{"currency_code":"  ","units":"1"}"#).is_err());
}

#[test]
fn test_display_precision_and_notation() {
    let a = amount("XYZ", "1234.5678");
    assert_eq!(format!("{a:.2}"), "XYZ 1234.57");
    assert_eq!(format!("{a:e}"), "XYZ 1.2345678e3");
    assert_eq!(a.render('G', Some(3)), "XYZ 1.23E3");
    assert_eq!(a.render('x', None), "%!x(Amount=XYZ 1234.5678)");
}
