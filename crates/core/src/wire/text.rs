use std::str::FromStr;

use bigdecimal::{BigDecimal, ParseBigDecimalError};

use crate::amount::Amount;
use crate::currency::{CurrencyCode, CurrencyCodeError};

/// Errors produced when decoding the text representation.
#[derive(thiserror::Error, Debug)]
pub enum TextError {
    /// There is no space between the currency and the magnitude.
    #[error(
        "cannot decode amount from text representation: data must have currency and magnitude components separated by a single space"
    )]
    MissingSeparator,
    /// The currency code is invalid.
    #[error("cannot decode amount from text representation: {0}")]
    Currency(#[from] CurrencyCodeError),
    /// The magnitude is empty or consists only of whitespace.
    #[error("cannot decode amount from text representation: cannot parse magnitude, it is empty")]
    BlankMagnitude,
    /// The magnitude is not a decimal number.
    #[error("cannot decode amount from text representation: {0}")]
    Magnitude(#[from] ParseBigDecimalError),
}

/// Parses the `"<CURRENCY> <magnitude>"` form produced by `Display`.
///
/// The currency code must already be uppercase, and the two components must
/// be separated by exactly one space.
///
/// ```
/// use moneta_core::Amount;
///
/// let a: Amount = "XYZ 10.123".parse().unwrap();
/// assert_eq!(a.to_string(), "XYZ 10.123");
/// ```
impl FromStr for Amount {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s).inspect_err(|e| super::rejected("text", e))
    }
}

fn decode(s: &str) -> Result<Amount, TextError> {
    let (currency, magnitude) = s.split_once(' ').ok_or(TextError::MissingSeparator)?;

    let currency = CurrencyCode::parse(currency)?;

    if magnitude.trim().is_empty() {
        return Err(TextError::BlankMagnitude);
    }

    Ok(Amount::new(currency, BigDecimal::from_str(magnitude)?))
}
