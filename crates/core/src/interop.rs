//! Conversions to and from [`rust_decimal::Decimal`].
//!
//! Enabled by the `rust-decimal` feature.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use rust_decimal::Decimal;

use crate::amount::Amount;
use crate::currency::CurrencyCode;

/// The magnitude of an [`Amount`] does not fit a [`Decimal`] exactly.
#[derive(thiserror::Error, Debug)]
#[error("magnitude {magnitude} can not be represented as a 96-bit decimal: {source}")]
pub struct DecimalRangeError {
    magnitude: String,
    source: rust_decimal::Error,
}

impl Amount {
    /// Create an amount from a [`Decimal`]. This never loses precision.
    #[must_use]
    pub fn from_rust_decimal(currency: CurrencyCode, value: Decimal) -> Self {
        let magnitude = BigDecimal::new(BigInt::from(value.mantissa()), i64::from(value.scale()));
        Self::new(currency, magnitude)
    }

    /// Returns the magnitude as a [`Decimal`].
    ///
    /// # Errors
    ///
    /// Returns an error if the magnitude has more than 28 fractional digits
    /// or is outside the range of a [`Decimal`]. The value is never rounded.
    pub fn to_rust_decimal(&self) -> Result<Decimal, DecimalRangeError> {
        let magnitude = self.magnitude().to_plain_string();
        Decimal::from_str_exact(&magnitude).map_err(|source| DecimalRangeError { magnitude, source })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn xyz() -> CurrencyCode {
        CurrencyCode::parse("XYZ").unwrap()
    }

    #[test]
    fn test_from_rust_decimal() {
        let a = Amount::from_rust_decimal(xyz(), Decimal::from_str("-10.123").unwrap());
        assert_eq!(a, Amount::must_parse("XYZ", "-10.123"));

        let a = Amount::from_rust_decimal(xyz(), Decimal::MAX);
        assert_eq!(a.magnitude().to_plain_string(), Decimal::MAX.to_string());
    }

    #[test]
    fn test_to_rust_decimal() {
        let d = Amount::must_parse("XYZ", "10.123").to_rust_decimal().unwrap();
        assert_eq!(d, Decimal::from_str("10.123").unwrap());

        let d = Amount::must_parse("XYZ", "1e3").to_rust_decimal().unwrap();
        assert_eq!(d, Decimal::from(1000));
    }

    #[test]
    fn test_to_rust_decimal_out_of_range() {
        assert!(Amount::must_parse("XYZ", "1e30").to_rust_decimal().is_err());
        assert!(Amount::must_parse("XYZ", "1e-30").to_rust_decimal().is_err());
    }
}
