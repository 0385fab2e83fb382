//! Immutable amounts of money in a specific currency.
//!
//! An [`Amount`] pairs a [`CurrencyCode`] with an arbitrary-precision decimal
//! "magnitude" describing the number of units of that currency. Every
//! operation returns a new `Amount`.
//!
//! Operations that combine two amounts require them to share a currency.
//! Combining amounts of different currencies is a programmer error and
//! panics with a message naming both codes:
//!
//! ```should_panic
//! use moneta_core::Amount;
//!
//! let a = Amount::must_parse("XYZ", "1");
//! let b = Amount::must_parse("ABC", "1");
//! let _ = a + b; // can not operate on amounts in differing currencies (XYZ vs ABC)
//! ```

mod compare;
mod math;
mod rounding;

use core::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::{One, Zero};

use crate::currency::{CurrencyCode, CurrencyCodeError};
use crate::format;

pub use math::{avg, max, min, sum};

/// A decimal with a value of 1 (one).
pub(crate) static ONE: LazyLock<BigDecimal> = LazyLock::new(BigDecimal::one);

/// Errors that can occur when parsing an [`Amount`] from strings.
#[derive(thiserror::Error, Debug)]
pub enum ParseAmountError {
    /// The currency code is invalid.
    #[error(transparent)]
    Currency(#[from] CurrencyCodeError),
    /// The magnitude is empty or consists only of whitespace.
    #[error("cannot parse magnitude, it is empty")]
    BlankMagnitude,
    /// The magnitude is not a decimal number.
    #[error("cannot parse magnitude: {0}")]
    Magnitude(#[from] ParseBigDecimalError),
}

/// An immutable amount of money in a specific currency.
///
/// The default value is zero US dollars (`USD 0`).
///
/// `==` and [`Hash`] compare both currency and magnitude, which is the
/// "identical to" relation. The magnitude-only comparisons, which require a
/// shared currency, are [`Amount::equal_to`], [`Amount::compare`] and
/// friends. [`Ord`] is the lexical order, so mixed-currency collections sort
/// by currency code first, then by magnitude.
///
/// ## Examples
///
/// ```
/// use moneta_core::Amount;
///
/// let price = Amount::must_parse("usd", "19.99");
/// assert_eq!(price.currency_code(), "USD");
///
/// let total = &price + &price;
/// assert_eq!(total.to_string(), "USD 39.98");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Amount {
    currency: CurrencyCode,
    magnitude: BigDecimal,
}

impl Amount {
    /// Create an amount with a specific currency and magnitude.
    #[must_use]
    pub const fn new(currency: CurrencyCode, magnitude: BigDecimal) -> Self {
        Self {
            currency,
            magnitude,
        }
    }

    /// Create an amount from a currency code string, uppercasing it.
    ///
    /// # Errors
    ///
    /// Returns an error if `currency` is not a valid code once uppercased.
    pub fn try_new(currency: &str, magnitude: BigDecimal) -> Result<Self, CurrencyCodeError> {
        Ok(Self::new(CurrencyCode::normalize(currency)?, magnitude))
    }

    /// An amount with a magnitude of 0 (zero).
    #[must_use]
    pub fn zero(currency: CurrencyCode) -> Self {
        Self::new(currency, BigDecimal::zero())
    }

    /// An amount with a magnitude of 1 (one).
    #[must_use]
    pub fn unit(currency: CurrencyCode) -> Self {
        Self::new(currency, ONE.clone())
    }

    /// An amount with an integer magnitude.
    #[must_use]
    pub fn from_int(currency: CurrencyCode, magnitude: i64) -> Self {
        Self::new(currency, BigDecimal::from(magnitude))
    }

    /// Parse an amount from a currency code and a decimal string.
    ///
    /// The currency code is uppercased before it is validated. The magnitude
    /// may be any integer or decimal number, including scientific notation.
    ///
    /// # Errors
    ///
    /// Returns an error if either component can not be parsed.
    pub fn parse(currency: &str, magnitude: &str) -> Result<Self, ParseAmountError> {
        let currency = CurrencyCode::normalize(currency)?;
        Ok(Self::new(currency, parse_magnitude(magnitude)?))
    }

    /// Parse an amount, panicking if either component is invalid.
    ///
    /// Intended for literals known to be valid at compile time. Use
    /// [`Amount::parse`] for anything from outside the program.
    ///
    /// # Panics
    ///
    /// Panics if [`Amount::parse`] would fail.
    #[must_use]
    #[track_caller]
    pub fn must_parse(currency: &str, magnitude: &str) -> Self {
        match Self::parse(currency, magnitude) {
            Ok(amount) => amount,
            Err(e) => panic!("invalid amount ({currency} {magnitude}): {e}"),
        }
    }

    /// The currency the magnitude is expressed in.
    #[must_use]
    pub const fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// The currency code, always uppercase.
    #[must_use]
    pub fn currency_code(&self) -> &str {
        self.currency.as_str()
    }

    /// The decimal value of the amount without currency information.
    #[must_use]
    pub const fn magnitude(&self) -> &BigDecimal {
        &self.magnitude
    }

    /// Split the amount into its currency and magnitude.
    #[must_use]
    pub fn into_parts(self) -> (CurrencyCode, BigDecimal) {
        (self.currency, self.magnitude)
    }

    /// Render the amount using a printf-style verb.
    ///
    /// | verb      | notation                                                |
    /// |-----------|---------------------------------------------------------|
    /// | `v`       | default; plain decimal                                  |
    /// | `f`, `F`  | plain decimal, `precision` digits after the point       |
    /// | `e`, `E`  | scientific, `precision` digits after the point          |
    /// | `g`, `G`  | scientific for large/small exponents, otherwise decimal |
    ///
    /// Any other verb produces a descriptive placeholder such as
    /// `%!d(Amount=XYZ 10.129)` instead of failing.
    #[must_use]
    pub fn render(&self, verb: char, precision: Option<usize>) -> String {
        format::render(self.currency_code(), &self.magnitude, verb, precision)
            .unwrap_or_else(|| format::unsupported(verb, "Amount", self))
    }

    /// Returns a copy of `self` with a different magnitude.
    fn with_magnitude(&self, magnitude: BigDecimal) -> Self {
        Self::new(self.currency.clone(), magnitude)
    }
}

/// Parse a decimal magnitude, reporting blank input distinctly.
pub(crate) fn parse_magnitude(s: &str) -> Result<BigDecimal, ParseAmountError> {
    if s.trim().is_empty() {
        return Err(ParseAmountError::BlankMagnitude);
    }

    Ok(BigDecimal::from_str(s)?)
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_display(f, self.currency_code(), &self.magnitude)
    }
}

impl fmt::LowerExp for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_exp(f, self.currency_code(), &self.magnitude, false)
    }
}

impl fmt::UpperExp for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_exp(f, self.currency_code(), &self.magnitude, true)
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Amount")
            .field("currency", &self.currency_code())
            .field("magnitude", &format_args!("{}", self.magnitude.to_plain_string()))
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn xyz() -> CurrencyCode {
        CurrencyCode::parse("XYZ").unwrap()
    }

    #[test]
    fn test_default_is_zero_usd() {
        let a = Amount::default();
        assert_eq!(a.currency_code(), "USD");
        assert!(a.magnitude().is_zero());
    }

    #[test]
    fn test_constructors() {
        assert!(Amount::zero(xyz()).magnitude().is_zero());
        assert!(Amount::unit(xyz()).magnitude().is_one());
        assert_eq!(Amount::from_int(xyz(), -42).to_string(), "XYZ -42");
    }

    #[test]
    fn test_parse_uppercases_currency() {
        let a = Amount::parse("xyz", "1.23").unwrap();
        assert_eq!(a.currency_code(), "XYZ");
        assert_eq!(a.magnitude(), &BigDecimal::from_str("1.23").unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Amount::parse("X", "1"),
            Err(ParseAmountError::Currency(CurrencyCodeError::Invalid { .. }))
        ));
        assert!(matches!(
            Amount::parse("XYZ", "  "),
            Err(ParseAmountError::BlankMagnitude)
        ));
        assert!(matches!(
            Amount::parse("XYZ", "<invalid>"),
            Err(ParseAmountError::Magnitude(_))
        ));
    }

    #[test]
    #[should_panic(expected = "invalid amount (XYZ <invalid>)")]
    fn test_must_parse_panics() {
        let _ = Amount::must_parse("XYZ", "<invalid>");
    }

    #[test]
    fn test_try_new() {
        let a = Amount::try_new("eur", BigDecimal::from(5)).unwrap();
        assert_eq!(a.to_string(), "EUR 5");
        assert!(Amount::try_new("", BigDecimal::from(5)).is_err());
    }

    #[test]
    fn test_display() {
        let a = Amount::must_parse("XYZ", "10.123");
        assert_eq!(format!("{a}"), "XYZ 10.123");
        assert_eq!(format!("{a:.2}"), "XYZ 10.12");
        assert_eq!(format!("{a:e}"), "XYZ 1.0123e1");
        assert_eq!(format!("{a:.1E}"), "XYZ 1.0E1");
    }

    #[test]
    fn test_debug() {
        let a = Amount::must_parse("XYZ", "10.123");
        assert_eq!(
            format!("{a:?}"),
            "Amount { currency: \"XYZ\", magnitude: 10.123 }"
        );
    }

    #[test]
    fn test_render() {
        let a = Amount::must_parse("XYZ", "10.129");
        assert_eq!(a.render('f', Some(2)), "XYZ 10.13");
        assert_eq!(a.render('d', None), "%!d(Amount=XYZ 10.129)");
    }

    #[test]
    fn test_into_parts() {
        let (currency, magnitude) = Amount::must_parse("XYZ", "3").into_parts();
        assert_eq!(currency, "XYZ");
        assert_eq!(magnitude, BigDecimal::from(3));
    }
}
