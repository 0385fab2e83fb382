//! The fixed-point "units + nanos" money representation.
//!
//! [`FixedPointMoney`] mirrors the well-known `google.type.Money` message: a
//! currency code, a signed 64-bit count of whole units and a signed 32-bit
//! count of nano (10^-9) units. It is the wire form used by the JSON encoding
//! of [`Amount`](crate::Amount), and can be manipulated directly, without
//! converting to a decimal, by the operations in this module.
//!
//! ## Normalization
//!
//! A value is *normalized* when `units` and `nanos` agree in sign (or one is
//! zero) and `|nanos| < 1_000_000_000`. Values received from a peer, or
//! produced by adding two values, may carry a whole unit or more in `nanos`;
//! [`FixedPointMoney::normalize`] folds that back into `units`.
//!
//! Normalization and arithmetic are computed on the total number of nanos in
//! 128-bit space, where no sum of two 64/32-bit pairs can overflow. Only the
//! final narrowing back to a 64-bit `units` can fail, and that is reported
//! as [`FixedPointError::Overflow`].
//!
//! ```
//! use moneta_core::FixedPointMoney;
//!
//! let m = FixedPointMoney::new("XYZ", 1, 1_500_000_000);
//! let n = m.normalize().unwrap();
//! assert_eq!((n.units, n.nanos), (2, 500_000_000));
//! ```

mod compare;
mod math;

use core::fmt;
use std::borrow::Cow;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::currency::{self, CurrencyCodeError};
use crate::format;

pub use math::{max, min, sum};

/// The number of nano units in each unit.
pub const NANOS_PER_UNIT: i32 = 1_000_000_000;

/// Scale of a decimal built from a total number of nanos.
const NANOS_SCALE: i64 = 9;

const NANOS_PER_UNIT_WIDE: i128 = 1_000_000_000;

/// Errors produced when converting to, from, or within the fixed-point
/// representation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FixedPointError {
    /// The magnitude's integer part does not fit in a signed 64-bit integer.
    #[error("magnitude's integer component overflows the 64-bit range")]
    IntegerOverflow,
    /// The magnitude has more than 9 fractional digits.
    #[error("magnitude's fractional component has too many decimal places")]
    PrecisionLoss,
    /// The currency code is empty or consists only of whitespace.
    #[error("currency code must not be empty")]
    EmptyCurrency,
    /// The currency code is invalid.
    #[error(transparent)]
    Currency(#[from] CurrencyCodeError),
    /// `units` and `nanos` have strictly opposite signs.
    #[error(
        "sign of units component ({units}) does not agree with sign of nanos component ({nanos})"
    )]
    SignMismatch {
        /// The units component.
        units: i64,
        /// The nanos component.
        nanos: i32,
    },
    /// A normalized or computed value does not fit the units component.
    #[error("units component overflows the 64-bit range")]
    Overflow,
}

/// An amount of money in fixed-point form.
///
/// The currency code is kept as received; it is only checked by
/// [`FixedPointMoney::validate`] and friends. `==` compares the three fields
/// structurally, so a denormalized value is not `==` to its normalized form;
/// use [`FixedPointMoney::equal_to`] to compare values.
///
/// Serialized with serde as `{"currency_code": "XYZ", "units": "10", "nanos":
/// 123000000}`. `units` is written as a string and read from either a string
/// or an integer; missing fields default to zero or empty and unknown fields
/// are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FixedPointMoney {
    /// The currency code.
    pub currency_code: String,
    /// Whole units of the amount.
    #[serde(with = "units_string")]
    pub units: i64,
    /// Nano units of the amount, in `(-1_000_000_000, 1_000_000_000)` once
    /// normalized.
    pub nanos: i32,
}

impl FixedPointMoney {
    /// Create a fixed-point value. No validation is performed.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, units: i64, nanos: i32) -> Self {
        Self {
            currency_code: currency_code.into(),
            units,
            nanos,
        }
    }

    /// Returns an error if the currency code is invalid or the signs of the
    /// components disagree.
    ///
    /// # Errors
    ///
    /// Returns [`FixedPointError::Currency`] or
    /// [`FixedPointError::SignMismatch`].
    pub fn validate(&self) -> Result<(), FixedPointError> {
        currency::validate(&self.currency_code)?;
        self.check_signs()
    }

    /// Returns true if `units` and `nanos` are both non-negative, both
    /// non-positive, or either is zero.
    #[must_use]
    pub const fn signs_agree(&self) -> bool {
        !((self.units > 0 && self.nanos < 0) || (self.units < 0 && self.nanos > 0))
    }

    /// Returns true if the value is already normalized.
    #[must_use]
    pub const fn is_normalized(&self) -> bool {
        self.signs_agree() && self.nanos.unsigned_abs() < NANOS_PER_UNIT.unsigned_abs()
    }

    /// Validates the value and returns its normalized form.
    ///
    /// `self` is never mutated. If it is already normalized it is returned
    /// borrowed, otherwise a normalized copy is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if [`FixedPointMoney::validate`] fails, or
    /// [`FixedPointError::Overflow`] if the carried units overflow.
    pub fn normalize(&self) -> Result<Cow<'_, Self>, FixedPointError> {
        self.validate()?;
        self.normalized()
    }

    /// Validates and normalizes the value in place.
    ///
    /// On error `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// As for [`FixedPointMoney::normalize`].
    pub fn normalize_in_place(&mut self) -> Result<(), FixedPointError> {
        self.validate()?;

        if !self.is_normalized() {
            let (units, nanos) = split_nanos(self.total_nanos())?;
            self.units = units;
            self.nanos = nanos;
        }

        Ok(())
    }

    /// Returns the value as a decimal number of units.
    ///
    /// The currency code is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`FixedPointError::SignMismatch`] if the signs of the
    /// components disagree.
    pub fn to_decimal(&self) -> Result<BigDecimal, FixedPointError> {
        self.check_signs()?;
        Ok(BigDecimal::new(BigInt::from(self.total_nanos()), NANOS_SCALE).normalized())
    }

    /// Render the value using a printf-style verb.
    ///
    /// The value is normalized first. Supported verbs are `v`, `f`, `F`,
    /// `e`, `E`, `g` and `G`. Any other verb, or a value whose signs
    /// disagree, produces a descriptive placeholder such as
    /// `%!d(FixedPointMoney=XYZ 10u 129000000n)` instead of failing.
    #[must_use]
    pub fn render(&self, verb: char, precision: Option<usize>) -> String {
        self.to_decimal()
            .ok()
            .and_then(|value| format::render(&self.currency_code, &value, verb, precision))
            .unwrap_or_else(|| format::unsupported(verb, "FixedPointMoney", self.raw()))
    }

    /// Normalizes a value whose signs are already known to agree.
    pub(crate) fn normalized(&self) -> Result<Cow<'_, Self>, FixedPointError> {
        if self.is_normalized() {
            return Ok(Cow::Borrowed(self));
        }

        tracing::trace!(
            units = self.units,
            nanos = self.nanos,
            "normalizing fixed-point money"
        );

        Self::from_total_nanos(&self.currency_code, self.total_nanos()).map(Cow::Owned)
    }

    pub(crate) const fn check_signs(&self) -> Result<(), FixedPointError> {
        if self.signs_agree() {
            return Ok(());
        }

        Err(FixedPointError::SignMismatch {
            units: self.units,
            nanos: self.nanos,
        })
    }

    /// Panics if the signs of the components disagree.
    #[track_caller]
    pub(crate) fn assert_signs_agree(&self) {
        if let Err(e) = self.check_signs() {
            panic!("{e}");
        }
    }

    /// The whole value expressed in nanos.
    pub(crate) fn total_nanos(&self) -> i128 {
        i128::from(self.units) * NANOS_PER_UNIT_WIDE + i128::from(self.nanos)
    }

    /// Builds a normalized value from a total number of nanos.
    pub(crate) fn from_total_nanos(currency_code: &str, total: i128) -> Result<Self, FixedPointError> {
        let (units, nanos) = split_nanos(total)?;
        Ok(Self::new(currency_code, units, nanos))
    }

    /// The unnormalized components, for diagnostics.
    fn raw(&self) -> String {
        format!("{} {}u {}n", self.currency_code, self.units, self.nanos)
    }
}

/// Splits a total number of nanos into sign-agreeing units and nanos.
fn split_nanos(total: i128) -> Result<(i64, i32), FixedPointError> {
    let units = i64::try_from(total / NANOS_PER_UNIT_WIDE).map_err(|_| FixedPointError::Overflow)?;
    let nanos = i32::try_from(total % NANOS_PER_UNIT_WIDE).map_err(|_| FixedPointError::Overflow)?;
    Ok((units, nanos))
}

impl fmt::Display for FixedPointMoney {
    /// Formats the normalized value as `"<CURRENCY> <decimal>"`, honouring
    /// the precision flag.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Ok(value) => format::write_display(f, &self.currency_code, &value),
            Err(_) => f.write_str(&format::unsupported('v', "FixedPointMoney", self.raw())),
        }
    }
}

impl fmt::LowerExp for FixedPointMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Ok(value) => format::write_exp(f, &self.currency_code, &value, false),
            Err(_) => f.write_str(&format::unsupported('e', "FixedPointMoney", self.raw())),
        }
    }
}

impl fmt::UpperExp for FixedPointMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Ok(value) => format::write_exp(f, &self.currency_code, &value, true),
            Err(_) => f.write_str(&format::unsupported('E', "FixedPointMoney", self.raw())),
        }
    }
}

/// Serde adapter writing `units` as a decimal string, as protobuf's JSON
/// mapping does for 64-bit integers.
mod units_string {
    use core::fmt;

    use serde::de::{self, Unexpected, Visitor};
    use serde::{Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // signature fixed by serde
    pub fn serialize<S>(units: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(units)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(UnitsVisitor)
    }

    struct UnitsVisitor;

    impl Visitor<'_> for UnitsVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a signed 64-bit integer, or a string containing one")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value
                .parse()
                .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
        }
    }
}
