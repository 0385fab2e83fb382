//! Conversion between [`Amount`] and [`FixedPointMoney`].
//!
//! This is the only place a decimal magnitude is split into units and nanos,
//! or reassembled from them. The JSON encoding of [`Amount`] goes through
//! here, so every wire format shares the same overflow and precision rules.
//!
//! ```
//! use moneta_core::{Amount, FixedPointMoney, codec};
//!
//! let a = Amount::must_parse("XYZ", "10.123");
//! let m = codec::encode(&a).unwrap();
//! assert_eq!(m, FixedPointMoney::new("XYZ", 10, 123_000_000));
//! assert_eq!(codec::decode(&m).unwrap(), a);
//! ```

use std::sync::LazyLock;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{ToPrimitive, Zero};

use crate::amount::Amount;
use crate::currency::CurrencyCode;
use crate::fixed::{FixedPointError, FixedPointMoney, NANOS_PER_UNIT};

/// The number of nano units in each unit, as a decimal.
static NANOS: LazyLock<BigDecimal> = LazyLock::new(|| BigDecimal::from(NANOS_PER_UNIT));

/// Integer digits in the widest `i64` value.
const MAX_UNITS_DIGITS: i128 = 19;

/// Fractional digits a nano count can hold.
const MAX_NANOS_SCALE: i64 = 9;

/// Splits an amount into whole units and nano units.
///
/// The fractional part keeps the sign of the magnitude, so `-1.5` encodes as
/// `units = -1, nanos = -500_000_000`.
///
/// # Errors
///
/// Returns [`FixedPointError::IntegerOverflow`] if the integer part does not
/// fit in an `i64`, or [`FixedPointError::PrecisionLoss`] if the magnitude has
/// more than 9 fractional digits.
pub fn encode(amount: &Amount) -> Result<FixedPointMoney, FixedPointError> {
    let magnitude = amount.magnitude();
    if magnitude.is_zero() {
        return Ok(FixedPointMoney::new(amount.currency_code(), 0, 0));
    }
    check_bounds(magnitude)?;

    let integer = magnitude.with_scale_round(0, RoundingMode::Down);
    let units = integer.to_i64().ok_or(FixedPointError::IntegerOverflow)?;

    let nanos = (magnitude - &integer) * &*NANOS;
    if !nanos.is_integer() {
        return Err(FixedPointError::PrecisionLoss);
    }

    // |nanos| < 10^9 once the fraction is known to have at most 9 digits.
    let nanos = nanos.to_i32().ok_or(FixedPointError::PrecisionLoss)?;

    Ok(FixedPointMoney::new(amount.currency_code(), units, nanos))
}

/// Rejects magnitudes that can not fit without expanding their digits.
///
/// A magnitude like `1e100000000` is tiny in memory, but rescaling it to whole
/// units would materialize every digit.
fn check_bounds(magnitude: &BigDecimal) -> Result<(), FixedPointError> {
    let (int, scale) = magnitude.as_bigint_and_exponent();
    let digits = i128::try_from(int.magnitude().to_string().len()).unwrap_or(i128::MAX);
    if digits.saturating_sub(i128::from(scale)) > MAX_UNITS_DIGITS {
        return Err(FixedPointError::IntegerOverflow);
    }

    let (_, scale) = magnitude.normalized().as_bigint_and_exponent();
    if scale > MAX_NANOS_SCALE {
        return Err(FixedPointError::PrecisionLoss);
    }

    Ok(())
}

/// Reassembles an amount from units and nano units.
///
/// The currency code is trimmed and uppercased. Denormalized values, where
/// `nanos` holds one or more whole units, are accepted.
///
/// # Errors
///
/// Returns [`FixedPointError::EmptyCurrency`] if the currency code is blank,
/// [`FixedPointError::Currency`] if it is otherwise invalid, or
/// [`FixedPointError::SignMismatch`] if `units` and `nanos` have opposite
/// signs.
pub fn decode(money: &FixedPointMoney) -> Result<Amount, FixedPointError> {
    decode_fields(money).inspect_err(|e| {
        tracing::debug!(
            format = "fixed-point",
            currency_code = %money.currency_code,
            units = money.units,
            nanos = money.nanos,
            error = %e,
            "rejected fixed-point money"
        );
    })
}

fn decode_fields(money: &FixedPointMoney) -> Result<Amount, FixedPointError> {
    let code = money.currency_code.trim();
    if code.is_empty() {
        return Err(FixedPointError::EmptyCurrency);
    }

    let currency = CurrencyCode::normalize(code)?;
    let magnitude = money.to_decimal()?;

    Ok(Amount::new(currency, magnitude))
}

impl Amount {
    /// Returns the amount in fixed-point form.
    ///
    /// # Errors
    ///
    /// As for [`encode`].
    pub fn to_fixed_point(&self) -> Result<FixedPointMoney, FixedPointError> {
        encode(self)
    }

    /// Builds an amount from its fixed-point form.
    ///
    /// # Errors
    ///
    /// As for [`decode`].
    pub fn from_fixed_point(money: &FixedPointMoney) -> Result<Self, FixedPointError> {
        decode(money)
    }
}

impl TryFrom<&Amount> for FixedPointMoney {
    type Error = FixedPointError;

    fn try_from(amount: &Amount) -> Result<Self, Self::Error> {
        encode(amount)
    }
}

impl TryFrom<Amount> for FixedPointMoney {
    type Error = FixedPointError;

    fn try_from(amount: Amount) -> Result<Self, Self::Error> {
        encode(&amount)
    }
}

impl TryFrom<&FixedPointMoney> for Amount {
    type Error = FixedPointError;

    fn try_from(money: &FixedPointMoney) -> Result<Self, Self::Error> {
        decode(money)
    }
}

impl TryFrom<FixedPointMoney> for Amount {
    type Error = FixedPointError;

    fn try_from(money: FixedPointMoney) -> Result<Self, Self::Error> {
        decode(&money)
    }
}
