//! Compact binary encoding.
//!
//! ```text
//! +--------+-------------------+-------------------+------------------------+
//! | len u8 | currency (len B)  | scale i64 BE (8B) | unscaled value (>= 1B) |
//! +--------+-------------------+-------------------+------------------------+
//! ```
//!
//! The unscaled value is a two's-complement big-endian integer of any
//! length, and the magnitude is `unscaled * 10^-scale`.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::amount::Amount;
use crate::currency::{CurrencyCode, CurrencyCodeError};

/// The longest currency code, in bytes, that fits the length prefix.
pub const MAX_BINARY_CURRENCY_LEN: usize = 255;

const SCALE_LEN: usize = size_of::<i64>();

/// Errors produced by the binary encoding.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BinaryError {
    /// The currency code does not fit the one-byte length prefix.
    #[error(
        "cannot encode amount to binary representation: currency code is {len} characters long, maximum is {max}",
        max = MAX_BINARY_CURRENCY_LEN
    )]
    CurrencyTooLong {
        /// Length of the currency code in bytes.
        len: usize,
    },
    /// The input contains no bytes at all.
    #[error("cannot decode amount from binary representation: data is empty")]
    Empty,
    /// The input ends before the declared currency code does.
    #[error(
        "cannot decode amount from binary representation: data is shorter than expected, currency code is {declared} bytes but only {available} remain"
    )]
    Truncated {
        /// Currency code length declared by the prefix.
        declared: usize,
        /// Bytes remaining after the prefix.
        available: usize,
    },
    /// The currency code contains a byte outside the ASCII range.
    #[error(
        "cannot decode amount from binary representation: currency code contains non-ASCII byte {byte:#04x}"
    )]
    NonAsciiCurrency {
        /// The first offending byte.
        byte: u8,
    },
    /// The currency code is invalid.
    #[error("cannot decode amount from binary representation: {0}")]
    Currency(#[from] CurrencyCodeError),
    /// The magnitude is shorter than its fixed header.
    #[error(
        "cannot decode amount from binary representation: magnitude is {len} bytes long, expected at least {min}",
        min = SCALE_LEN + 1
    )]
    Magnitude {
        /// Number of magnitude bytes received.
        len: usize,
    },
}

impl Amount {
    /// Encodes the amount in the binary representation.
    ///
    /// # Errors
    ///
    /// Returns [`BinaryError::CurrencyTooLong`] if the currency code is
    /// longer than [`MAX_BINARY_CURRENCY_LEN`] bytes.
    pub fn to_binary(&self) -> Result<Vec<u8>, BinaryError> {
        let code = self.currency_code().as_bytes();
        let len = u8::try_from(code.len())
            .map_err(|_| BinaryError::CurrencyTooLong { len: code.len() })?;

        let (unscaled, scale) = self.magnitude().as_bigint_and_exponent();
        let unscaled = unscaled.to_signed_bytes_be();

        let mut data = Vec::with_capacity(1 + code.len() + SCALE_LEN + unscaled.len());
        data.push(len);
        data.extend_from_slice(code);
        data.extend_from_slice(&scale.to_be_bytes());
        data.extend_from_slice(&unscaled);

        Ok(data)
    }

    /// Decodes an amount from the binary representation.
    ///
    /// The currency code is uppercased before it is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is empty or truncated, if the currency
    /// code is invalid, or if the magnitude is malformed.
    pub fn from_binary(data: &[u8]) -> Result<Self, BinaryError> {
        decode(data).inspect_err(|e| super::rejected("binary", e))
    }
}

fn decode(data: &[u8]) -> Result<Amount, BinaryError> {
    let (&len, rest) = data.split_first().ok_or(BinaryError::Empty)?;
    let declared = usize::from(len);

    let (code, magnitude) = rest
        .split_at_checked(declared)
        .ok_or(BinaryError::Truncated {
            declared,
            available: rest.len(),
        })?;

    if let Some(&byte) = code.iter().find(|b| !b.is_ascii()) {
        return Err(BinaryError::NonAsciiCurrency { byte });
    }
    let code: String = code.iter().copied().map(char::from).collect();
    let currency = CurrencyCode::normalize(&code)?;

    let (scale, unscaled) = magnitude
        .split_first_chunk::<SCALE_LEN>()
        .filter(|(_, unscaled)| !unscaled.is_empty())
        .ok_or(BinaryError::Magnitude {
            len: magnitude.len(),
        })?;

    let magnitude = BigDecimal::new(
        BigInt::from_signed_bytes_be(unscaled),
        i64::from_be_bytes(*scale),
    );

    Ok(Amount::new(currency, magnitude))
}
