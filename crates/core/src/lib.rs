//! Moneta Core - Immutable amounts of money.
//!
//! This crate provides a currency-tagged decimal type and the wire formats
//! used to exchange it:
//! - [`Amount`] - a currency code plus an arbitrary-precision magnitude
//! - [`FixedPointMoney`] - the `units + nanos` form used on the wire
//! - [`codec`] - the lossless conversion between the two
//!
//! # Architecture
//!
//! The crate contains only values and pure functions - no I/O, no global
//! mutable state. Every type is `Send + Sync` and every operation returns a
//! new value.
//!
//! Failures come in two kinds:
//! - Data errors (malformed codes, overflow, precision loss, bad wire bytes)
//!   are returned as typed errors.
//! - Contract violations (mixing currencies, aggregating an empty list,
//!   dividing by zero) panic.
//!
//! # Features
//!
//! - `rust-decimal` - conversions to and from `rust_decimal::Decimal`
//!
//! # Modules
//!
//! - [`codec`] - Fixed-point encode and decode
//! - [`fixed`] - Operations on fixed-point values without decimal conversion

#![cfg_attr(not(test), forbid(unsafe_code))]

mod amount;
pub mod codec;
mod contract;
mod currency;
pub mod fixed;
mod format;
#[cfg(feature = "rust-decimal")]
mod interop;
mod wire;

pub use amount::{Amount, ParseAmountError, avg, max, min, sum};
pub use currency::{CurrencyCode, CurrencyCodeError, validate as validate_currency_code};
pub use fixed::{FixedPointError, FixedPointMoney, NANOS_PER_UNIT};
#[cfg(feature = "rust-decimal")]
pub use interop::DecimalRangeError;
pub use wire::{BinaryError, MAX_BINARY_CURRENCY_LEN, TextError};

pub use bigdecimal::BigDecimal;
