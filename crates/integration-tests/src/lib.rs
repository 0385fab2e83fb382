//! Integration tests for Moneta.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p moneta-integration-tests
//!
//! # With diagnostics for rejected input
//! RUST_LOG=moneta_core=debug cargo test -p moneta-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `wire_formats` - Text, binary and JSON encodings end to end
//! - `properties` - Property-based checks of the codec, arithmetic and
//!   normalization
//! - `interop` - Conversions to and from `rust_decimal`

use std::str::FromStr;

use bigdecimal::BigDecimal;
use moneta_core::Amount;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly `tracing` subscriber, once per test binary.
///
/// The filter is read from `RUST_LOG` and defaults to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call in the same binary finds a subscriber already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Builds an amount from literals.
///
/// # Panics
///
/// Panics if either component is invalid.
#[must_use]
#[track_caller]
pub fn amount(currency: &str, magnitude: &str) -> Amount {
    Amount::must_parse(currency, magnitude)
}

/// Parses a decimal literal.
///
/// # Panics
///
/// Panics if `s` is not a decimal number.
#[must_use]
#[track_caller]
pub fn decimal(s: &str) -> BigDecimal {
    match BigDecimal::from_str(s) {
        Ok(d) => d,
        Err(e) => panic!("invalid decimal literal ({s}): {e}"),
    }
}
