//! Wire formats for [`Amount`](crate::Amount).
//!
//! | format | encode                     | decode                          |
//! |--------|----------------------------|---------------------------------|
//! | text   | `Display` (`"XYZ 10.123"`) | `FromStr`                       |
//! | binary | `Amount::to_binary`        | `Amount::from_binary`           |
//! | JSON   | `Serialize`, `to_json`     | `Deserialize`, `from_json`      |
//!
//! Every decoder returns a fresh `Amount`; nothing is decoded in place.

mod binary;
mod json;
mod text;

use core::fmt;

pub use binary::{BinaryError, MAX_BINARY_CURRENCY_LEN};
pub use text::TextError;

/// Logs input a decoder refused.
fn rejected(format: &'static str, error: &dyn fmt::Display) {
    tracing::debug!(format, error = %error, "rejected amount");
}
