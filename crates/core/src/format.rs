//! Decimal, scientific and general notation for decimal magnitudes.
//!
//! [`Amount`](crate::Amount) and [`FixedPointMoney`](crate::FixedPointMoney)
//! both render through here so that `{:.2}` and `{:e}` behave identically
//! for either representation. Every rounding performed here is
//! half-to-even and affects only the rendered text.

use core::fmt;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{Signed, Zero};

/// Significant digits used by the general notation when no precision is
/// given.
const GENERAL_DEFAULT_DIGITS: usize = 21;

/// Renders `value` prefixed by `currency` using a printf-style `verb`.
///
/// Returns `None` if the verb is not supported.
pub(crate) fn render(
    currency: &str,
    value: &BigDecimal,
    verb: char,
    precision: Option<usize>,
) -> Option<String> {
    let body = match verb {
        'v' | 'f' | 'F' => decimal(value, precision),
        'e' => scientific(value, precision, false),
        'E' => scientific(value, precision, true),
        'g' => general(value, precision, false),
        'G' => general(value, precision, true),
        _ => return None,
    };

    Some(format!("{currency} {body}"))
}

/// Placeholder produced for verbs [`render`] does not support.
pub(crate) fn unsupported(verb: char, type_name: &str, value: impl fmt::Display) -> String {
    format!("%!{verb}({type_name}={value})")
}

/// Writes `"<currency> <value>"`, honouring the formatter's precision.
pub(crate) fn write_display(
    f: &mut fmt::Formatter<'_>,
    currency: &str,
    value: &BigDecimal,
) -> fmt::Result {
    write!(f, "{currency} {}", decimal(value, f.precision()))
}

/// Writes `"<currency> <value>"` in scientific notation, honouring the
/// formatter's precision.
pub(crate) fn write_exp(
    f: &mut fmt::Formatter<'_>,
    currency: &str,
    value: &BigDecimal,
    upper: bool,
) -> fmt::Result {
    write!(f, "{currency} {}", scientific(value, f.precision(), upper))
}

/// Plain decimal notation, optionally rounded to `precision` places.
pub(crate) fn decimal(value: &BigDecimal, precision: Option<usize>) -> String {
    match precision {
        Some(p) => value
            .with_scale_round(to_i64(p), RoundingMode::HalfEven)
            .to_plain_string(),
        None => value.to_plain_string(),
    }
}

/// Scientific notation in the style of Rust's `{:e}`, e.g. `1.0129e1`.
pub(crate) fn scientific(value: &BigDecimal, precision: Option<usize>, upper: bool) -> String {
    let marker = if upper { 'E' } else { 'e' };

    if value.is_zero() {
        return match precision {
            Some(p) if p > 0 => format!("0.{}{marker}0", "0".repeat(p)),
            _ => format!("0{marker}0"),
        };
    }

    let (mut digits, exponent) = match precision {
        Some(p) => significand(&round_significant(value, p + 1)),
        None => significand(value),
    };

    if let Some(p) = precision {
        let wanted = p + 1;
        if digits.len() < wanted {
            digits.push_str(&"0".repeat(wanted - digits.len()));
        }
    }

    exponential(value.is_negative(), &digits, exponent, marker)
}

/// General notation: scientific when the exponent is below -4 or at least
/// the number of significant digits, otherwise plain decimal. Trailing zeros
/// are removed in both cases.
pub(crate) fn general(value: &BigDecimal, precision: Option<usize>, upper: bool) -> String {
    if value.is_zero() {
        return "0".to_owned();
    }

    let significant = precision.map_or(GENERAL_DEFAULT_DIGITS, |p| p.max(1));
    let rounded = match precision {
        Some(_) => round_significant(value, significant),
        None => value.clone(),
    };

    let (digits, exponent) = significand(&rounded);

    if exponent < -4 || exponent >= to_i64(significant) {
        let marker = if upper { 'E' } else { 'e' };
        exponential(rounded.is_negative(), &digits, exponent, marker)
    } else {
        rounded.normalized().to_plain_string()
    }
}

/// Rounds a non-zero `value` to `digits` significant digits.
fn round_significant(value: &BigDecimal, digits: usize) -> BigDecimal {
    let (_, exponent) = significand(value);
    let scale = to_i64(digits)
        .saturating_sub(1)
        .saturating_sub(exponent);
    value.with_scale_round(scale, RoundingMode::HalfEven)
}

/// Returns the significant digits of a non-zero `value`, without trailing
/// zeros, and the decimal exponent of the leading digit.
fn significand(value: &BigDecimal) -> (String, i64) {
    let (int, scale) = value.as_bigint_and_exponent();
    let digits = int.magnitude().to_string();
    let exponent = to_i64(digits.len()) - 1 - scale;

    let trimmed = digits.trim_end_matches('0');
    if trimmed.is_empty() {
        return ("0".to_owned(), exponent);
    }

    (trimmed.to_owned(), exponent)
}

fn exponential(negative: bool, digits: &str, exponent: i64, marker: char) -> String {
    let sign = if negative { "-" } else { "" };

    match digits.split_at_checked(1) {
        Some((head, tail)) if !tail.is_empty() => format!("{sign}{head}.{tail}{marker}{exponent}"),
        _ => format!("{sign}{digits}{marker}{exponent}"),
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
