//! Currency code type.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Errors that can occur when validating a [`CurrencyCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyCodeError {
    /// The input string is empty.
    #[error(
        "currency code is empty, codes must consist only of 3 or more uppercase ASCII letters"
    )]
    Empty,
    /// The input is too short or contains something other than `A`-`Z`.
    #[error(
        "currency code ({code}) is invalid, codes must consist only of 3 or more uppercase ASCII letters"
    )]
    Invalid {
        /// The rejected code, verbatim.
        code: String,
    },
}

/// Returns an error if `code` is not a valid currency code.
///
/// A valid currency code is at least 3 characters long and consists entirely
/// of uppercase ASCII letters. The check is byte-exact; no case folding is
/// performed.
///
/// # Errors
///
/// Returns [`CurrencyCodeError::Empty`] for an empty string and
/// [`CurrencyCodeError::Invalid`] for anything else that is not a code.
pub fn validate(code: &str) -> Result<(), CurrencyCodeError> {
    if code.is_empty() {
        return Err(CurrencyCodeError::Empty);
    }

    if code.len() >= CurrencyCode::MIN_LENGTH && code.bytes().all(|b| b.is_ascii_uppercase()) {
        return Ok(());
    }

    Err(CurrencyCodeError::Invalid {
        code: code.to_owned(),
    })
}

/// A validated currency code.
///
/// Codes SHOULD be ISO-4217 3-letter codes where the currency is defined by
/// ISO-4217. Non-standard currencies SHOULD use a code beginning with `X`.
///
/// ## Constraints
///
/// - At least 3 characters
/// - Only the uppercase ASCII letters `A`-`Z`
///
/// Comparison, ordering and hashing are byte-exact.
///
/// ## Examples
///
/// ```
/// use moneta_core::CurrencyCode;
///
/// assert!(CurrencyCode::parse("USD").is_ok());
/// assert!(CurrencyCode::parse("XBTC").is_ok());
///
/// assert!(CurrencyCode::parse("").is_err());    // empty
/// assert!(CurrencyCode::parse("US").is_err());  // too short
/// assert!(CurrencyCode::parse("usd").is_err()); // lowercase
///
/// // `normalize` uppercases before validating.
/// assert_eq!(CurrencyCode::normalize("usd").unwrap().as_str(), "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Minimum length of a currency code.
    pub const MIN_LENGTH: usize = 3;

    /// The code used when none has been specified.
    pub const DEFAULT: &'static str = "USD";

    /// Parse a `CurrencyCode`, requiring it to already be uppercase.
    ///
    /// # Errors
    ///
    /// Returns an error if `code` fails [`validate`].
    pub fn parse(code: &str) -> Result<Self, CurrencyCodeError> {
        validate(code)?;
        Ok(Self(code.to_owned()))
    }

    /// Uppercase `code`, then parse it.
    ///
    /// # Errors
    ///
    /// Returns an error if the uppercased code fails [`validate`].
    pub fn normalize(code: &str) -> Result<Self, CurrencyCodeError> {
        let upper = code.to_ascii_uppercase();
        validate(&upper)?;
        Ok(Self(upper))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `CurrencyCode` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = CurrencyCodeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CurrencyCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        validate(&s).map_err(<D::Error as serde::de::Error>::custom)?;
        Ok(Self(s))
    }
}
