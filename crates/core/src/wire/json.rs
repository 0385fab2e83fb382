//! JSON encoding, by way of [`FixedPointMoney`].
//!
//! An [`Amount`] serializes exactly as its fixed-point form does:
//!
//! ```json
//! {"currency_code": "XYZ", "units": "10", "nanos": 123000000}
//! ```
//!
//! The serde impls work with any format. The [`Amount::to_json`] and
//! [`Amount::from_json`] helpers are a convenience for the common case.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

use crate::amount::Amount;
use crate::codec;
use crate::fixed::FixedPointMoney;

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let money = codec::encode(self).map_err(<S::Error as ser::Error>::custom)?;
        money.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let money = FixedPointMoney::deserialize(deserializer)?;
        codec::decode(&money).map_err(de::Error::custom)
    }
}

impl Amount {
    /// Encodes the amount as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount can not be represented in fixed-point
    /// form; see [`codec::encode`].
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decodes an amount from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a JSON money object, or if it
    /// fails [`codec::decode`].
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).inspect_err(|e| super::rejected("json", e))
    }
}
