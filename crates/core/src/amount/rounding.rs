use bigdecimal::RoundingMode;

use super::Amount;

impl Amount {
    /// Returns the nearest integer amount less than or equal to `self`.
    #[must_use]
    pub fn floor(&self) -> Self {
        self.round_with(0, RoundingMode::Floor)
    }

    /// Returns the nearest integer amount greater than or equal to `self`.
    #[must_use]
    pub fn ceil(&self) -> Self {
        self.round_with(0, RoundingMode::Ceiling)
    }

    /// Truncates the amount to `places` decimal places without rounding.
    ///
    /// A negative `places` truncates to the `-places`'th integer place.
    #[must_use]
    pub fn truncate(&self, places: i64) -> Self {
        self.round_with(places, RoundingMode::Down)
    }

    /// Rounds the amount to `places` decimal places, rounding halves away
    /// from zero.
    ///
    /// If `places` is negative the result is rounded to the `-places`'th
    /// integer place, so `543` rounded to `-1` places is `540`.
    #[must_use]
    pub fn round(&self, places: i64) -> Self {
        self.round_with(places, RoundingMode::HalfUp)
    }

    /// Rounds the amount to `places` decimal places, rounding halves towards
    /// the even neighbour ("banker's rounding").
    ///
    /// If `places` is negative the result is rounded to the `-places`'th
    /// integer place.
    #[must_use]
    pub fn round_bank(&self, places: i64) -> Self {
        self.round_with(places, RoundingMode::HalfEven)
    }

    fn round_with(&self, places: i64, mode: RoundingMode) -> Self {
        let rounded = self.magnitude.with_scale_round(places, mode);

        // A negative scale is an implementation detail of the rounding, keep
        // the result an ordinary integer.
        if places < 0 {
            return self.with_magnitude(rounded.with_scale(0));
        }

        self.with_magnitude(rounded)
    }
}
