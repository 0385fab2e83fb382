use core::cmp::Ordering;

use super::FixedPointMoney;
use crate::contract::assert_same_currency;

impl FixedPointMoney {
    /// Returns true if the value has a magnitude of zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.units == 0 && self.nanos == 0
    }

    /// Returns true if the value has a positive magnitude.
    ///
    /// # Panics
    ///
    /// Panics if the signs of the components disagree.
    #[must_use]
    #[track_caller]
    pub fn is_positive(&self) -> bool {
        self.assert_signs_agree();
        self.units > 0 || self.nanos > 0
    }

    /// Returns true if the value has a negative magnitude.
    ///
    /// # Panics
    ///
    /// Panics if the signs of the components disagree.
    #[must_use]
    #[track_caller]
    pub fn is_negative(&self) -> bool {
        self.assert_signs_agree();
        self.units < 0 || self.nanos < 0
    }

    /// Compares the magnitudes of `self` and `other`.
    ///
    /// Denormalized values compare as their normalized forms: units first,
    /// then nanos.
    ///
    /// # Panics
    ///
    /// Panics if the values do not use the same currency, or if the signs of
    /// either value's components disagree.
    #[must_use]
    #[track_caller]
    pub fn compare(&self, other: &Self) -> Ordering {
        assert_same_currency(&self.currency_code, &other.currency_code);
        self.compare_magnitude(other)
    }

    /// Returns true if `self` and `other` have the same magnitude.
    ///
    /// # Panics
    ///
    /// As for [`FixedPointMoney::compare`].
    #[must_use]
    #[track_caller]
    pub fn equal_to(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Returns true if `self` and `other` use the same currency and have the
    /// same magnitude. Differing currencies yield `false` rather than a
    /// panic.
    ///
    /// # Panics
    ///
    /// Panics if the signs of either value's components disagree.
    #[must_use]
    #[track_caller]
    pub fn identical_to(&self, other: &Self) -> bool {
        self.currency_code == other.currency_code
            && self.compare_magnitude(other) == Ordering::Equal
    }

    /// Returns true if `self < other`.
    ///
    /// # Panics
    ///
    /// As for [`FixedPointMoney::compare`].
    #[must_use]
    #[track_caller]
    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Returns true if `self <= other`.
    ///
    /// # Panics
    ///
    /// As for [`FixedPointMoney::compare`].
    #[must_use]
    #[track_caller]
    pub fn less_than_or_equal_to(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }

    /// Returns true if `self > other`.
    ///
    /// # Panics
    ///
    /// As for [`FixedPointMoney::compare`].
    #[must_use]
    #[track_caller]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Returns true if `self >= other`.
    ///
    /// # Panics
    ///
    /// As for [`FixedPointMoney::compare`].
    #[must_use]
    #[track_caller]
    pub fn greater_than_or_equal_to(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Less
    }

    /// Total order over values of any currency: by currency code, then by
    /// magnitude.
    ///
    /// # Panics
    ///
    /// Panics if the currencies match and the signs of either value's
    /// components disagree.
    #[must_use]
    #[track_caller]
    pub fn lexical_cmp(&self, other: &Self) -> Ordering {
        self.currency_code
            .cmp(&other.currency_code)
            .then_with(|| self.compare_magnitude(other))
    }

    /// Returns true if `self` should appear before `other` in a sorted list.
    ///
    /// There is no requirement that the values use the same currency.
    ///
    /// # Panics
    ///
    /// As for [`FixedPointMoney::lexical_cmp`].
    #[must_use]
    #[track_caller]
    pub fn lexically_less_than(&self, other: &Self) -> bool {
        self.lexical_cmp(other) == Ordering::Less
    }

    /// Compares magnitudes, ignoring currency.
    ///
    /// Two sign-agreeing values have equal normalized `(units, nanos)` pairs
    /// exactly when their totals in nanos are equal, so comparing the
    /// 128-bit totals orders them the same way without risking a units
    /// overflow while normalizing.
    #[track_caller]
    fn compare_magnitude(&self, other: &Self) -> Ordering {
        self.assert_signs_agree();
        other.assert_signs_agree();
        self.total_nanos().cmp(&other.total_nanos())
    }
}
