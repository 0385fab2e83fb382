use core::cmp::Ordering;

use num_traits::{Signed, Zero};

use super::Amount;
use crate::contract::assert_same_currency;

impl Amount {
    /// Returns true if the amount has a magnitude of zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Returns true if the amount has a positive magnitude.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.magnitude.is_positive()
    }

    /// Returns true if the amount has a negative magnitude.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.magnitude.is_negative()
    }

    /// Compares the magnitudes of `self` and `other`.
    ///
    /// # Panics
    ///
    /// Panics if the amounts do not use the same currency.
    #[must_use]
    #[track_caller]
    pub fn compare(&self, other: &Self) -> Ordering {
        assert_same_currency(self.currency_code(), other.currency_code());
        self.magnitude.cmp(&other.magnitude)
    }

    /// Returns true if `self` and `other` have the same magnitude.
    ///
    /// To check equality between amounts that may have differing currencies,
    /// use [`Amount::identical_to`] instead.
    ///
    /// # Panics
    ///
    /// Panics if the amounts do not use the same currency.
    #[must_use]
    #[track_caller]
    pub fn equal_to(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Returns true if `self` and `other` use the same currency and have the
    /// same magnitude. Never panics.
    #[must_use]
    pub fn identical_to(&self, other: &Self) -> bool {
        self.currency == other.currency && self.magnitude == other.magnitude
    }

    /// Returns true if `self < other`.
    ///
    /// # Panics
    ///
    /// Panics if the amounts do not use the same currency.
    #[must_use]
    #[track_caller]
    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Returns true if `self <= other`.
    ///
    /// # Panics
    ///
    /// Panics if the amounts do not use the same currency.
    #[must_use]
    #[track_caller]
    pub fn less_than_or_equal_to(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }

    /// Returns true if `self > other`.
    ///
    /// # Panics
    ///
    /// Panics if the amounts do not use the same currency.
    #[must_use]
    #[track_caller]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Returns true if `self >= other`.
    ///
    /// # Panics
    ///
    /// Panics if the amounts do not use the same currency.
    #[must_use]
    #[track_caller]
    pub fn greater_than_or_equal_to(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Less
    }

    /// Total order over amounts of any currency: by currency code, then by
    /// magnitude.
    #[must_use]
    pub fn lexical_cmp(&self, other: &Self) -> Ordering {
        self.currency
            .cmp(&other.currency)
            .then_with(|| self.magnitude.cmp(&other.magnitude))
    }

    /// Returns true if `self` should appear before `other` in a sorted list.
    ///
    /// There is no requirement that the amounts use the same currency.
    #[must_use]
    pub fn lexically_less_than(&self, other: &Self) -> bool {
        self.lexical_cmp(other) == Ordering::Less
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lexical_cmp(other)
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
