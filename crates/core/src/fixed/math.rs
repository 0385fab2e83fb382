use core::ops::{Add, Neg, Sub};

use super::{FixedPointError, FixedPointMoney};
use crate::contract::{assert_same_currency, split_first};

impl FixedPointMoney {
    /// Returns the normalized sum of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`FixedPointError::Overflow`] if the sum does not fit the
    /// units component.
    ///
    /// # Panics
    ///
    /// Panics if the values do not use the same currency, or if the signs of
    /// either value's components disagree.
    #[track_caller]
    pub fn checked_add(&self, other: &Self) -> Result<Self, FixedPointError> {
        self.assert_operands(other);
        Self::from_total_nanos(&self.currency_code, self.total_nanos() + other.total_nanos())
    }

    /// Returns the normalized difference of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`FixedPointError::Overflow`] if the difference does not fit
    /// the units component.
    ///
    /// # Panics
    ///
    /// As for [`FixedPointMoney::checked_add`].
    #[track_caller]
    pub fn checked_sub(&self, other: &Self) -> Result<Self, FixedPointError> {
        self.assert_operands(other);
        Self::from_total_nanos(&self.currency_code, self.total_nanos() - other.total_nanos())
    }

    /// Returns the normalized negation of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`FixedPointError::Overflow`] if the negation does not fit the
    /// units component, which only happens for `units == i64::MIN`.
    ///
    /// # Panics
    ///
    /// Panics if the signs of the components disagree.
    #[track_caller]
    pub fn checked_neg(&self) -> Result<Self, FixedPointError> {
        self.assert_signs_agree();
        Self::from_total_nanos(&self.currency_code, -self.total_nanos())
    }

    /// Returns the absolute value of `self`, normalized.
    ///
    /// # Panics
    ///
    /// Panics if the signs of the components disagree, or if the result
    /// overflows.
    #[must_use]
    #[track_caller]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.normalized_or_panic()
        }
    }

    #[track_caller]
    fn assert_operands(&self, other: &Self) {
        assert_same_currency(&self.currency_code, &other.currency_code);
        self.assert_signs_agree();
        other.assert_signs_agree();
    }

    #[track_caller]
    fn normalized_or_panic(&self) -> Self {
        match self.normalized() {
            Ok(n) => n.into_owned(),
            Err(e) => panic!("{e}"),
        }
    }
}

#[track_caller]
fn or_panic(result: Result<FixedPointMoney, FixedPointError>) -> FixedPointMoney {
    match result {
        Ok(m) => m,
        Err(e) => panic!("{e}"),
    }
}

impl Add for &FixedPointMoney {
    type Output = FixedPointMoney;

    /// # Panics
    ///
    /// Panics where [`FixedPointMoney::checked_add`] panics or fails.
    #[track_caller]
    fn add(self, rhs: Self) -> FixedPointMoney {
        or_panic(self.checked_add(rhs))
    }
}

impl Add for FixedPointMoney {
    type Output = Self;

    #[track_caller]
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub for &FixedPointMoney {
    type Output = FixedPointMoney;

    /// # Panics
    ///
    /// Panics where [`FixedPointMoney::checked_sub`] panics or fails.
    #[track_caller]
    fn sub(self, rhs: Self) -> FixedPointMoney {
        or_panic(self.checked_sub(rhs))
    }
}

impl Sub for FixedPointMoney {
    type Output = Self;

    #[track_caller]
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Neg for &FixedPointMoney {
    type Output = FixedPointMoney;

    #[track_caller]
    fn neg(self) -> FixedPointMoney {
        or_panic(self.checked_neg())
    }
}

impl Neg for FixedPointMoney {
    type Output = Self;

    #[track_caller]
    fn neg(self) -> Self {
        -&self
    }
}

/// Returns the normalized sum of `values`.
///
/// # Panics
///
/// Panics if `values` is empty, if the values do not all use the same
/// currency, if any value's signs disagree, or if the sum overflows.
#[must_use]
#[track_caller]
pub fn sum(values: &[FixedPointMoney]) -> FixedPointMoney {
    let (first, rest) = split_first(values);
    first.assert_signs_agree();

    let mut total = first.total_nanos();
    for value in rest {
        first.assert_operands(value);
        total += value.total_nanos();
    }

    or_panic(FixedPointMoney::from_total_nanos(&first.currency_code, total))
}

/// Returns the smallest of `values`, normalized.
///
/// # Panics
///
/// Panics if `values` is empty, if the values do not all use the same
/// currency, or if any value's signs disagree.
#[must_use]
#[track_caller]
pub fn min(values: &[FixedPointMoney]) -> FixedPointMoney {
    let (first, rest) = split_first(values);
    let mut least = first;
    for value in rest {
        if value.less_than(least) {
            least = value;
        }
    }
    least.normalized_or_panic()
}

/// Returns the largest of `values`, normalized.
///
/// # Panics
///
/// Panics if `values` is empty, if the values do not all use the same
/// currency, or if any value's signs disagree.
#[must_use]
#[track_caller]
pub fn max(values: &[FixedPointMoney]) -> FixedPointMoney {
    let (first, rest) = split_first(values);
    let mut greatest = first;
    for value in rest {
        if value.greater_than(greatest) {
            greatest = value;
        }
    }
    greatest.normalized_or_panic()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn money(units: i64, nanos: i32) -> FixedPointMoney {
        FixedPointMoney::new("XYZ", units, nanos)
    }

    #[test]
    fn test_add() {
        for (a, b, want) in [
            (money(0, 0), money(0, 0), money(0, 0)),
            (money(1, 0), money(2, 0), money(3, 0)),
            (money(0, 400_000_000), money(0, 700_000_000), money(1, 100_000_000)),
            (money(1, 0), money(0, -500_000_000), money(0, 500_000_000)),
            (money(-1, 0), money(0, 500_000_000), money(0, -500_000_000)),
            (money(-1, -600_000_000), money(-1, -600_000_000), money(-3, -200_000_000)),
            (money(1, 1_500_000_000), money(0, 0), money(2, 500_000_000)),
        ] {
            assert_eq!(&a + &b, want, "{a:?} + {b:?}");
            assert_eq!(&b + &a, want, "{b:?} + {a:?}");
        }
    }

    #[test]
    fn test_sub() {
        for (a, b, want) in [
            (money(3, 0), money(2, 0), money(1, 0)),
            (money(1, 0), money(0, 500_000_000), money(0, 500_000_000)),
            (money(0, 0), money(1, 1), money(-1, -1)),
            (money(-1, -500_000_000), money(-1, -500_000_000), money(0, 0)),
        ] {
            assert_eq!(a.clone() - b.clone(), want, "{a:?} - {b:?}");
        }
    }

    #[test]
    fn test_checked_overflow() {
        assert_eq!(
            money(i64::MAX, 999_999_999).checked_add(&money(0, 1)),
            Err(FixedPointError::Overflow)
        );
        assert_eq!(
            money(i64::MIN, -999_999_999).checked_sub(&money(0, 1)),
            Err(FixedPointError::Overflow)
        );
        assert_eq!(
            money(i64::MIN, 0).checked_sub(&money(0, 1)).unwrap(),
            money(i64::MIN, -1)
        );
        assert_eq!(money(i64::MIN, 0).checked_neg(), Err(FixedPointError::Overflow));
        assert_eq!(
            money(i64::MAX, 0).checked_add(&money(i64::MIN, 0)).unwrap(),
            money(-1, 0)
        );
    }

    #[test]
    #[should_panic(expected = "units component overflows the 64-bit range")]
    fn test_add_panics_on_overflow() {
        let _ = money(i64::MAX, 999_999_999) + money(0, 1);
    }

    #[test]
    #[should_panic(expected = "can not operate on amounts in differing currencies (XYZ vs ABC)")]
    fn test_add_panics_on_currency_mismatch() {
        let _ = money(1, 0) + FixedPointMoney::new("ABC", 1, 0);
    }

    #[test]
    #[should_panic(
        expected = "sign of units component (1) does not agree with sign of nanos component (-1)"
    )]
    fn test_sub_panics_on_sign_mismatch() {
        let _ = money(0, 0) - money(1, -1);
    }

    #[test]
    fn test_neg_and_abs() {
        assert_eq!(-money(1, 500_000_000), money(-1, -500_000_000));
        assert_eq!(-money(0, 0), money(0, 0));
        assert_eq!(money(-1, -500_000_000).abs(), money(1, 500_000_000));
        assert_eq!(money(1, 1_500_000_000).abs(), money(2, 500_000_000));
        assert_eq!(money(0, 0).abs(), money(0, 0));
    }

    #[test]
    fn test_sum_min_max() {
        let values = [
            money(1, 500_000_000),
            money(-2, 0),
            money(0, 1_250_000_000),
        ];

        assert_eq!(sum(&values), money(0, 750_000_000));
        assert_eq!(min(&values), money(-2, 0));
        assert_eq!(max(&values), money(1, 500_000_000));
        assert_eq!(sum(&values[..1]), money(1, 500_000_000));
    }

    #[test]
    fn test_min_max_normalize_result() {
        let values = [money(1, 1_500_000_000), money(1, 0)];
        assert_eq!(max(&values), money(2, 500_000_000));
        assert_eq!(min(&values), money(1, 0));
    }

    #[test]
    #[should_panic(expected = "at least one amount must be provided")]
    fn test_sum_panics_on_empty() {
        let _ = sum(&[]);
    }

    #[test]
    #[should_panic(expected = "can not operate on amounts in differing currencies (ABC vs XYZ)")]
    fn test_max_panics_on_currency_mismatch() {
        let _ = max(&[money(1, 0), FixedPointMoney::new("ABC", 2, 0)]);
    }
}
