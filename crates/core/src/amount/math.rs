use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::Amount;
use crate::contract::{assert_same_currency, split_first};

impl Amount {
    /// Returns the absolute value of the amount.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.with_magnitude(self.magnitude.abs())
    }
}

#[track_caller]
fn assert_nonzero_divisor(divisor: &BigDecimal) {
    assert!(!divisor.is_zero(), "can not divide an amount by zero");
}

impl Neg for &Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        self.with_magnitude(-self.magnitude.clone())
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.currency, -self.magnitude)
    }
}

/// `a + b`. Panics if the currencies differ.
impl Add<&Amount> for &Amount {
    type Output = Amount;

    #[track_caller]
    fn add(self, rhs: &Amount) -> Amount {
        assert_same_currency(self.currency_code(), rhs.currency_code());
        self.with_magnitude(&self.magnitude + &rhs.magnitude)
    }
}

/// `a - b`. Panics if the currencies differ.
impl Sub<&Amount> for &Amount {
    type Output = Amount;

    #[track_caller]
    fn sub(self, rhs: &Amount) -> Amount {
        assert_same_currency(self.currency_code(), rhs.currency_code());
        self.with_magnitude(&self.magnitude - &rhs.magnitude)
    }
}

/// Divides two amounts of the same currency, producing a bare ratio.
/// Panics if the currencies differ or `rhs` is zero.
impl Div<&Amount> for &Amount {
    type Output = BigDecimal;

    #[track_caller]
    fn div(self, rhs: &Amount) -> BigDecimal {
        assert_same_currency(self.currency_code(), rhs.currency_code());
        assert_nonzero_divisor(&rhs.magnitude);
        &self.magnitude / &rhs.magnitude
    }
}

/// Remainder of dividing two amounts of the same currency, as a bare scalar.
/// Panics if the currencies differ or `rhs` is zero.
impl Rem<&Amount> for &Amount {
    type Output = BigDecimal;

    #[track_caller]
    fn rem(self, rhs: &Amount) -> BigDecimal {
        assert_same_currency(self.currency_code(), rhs.currency_code());
        assert_nonzero_divisor(&rhs.magnitude);
        &self.magnitude % &rhs.magnitude
    }
}

/// Scales an amount by a bare scalar.
impl Mul<&BigDecimal> for &Amount {
    type Output = Amount;

    fn mul(self, rhs: &BigDecimal) -> Amount {
        self.with_magnitude(&self.magnitude * rhs)
    }
}

/// Divides an amount by a bare scalar. Panics if `rhs` is zero.
impl Div<&BigDecimal> for &Amount {
    type Output = Amount;

    #[track_caller]
    fn div(self, rhs: &BigDecimal) -> Amount {
        assert_nonzero_divisor(rhs);
        self.with_magnitude(&self.magnitude / rhs)
    }
}

/// Remainder of dividing an amount by a bare scalar. Panics if `rhs` is
/// zero.
impl Rem<&BigDecimal> for &Amount {
    type Output = Amount;

    #[track_caller]
    fn rem(self, rhs: &BigDecimal) -> Amount {
        assert_nonzero_divisor(rhs);
        self.with_magnitude(&self.magnitude % rhs)
    }
}

/// Implements the owned and mixed-ownership forms of a binary operator in
/// terms of the `&Amount op &Rhs` form.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $rhs:ty, $out:ty) => {
        impl $imp<$rhs> for Amount {
            type Output = $out;

            #[track_caller]
            fn $method(self, rhs: $rhs) -> $out {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&$rhs> for Amount {
            type Output = $out;

            #[track_caller]
            fn $method(self, rhs: &$rhs) -> $out {
                (&self).$method(rhs)
            }
        }

        impl $imp<$rhs> for &Amount {
            type Output = $out;

            #[track_caller]
            fn $method(self, rhs: $rhs) -> $out {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, Amount, Amount);
forward_binop!(Sub, sub, Amount, Amount);
forward_binop!(Div, div, Amount, BigDecimal);
forward_binop!(Rem, rem, Amount, BigDecimal);
forward_binop!(Mul, mul, BigDecimal, Amount);
forward_binop!(Div, div, BigDecimal, Amount);
forward_binop!(Rem, rem, BigDecimal, Amount);

/// Returns the sum of the given amounts.
///
/// # Panics
///
/// Panics if `amounts` is empty or the amounts do not share a currency.
#[must_use]
#[track_caller]
pub fn sum(amounts: &[Amount]) -> Amount {
    let (first, rest) = split_first(amounts);

    let mut total = first.magnitude.clone();
    for a in rest {
        assert_same_currency(first.currency_code(), a.currency_code());
        total += &a.magnitude;
    }

    first.with_magnitude(total)
}

/// Returns the mean of the given amounts.
///
/// # Panics
///
/// Panics if `amounts` is empty or the amounts do not share a currency.
#[must_use]
#[track_caller]
pub fn avg(amounts: &[Amount]) -> Amount {
    let total = sum(amounts);
    let count = BigDecimal::from(u64::try_from(amounts.len()).unwrap_or(u64::MAX));
    total / count
}

/// Returns the smallest of the given amounts.
///
/// # Panics
///
/// Panics if `amounts` is empty or the amounts do not share a currency.
#[must_use]
#[track_caller]
pub fn min(amounts: &[Amount]) -> Amount {
    let (first, rest) = split_first(amounts);

    let mut smallest = first;
    for a in rest {
        if a.less_than(smallest) {
            smallest = a;
        }
    }

    smallest.clone()
}

/// Returns the largest of the given amounts.
///
/// # Panics
///
/// Panics if `amounts` is empty or the amounts do not share a currency.
#[must_use]
#[track_caller]
pub fn max(amounts: &[Amount]) -> Amount {
    let (first, rest) = split_first(amounts);

    let mut largest = first;
    for a in rest {
        if a.greater_than(largest) {
            largest = a;
        }
    }

    largest.clone()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn amt(c: &str, m: &str) -> Amount {
        Amount::must_parse(c, m)
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_abs_and_neg() {
        assert_eq!(amt("XYZ", "-1.5").abs(), amt("XYZ", "1.5"));
        assert_eq!(amt("XYZ", "1.5").abs(), amt("XYZ", "1.5"));
        assert_eq!(-amt("XYZ", "1.5"), amt("XYZ", "-1.5"));
        assert_eq!(-&amt("XYZ", "-1.5"), amt("XYZ", "1.5"));
    }

    #[test]
    fn test_add_sub() {
        let a = amt("XYZ", "10.123");
        let b = amt("XYZ", "0.877");
        assert_eq!(&a + &b, amt("XYZ", "11"));
        assert_eq!(&a - &b, amt("XYZ", "9.246"));
        assert_eq!(a.clone() + b.clone() - b, a);
    }

    #[test]
    #[should_panic(expected = "can not operate on amounts in differing currencies (XYZ vs ABC)")]
    fn test_add_panics_on_currency_mismatch() {
        let _ = amt("XYZ", "1") + amt("ABC", "1");
    }

    #[test]
    #[should_panic(expected = "can not operate on amounts in differing currencies (XYZ vs ABC)")]
    fn test_sub_panics_on_currency_mismatch() {
        let _ = amt("XYZ", "1") - amt("ABC", "1");
    }

    #[test]
    fn test_scalar_ops() {
        let a = amt("XYZ", "10");
        assert_eq!(&a * &dec("1.5"), amt("XYZ", "15"));
        assert_eq!(&a / &dec("4"), amt("XYZ", "2.5"));
        assert_eq!(&a % &dec("3"), amt("XYZ", "1"));
        assert_eq!(amt("XYZ", "-10") % dec("3"), amt("XYZ", "-1"));
    }

    #[test]
    fn test_amount_ratio_ops() {
        let a = amt("XYZ", "10");
        let b = amt("XYZ", "4");
        assert_eq!(&a / &b, dec("2.5"));
        assert_eq!(&a % &b, dec("2"));
    }

    #[test]
    #[should_panic(expected = "can not operate on amounts in differing currencies (XYZ vs ABC)")]
    fn test_amount_div_panics_on_currency_mismatch() {
        let _ = amt("XYZ", "1") / amt("ABC", "1");
    }

    #[test]
    #[should_panic(expected = "can not divide an amount by zero")]
    fn test_div_by_zero_panics() {
        let _ = amt("XYZ", "1") / BigDecimal::zero();
    }

    #[test]
    fn test_sum_and_avg() {
        let amounts = [amt("XYZ", "1"), amt("XYZ", "2"), amt("XYZ", "3.5")];
        assert_eq!(sum(&amounts), amt("XYZ", "6.5"));
        assert_eq!(avg(&amounts[..2]), amt("XYZ", "1.5"));
        assert_eq!(
            avg(&[amt("XYZ", "1"), amt("XYZ", "2"), amt("XYZ", "6")]),
            amt("XYZ", "3")
        );
        assert_eq!(sum(&amounts[..1]), amt("XYZ", "1"));
    }

    #[test]
    #[should_panic(expected = "at least one amount must be provided")]
    fn test_sum_empty_panics() {
        let _ = sum(&[]);
    }

    #[test]
    #[should_panic(expected = "at least one amount must be provided")]
    fn test_avg_empty_panics() {
        let _ = avg(&[]);
    }

    #[test]
    #[should_panic(expected = "can not operate on amounts in differing currencies (XYZ vs ABC)")]
    fn test_sum_panics_on_currency_mismatch() {
        let _ = sum(&[amt("XYZ", "1"), amt("ABC", "1")]);
    }

    #[test]
    fn test_min_max() {
        let amounts = [amt("XYZ", "1"), amt("XYZ", "-2"), amt("XYZ", "3")];
        assert_eq!(min(&amounts), amt("XYZ", "-2"));
        assert_eq!(max(&amounts), amt("XYZ", "3"));
    }

    #[test]
    #[should_panic(expected = "at least one amount must be provided")]
    fn test_min_empty_panics() {
        let _ = min(&[]);
    }

    #[test]
    #[should_panic(expected = "can not operate on amounts in differing currencies (ABC vs XYZ)")]
    fn test_max_panics_on_currency_mismatch() {
        let _ = max(&[amt("XYZ", "1"), amt("ABC", "1")]);
    }
}
