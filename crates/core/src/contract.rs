//! Programmer-fault assertions shared by [`Amount`](crate::Amount) and
//! [`FixedPointMoney`](crate::FixedPointMoney).
//!
//! These panic rather than return errors. Mixing currencies or aggregating
//! nothing is a logic bug in the caller, not a condition to recover from.

/// Panics if `a` and `b` are not the same currency code.
#[track_caller]
pub(crate) fn assert_same_currency(a: &str, b: &str) {
    assert!(
        a == b,
        "can not operate on amounts in differing currencies ({a} vs {b})"
    );
}

/// Splits off the first element of a variadic argument list, panicking if
/// the list is empty.
#[track_caller]
pub(crate) fn split_first<T>(items: &[T]) -> (&T, &[T]) {
    let Some(split) = items.split_first() else {
        panic!("at least one amount must be provided");
    };
    split
}
