use crate::error::{Error, Result};
use num_traits::{CheckedAdd, CheckedMul, CheckedSub};
use std::fmt::Display;
use std::ops::{Add, Mul, Sub};

/// Subtracts the element from the accumulator.
#[inline]
pub fn minus<R: Sub<T, Output = R>, T>(accumulator: R, element: T) -> R {
    accumulator - element
}

/// Adds the element to the accumulator.
#[inline]
pub fn plus<R: Add<T, Output = R>, T>(accumulator: R, element: T) -> R {
    accumulator + element
}

/// Multiplies the accumulator by the element.
#[inline]
pub fn times<R: Mul<T, Output = R>, T>(accumulator: R, element: T) -> R {
    accumulator * element
}

/// Returns the accumulator untouched, whatever the element.
#[inline]
pub fn keep<R, T>(accumulator: R, _: T) -> R {
    accumulator
}

/// Appends a single space followed by the element to the accumulator.
///
/// See [Joined][crate::Joined] for an accumulator that does the same through [plus].
#[inline]
pub fn concat<T: Display>(accumulator: String, element: T) -> String {
    format!("{accumulator} {element}")
}

/// Like [plus], but fails with [Error::Overflow] instead of overflowing.
///
/// # Example
///
/// ```rust
/// use left_fold::{checked_plus, try_fold, Error};
///
/// assert_eq!(try_fold([1u8, 2, 3], 0, checked_plus), Ok(6));
/// assert_eq!(try_fold([255u8, 1], 0, checked_plus), Err(Error::Overflow));
/// ```
#[inline]
pub fn checked_plus<N: CheckedAdd>(accumulator: N, element: N) -> Result<N> {
    accumulator.checked_add(&element).ok_or(Error::Overflow)
}

/// Like [minus], but fails with [Error::Overflow] instead of overflowing.
#[inline]
pub fn checked_minus<N: CheckedSub>(accumulator: N, element: N) -> Result<N> {
    accumulator.checked_sub(&element).ok_or(Error::Overflow)
}

/// Like [times], but fails with [Error::Overflow] instead of overflowing.
#[inline]
pub fn checked_times<N: CheckedMul>(accumulator: N, element: N) -> Result<N> {
    accumulator.checked_mul(&element).ok_or(Error::Overflow)
}
