use num_traits::One;
use std::ops::Add;

/// A contiguous sequence that can be reduced one borrowed element at a time.
///
/// # Example
///
/// ```rust
/// use left_fold::Sequence;
///
/// let items = vec![1, 2, 3, 4, 5];
///
/// assert_eq!(items.fold(0, |n, &x| n - x), -15);
/// assert_eq!(items.sum(|&x| x), 15);
/// assert_eq!(items.product(|&x| x), 120);
/// assert_eq!(items.count(), 5);
/// ```
pub trait Sequence {
    /// The type of the elements in this [Sequence].
    type Element;

    /// Reduces this [Sequence] from left to right, see [fold][crate::fold()].
    fn fold<R, F: FnMut(R, &Self::Element) -> R>(&self, initial: R, operation: F) -> R;

    /// Adds up `f` over every element, starting from the default value of `N`.
    ///
    /// The default value of `N` is assumed to be the additive identity (i.e. _zero_).
    #[inline]
    fn sum<N: Default + Add<Output = N>, F: FnMut(&Self::Element) -> N>(&self, mut f: F) -> N {
        self.fold(N::default(), |n, e| n + f(e))
    }

    /// Multiplies `f` over every element, starting from _one_.
    #[inline]
    fn product<N: One, F: FnMut(&Self::Element) -> N>(&self, mut f: F) -> N {
        self.fold(N::one(), |n, e| n * f(e))
    }

    /// The number of elements in this [Sequence].
    #[inline]
    fn count(&self) -> usize {
        self.sum(|_| 1)
    }
}

impl<T> Sequence for [T] {
    type Element = T;

    #[inline]
    fn fold<R, F: FnMut(R, &T) -> R>(&self, initial: R, operation: F) -> R {
        crate::fold(self, initial, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fold, plus};
    use proptest::collection::vec;
    use test_strategy::proptest;

    #[proptest]
    fn count_equals_length(s: Vec<char>) {
        assert_eq!(s.count(), s.len());
    }

    #[proptest]
    fn folding_a_slice_borrows_its_elements(s: Vec<String>) {
        let n = s.fold(0, |n, e| n + e.len());
        assert_eq!(n, fold(s, 0, |n, e| n + e.len()));
    }

    #[proptest]
    fn sum_agrees_with_fold(s: Vec<i16>) {
        let s: Vec<_> = s.into_iter().map(i64::from).collect();
        assert_eq!(s.sum(|&x| x), fold(&s, 0, plus));
    }

    #[proptest]
    fn product_agrees_with_fold(#[strategy(vec(-9i64..=9, ..12))] s: Vec<i64>) {
        assert_eq!(s.product(|&x| x), s.iter().product::<i64>());
    }

    #[proptest]
    fn keeping_the_accumulator_ignores_the_elements(s: Vec<u8>, i: u32) {
        assert_eq!(s.fold(i, |n, _| n), i);
    }

    #[test]
    fn the_empty_sequence_has_neutral_reductions() {
        let s: &[u32] = &[];
        assert_eq!(s.count(), 0);
        assert_eq!(s.sum(|&x| x), 0);
        assert_eq!(s.product(|&x| x), 1);
    }

    #[test]
    fn arrays_are_sequences() {
        assert_eq!([1, 2, 3, 4, 5].product(|&x| x), 120);
        assert_eq!(["a", "bc", "def"].sum(|s| s.len()), 6);
    }
}
