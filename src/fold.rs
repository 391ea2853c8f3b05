/// Reduces a sequence to a single value by applying `operation` to each element in order.
///
/// The first call receives `initial` along with the first element, every subsequent call
/// receives the result of the previous one along with the next element. An empty sequence
/// yields `initial` unchanged.
///
/// Whatever the operation does, including panicking, is left for the caller to observe.
///
/// # Example
///
/// ```rust
/// use left_fold::{fold, minus};
///
/// assert_eq!(fold([1, 2, 3, 4, 5], 0, minus), -15);
/// assert_eq!(fold(Vec::<u8>::new(), 42, minus), 42);
/// ```
#[inline]
pub fn fold<I, R, F>(sequence: I, initial: R, mut operation: F) -> R
where
    I: IntoIterator,
    F: FnMut(R, I::Item) -> R,
{
    let mut accumulator = initial;
    for element in sequence {
        accumulator = operation(accumulator, element);
    }

    accumulator
}

/// Like [fold], but stops at the first error returned by `operation`.
///
/// Elements past the one that failed are never visited.
#[inline]
pub fn try_fold<I, R, E, F>(sequence: I, initial: R, mut operation: F) -> Result<R, E>
where
    I: IntoIterator,
    F: FnMut(R, I::Item) -> Result<R, E>,
{
    let mut accumulator = initial;
    for element in sequence {
        accumulator = operation(accumulator, element)?;
    }

    Ok(accumulator)
}

/// Like [fold], but visits the elements from last to first.
#[inline]
pub fn fold_right<I, R, F>(sequence: I, initial: R, operation: F) -> R
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(R, I::Item) -> R,
{
    fold(sequence.into_iter().rev(), initial, operation)
}
