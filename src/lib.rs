//! # Overview
//!
//! This crate provides a generic [left fold][fold], the operation that reduces an ordered
//! sequence to a single value by feeding an accumulator and each element, in order, to a
//! user-supplied combining function. The accumulator's type need not match the elements'.
//!
//! A handful of ready-made combining functions ([minus], [plus], [times], [keep], [concat])
//! cover the common cases, their checked counterparts pair with [try_fold] to stop at the
//! first overflow, and [Sequence] exposes the same reduction as a method on slices.
//!
//! # Example
//!
//! ```rust
//! use left_fold::*;
//!
//! let items = [1, 2, 3, 4, 5];
//!
//! // ((((0 - 1) - 2) - 3) - 4) - 5
//! assert_eq!(fold(items, 0, |accumulator, element| accumulator - element), -15);
//!
//! assert_eq!(fold(items, 1, keep), 1);
//! assert_eq!(fold(items, String::from("Elements:"), concat), "Elements: 1 2 3 4 5");
//! assert_eq!(fold(items, 1, times), 120);
//! assert_eq!(fold(items, 0, plus), 15);
//!
//! // The order in which elements are visited matters.
//! assert_eq!(fold_right(items, String::from("Elements:"), concat), "Elements: 5 4 3 2 1");
//!
//! assert_eq!(try_fold([i32::MAX, 1], 0, checked_plus), Err(Error::Overflow));
//! ```

mod error;
mod fold;
mod joined;
mod operator;
mod sequence;

pub use error::Error;
pub use fold::*;
pub use joined::*;
pub use operator::*;
pub use sequence::*;
