use derive_more::{Display, From, Into};
use std::{fmt, ops::Add};

/// A string that grows by a space-separated element whenever something is added to it.
///
/// # Example
///
/// ```rust
/// use left_fold::{fold, plus, Joined};
///
/// let joined = fold([1, 2, 3, 4, 5], Joined::from("Elements:"), plus);
/// assert_eq!(joined.as_str(), "Elements: 1 2 3 4 5");
/// ```
#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Display, From, Into)]
pub struct Joined(String);

impl Joined {
    /// The text joined so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Joined {
    #[inline]
    fn from(s: &str) -> Self {
        Joined(s.into())
    }
}

impl AsRef<str> for Joined {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T: fmt::Display> Add<T> for Joined {
    type Output = Self;

    fn add(self, element: T) -> Self {
        Joined(format!("{self} {element}"))
    }
}
