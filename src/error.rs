use thiserror::Error;

/// The ways a checked operation can fail.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The result does not fit in the accumulator's type.
    #[error("arithmetic overflow")]
    Overflow,
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
