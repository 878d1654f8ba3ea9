use thiserror::Error;

/// Errors raised by the vector and shape types.
///
/// Only explicit range violations are errors. Degenerate geometry (e.g. a polygon with fewer than
/// three vertices, or normalising a zero vector) has a defined result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("{what} has {len} entries, index {index} is out of range")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{value} is not representable as {target}")]
    NotRepresentable { value: String, target: &'static str },
}

impl MathError {
    pub(crate) fn index_out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { what, index, len }
    }
}

/// Convenience type alias for results using [`MathError`].
pub type Result<T> = std::result::Result<T, MathError>;
