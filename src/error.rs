//! Error types reported by the checked accessors.

use thiserror::Error;

/// Returned by [`Optional::try_unwrap`](crate::Optional::try_unwrap) when the
/// optional holds no value.
///
/// This is the only recoverable failure of an [`Optional`](crate::Optional).
/// Every other question about its state is answered by a boolean query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("attempted to unwrap an empty Optional")]
pub struct EmptyAccessError;

/// Returned by the checked `at` accessors of the containers when the index
/// is not smaller than the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("index {index} out of bounds for array with length {len}")]
pub struct OutOfBoundsError {
    pub index: usize,
    pub len: usize,
}
