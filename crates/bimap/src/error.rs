#![forbid(unsafe_code)]

use crate::Side;

/// Represents all possible errors that can occur in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The key passed to [`at_first`](crate::BiMap::at_first) or
    /// [`at_second`](crate::BiMap::at_second) is not in the map.
    #[error("key not found in {side} index")]
    NotFound { side: Side },
}

/// A broken invariant reported by [`BiMap::validate`](crate::BiMap::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("sizes disagree: {pairs} pairs, {first} first keys, {second} second keys")]
    SizeMismatch {
        pairs: usize,
        first: usize,
        second: usize,
    },

    #[error("{side} key of a stored pair does not resolve back to that pair")]
    BrokenLink { side: Side },

    #[error("{side} index refers to an erased pair")]
    Dangling { side: Side },

    #[error("{side} index order visits {visited} entries, expected {expected}")]
    OrderMismatch {
        side: Side,
        visited: usize,
        expected: usize,
    },
}
