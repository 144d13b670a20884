//! Error types for trie operations.

use thiserror::Error;

/// Result type for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;

/// Errors returned by [`XFastTrie`](crate::XFastTrie).
///
/// Every error is raised before the structure is touched, so a failed call
/// leaves the trie exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    /// Value is negative or does not fit in the universe.
    #[error("value {value} out of range for a {width}-bit universe")]
    OutOfRange {
        /// Offending value.
        value: i128,
        /// Universe width in bits.
        width: u32,
    },

    /// Byte string is wider than the universe.
    #[error("{bytes}-byte key does not fit in a {width}-bit universe")]
    KeyTooLong {
        /// Length of the byte string.
        bytes: usize,
        /// Universe width in bits.
        width: u32,
    },

    /// Value is not in the set.
    #[error("value {0} not found")]
    NotFound(u64),

    /// Universe width outside `1..=64`.
    #[error("invalid universe width: {0} (expected 1..=64)")]
    InvalidWidth(u32),
}
