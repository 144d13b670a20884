//! Construction options for [`XFastTrie`](crate::XFastTrie).

use crate::error::{Result, TrieError};

/// Widest supported universe, in bits.
pub const MAX_WIDTH: u32 = u64::BITS;

/// Configuration for a trie instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieConfig {
    /// Universe width in bits (default: 64).
    pub width: u32,

    /// Number of arena slots to reserve up front (default: 0).
    pub capacity_hint: usize,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            width: MAX_WIDTH,
            capacity_hint: 0,
        }
    }
}

impl TrieConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the universe width.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Reserves arena space for roughly `capacity` nodes.
    pub fn with_capacity_hint(mut self, capacity: usize) -> Self {
        self.capacity_hint = capacity;
        self
    }

    /// Checks that the width is usable.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(TrieError::InvalidWidth(self.width));
        }
        Ok(())
    }
}
