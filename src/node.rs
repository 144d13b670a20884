//! Arena-resident trie nodes.

/// Null arena index.
pub(crate) const NIL: u32 = u32::MAX;

/// Zero-side slot index (bit 0 of the path).
pub(crate) const ZERO: usize = 0;
/// One-side slot index (bit 1 of the path).
pub(crate) const ONE: usize = 1;

/// Contents of one child position of an internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    /// No leaf anywhere beneath the node (empty root, leaves).
    Empty,
    /// Real child node.
    Child(u32),
    /// Descendant thread: the nearest leaf on the populated side.
    /// A zero-side thread holds the minimum of the one subtree, a
    /// one-side thread holds the maximum of the zero subtree.
    Thread(u32),
}

pub(crate) struct TrieNode {
    pub(crate) level: u32,
    /// The `level`-bit prefix shared by every leaf below; the full value for leaves.
    pub(crate) prefix: u64,
    pub(crate) slots: [Slot; 2],
    pub(crate) parent: u32,
    /// Leaves at or below this node.
    pub(crate) count: u32,
    // leaf list links, NIL on internal nodes
    pub(crate) prev: u32,
    pub(crate) next: u32,
}

impl TrieNode {
    pub(crate) fn internal(level: u32, prefix: u64) -> Self {
        Self {
            level,
            prefix,
            slots: [Slot::Empty; 2],
            parent: NIL,
            count: 0,
            prev: NIL,
            next: NIL,
        }
    }

    pub(crate) fn leaf(level: u32, value: u64) -> Self {
        Self {
            count: 1,
            ..Self::internal(level, value)
        }
    }
}

/// Bit of `value` that picks the child of a node at `level`.
#[inline(always)]
pub(crate) fn branch_bit(value: u64, level: u32, width: u32) -> usize {
    ((value >> (width - level - 1)) & 1) as usize
}

/// The `level`-bit prefix of `value`.
#[inline(always)]
pub(crate) fn prefix_of(value: u64, level: u32, width: u32) -> u64 {
    let shift = width - level;
    if shift >= u64::BITS { 0 } else { value >> shift }
}
