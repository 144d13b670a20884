//! # xfast-rs
//!
//! X-fast trie: an ordered set over the integers `[0, 2^W)` with O(1)
//! membership and O(log W) insert, delete, predecessor and successor.
//!
//! Every prefix of every stored value has a node, and each depth keeps a
//! hash table from prefix to node so the longest matching prefix of a query
//! is found by binary search over depths. An internal node missing one child
//! keeps a thread to the nearest leaf on the populated side, and all leaves
//! form a sorted doubly linked list between two sentinels.

mod config;
mod error;
mod iter;
mod key;
mod levels;
mod node;

pub use config::{MAX_WIDTH, TrieConfig};
pub use error::{Result, TrieError};
pub use iter::Iter;
pub use key::TrieKey;

use levels::LevelIndex;
use node::{NIL, ONE, Slot, TrieNode, ZERO, branch_bit, prefix_of};
use std::fmt;
use tracing::{debug, trace};

const ROOT: u32 = 0;
const MIN_SENTINEL: u32 = 1;
const MAX_SENTINEL: u32 = 2;

pub struct XFastTrie {
    width: u32,
    len: usize,
    levels: LevelIndex,
    arena: Vec<TrieNode>,
    free_list: Vec<u32>,
}

impl Default for XFastTrie {
    fn default() -> Self {
        Self::build(&TrieConfig::default())
    }
}

impl XFastTrie {
    /// Creates an empty trie over `[0, 2^width)`.
    pub fn new(width: u32) -> Result<Self> {
        Self::with_config(TrieConfig::new().with_width(width))
    }

    pub fn with_config(config: TrieConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(&config))
    }

    fn build(config: &TrieConfig) -> Self {
        let width = config.width;
        let mut arena = Vec::with_capacity(config.capacity_hint.max(3));
        arena.push(TrieNode::internal(0, 0));
        arena.push(TrieNode::leaf(width, 0));
        arena.push(TrieNode::leaf(width, 0));
        arena[MIN_SENTINEL as usize].next = MAX_SENTINEL;
        arena[MAX_SENTINEL as usize].prev = MIN_SENTINEL;

        let mut levels = LevelIndex::new(width);
        levels.set(0, 0, ROOT);

        debug!(width, capacity = config.capacity_hint, "created x-fast trie");
        XFastTrie {
            width,
            len: 0,
            levels,
            arena,
            free_list: Vec::new(),
        }
    }

    /// Universe width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `key`. Returns `Ok(false)` if it was already present.
    pub fn insert<K: TrieKey>(&mut self, key: K) -> Result<bool> {
        let value = key.to_key(self.width)?;
        if self.levels.contains(self.width, value) {
            return Ok(false);
        }

        let (pred, succ) = self.neighbors(value);
        let (ancestor, depth) = self.locate(value);

        let leaf = self.alloc(TrieNode::leaf(self.width, value));
        self.splice_in(leaf, pred, succ);
        let created = self.build_path(ancestor, depth, value, leaf);
        self.repair_threads_after_insert(leaf, value);
        self.len += 1;

        trace!(value, depth, created, "inserted");
        Ok(true)
    }

    /// Removes `key`, failing with [`TrieError::NotFound`] if absent.
    pub fn delete<K: TrieKey>(&mut self, key: K) -> Result<()> {
        let value = key.to_key(self.width)?;
        let leaf = self
            .levels
            .get(self.width, value)
            .ok_or(TrieError::NotFound(value))?;

        let (pred, succ) = self.splice_out(leaf);
        let retired = self.retire_path(leaf, value, pred, succ);
        self.len -= 1;

        trace!(value, retired, "deleted");
        Ok(())
    }

    pub fn exists<K: TrieKey>(&self, key: K) -> Result<bool> {
        let value = key.to_key(self.width)?;
        Ok(self.levels.contains(self.width, value))
    }

    #[inline(always)]
    pub fn contains<K: TrieKey>(&self, key: K) -> Result<bool> {
        self.exists(key)
    }

    /// Greatest stored value strictly below `key`.
    pub fn predecessor<K: TrieKey>(&self, key: K) -> Result<Option<u64>> {
        let value = key.to_key(self.width)?;
        if let Some(leaf) = self.levels.get(self.width, value) {
            return Ok(self.value_of(self.arena[leaf as usize].prev));
        }
        Ok(match self.closest_leaf(value) {
            None => None,
            Some(leaf) if self.arena[leaf as usize].prefix > value => {
                self.value_of(self.arena[leaf as usize].prev)
            }
            Some(leaf) => self.value_of(leaf),
        })
    }

    /// Smallest stored value strictly above `key`.
    pub fn successor<K: TrieKey>(&self, key: K) -> Result<Option<u64>> {
        let value = key.to_key(self.width)?;
        if let Some(leaf) = self.levels.get(self.width, value) {
            return Ok(self.value_of(self.arena[leaf as usize].next));
        }
        Ok(match self.closest_leaf(value) {
            None => None,
            Some(leaf) if self.arena[leaf as usize].prefix < value => {
                self.value_of(self.arena[leaf as usize].next)
            }
            Some(leaf) => self.value_of(leaf),
        })
    }

    #[inline(always)]
    pub fn min(&self) -> Option<u64> {
        self.value_of(self.arena[MIN_SENTINEL as usize].next)
    }

    #[inline(always)]
    pub fn max(&self) -> Option<u64> {
        self.value_of(self.arena[MAX_SENTINEL as usize].prev)
    }

    /// Ascending iterator over the stored values.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(
            self,
            self.arena[MIN_SENTINEL as usize].next,
            self.arena[MAX_SENTINEL as usize].prev,
            self.len,
        )
    }

    #[inline(always)]
    fn value_of(&self, idx: u32) -> Option<u64> {
        if idx == MIN_SENTINEL || idx == MAX_SENTINEL {
            None
        } else {
            Some(self.arena[idx as usize].prefix)
        }
    }

    #[inline(always)]
    fn alloc(&mut self, node: TrieNode) -> u32 {
        if let Some(idx) = self.free_list.pop() {
            self.arena[idx as usize] = node;
            idx
        } else {
            let idx = self.arena.len() as u32;
            self.arena.push(node);
            idx
        }
    }

    /// Deepest node whose prefix matches `value`, with its depth.
    #[inline(always)]
    fn locate(&self, value: u64) -> (u32, u32) {
        let mut node = ROOT;
        let mut depth = 0;
        let (mut lo, mut hi) = (1, self.width);
        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            match self.levels.get(mid, prefix_of(value, mid, self.width)) {
                Some(idx) => {
                    node = idx;
                    depth = mid;
                    lo = mid + 1;
                }
                None => hi = mid - 1,
            }
        }
        (node, depth)
    }

    /// A leaf adjacent to `value` in sorted order, or the leaf holding it.
    fn closest_leaf(&self, value: u64) -> Option<u32> {
        if self.len == 0 {
            return None;
        }
        let (node, depth) = self.locate(value);
        if depth == self.width {
            return Some(node);
        }
        let bit = branch_bit(value, depth, self.width);
        match self.arena[node as usize].slots[bit] {
            Slot::Thread(leaf) => Some(leaf),
            Slot::Child(child) => match self.arena[child as usize].slots[bit ^ 1] {
                Slot::Thread(leaf) => Some(leaf),
                _ => None,
            },
            Slot::Empty => None,
        }
    }

    /// Leaf-list neighbors a new `value` goes between.
    fn neighbors(&self, value: u64) -> (u32, u32) {
        match self.closest_leaf(value) {
            None => (MIN_SENTINEL, MAX_SENTINEL),
            Some(leaf) if self.arena[leaf as usize].prefix < value => {
                (leaf, self.arena[leaf as usize].next)
            }
            Some(leaf) => (self.arena[leaf as usize].prev, leaf),
        }
    }

    #[inline(always)]
    fn splice_in(&mut self, leaf: u32, pred: u32, succ: u32) {
        let node = &mut self.arena[leaf as usize];
        node.prev = pred;
        node.next = succ;
        self.arena[pred as usize].next = leaf;
        self.arena[succ as usize].prev = leaf;
    }

    #[inline(always)]
    fn splice_out(&mut self, leaf: u32) -> (u32, u32) {
        let node = &self.arena[leaf as usize];
        let (pred, succ) = (node.prev, node.next);
        self.arena[pred as usize].next = succ;
        self.arena[succ as usize].prev = pred;
        (pred, succ)
    }

    /// Creates the missing nodes from `ancestor` (at `depth`) down to `leaf`.
    /// Returns the number of nodes registered, the leaf included.
    fn build_path(&mut self, ancestor: u32, depth: u32, value: u64, leaf: u32) -> u32 {
        let width = self.width;
        let mut node = ancestor;
        for level in depth..width {
            let bit = branch_bit(value, level, width);
            let prefix = prefix_of(value, level + 1, width);
            let child = if level + 1 == width {
                leaf
            } else {
                let idx = self.alloc(TrieNode::internal(level + 1, prefix));
                let child_bit = branch_bit(value, level + 1, width);
                self.arena[idx as usize].slots[child_bit ^ 1] = Slot::Thread(leaf);
                idx
            };
            self.arena[child as usize].parent = node;

            let parent = &mut self.arena[node as usize];
            parent.slots[bit] = Slot::Child(child);
            if parent.slots[bit ^ 1] == Slot::Empty {
                parent.slots[bit ^ 1] = Slot::Thread(leaf);
            }
            self.levels.set(level + 1, prefix, child);
            node = child;
        }
        width - depth
    }

    /// Walks from the new leaf to the root, counting it in every ancestor
    /// and pointing any thread it now beats at it.
    fn repair_threads_after_insert(&mut self, leaf: u32, value: u64) {
        let mut node = self.arena[leaf as usize].parent;
        while node != NIL {
            let slots = self.arena[node as usize].slots;
            if let Slot::Thread(min) = slots[ZERO] {
                if value < self.arena[min as usize].prefix {
                    self.arena[node as usize].slots[ZERO] = Slot::Thread(leaf);
                }
            }
            if let Slot::Thread(max) = slots[ONE] {
                if value > self.arena[max as usize].prefix {
                    self.arena[node as usize].slots[ONE] = Slot::Thread(leaf);
                }
            }
            let n = &mut self.arena[node as usize];
            n.count += 1;
            node = n.parent;
        }
    }

    /// Retires the deleted leaf and every ancestor left without leaves, then
    /// redirects surviving threads that referenced it. Returns the number of
    /// nodes retired, the leaf included.
    fn retire_path(&mut self, leaf: u32, value: u64, pred: u32, succ: u32) -> u32 {
        let width = self.width;
        self.levels.remove(width, value);
        self.free_list.push(leaf);
        let mut retired = 1;

        let mut node = self.arena[leaf as usize].parent;
        while node != NIL {
            let n = &mut self.arena[node as usize];
            n.count -= 1;
            let bit = branch_bit(value, n.level, width);
            if n.count > 0 {
                // the other side still has leaves; the emptied side threads to the nearest one
                n.slots[bit] = Slot::Thread(if bit == ZERO { succ } else { pred });
                node = n.parent;
                break;
            }
            if node == ROOT {
                n.slots = [Slot::Empty; 2];
                node = NIL;
                break;
            }
            let (level, prefix, parent) = (n.level, n.prefix, n.parent);
            self.levels.remove(level, prefix);
            self.free_list.push(node);
            retired += 1;
            node = parent;
        }

        while node != NIL {
            let n = &mut self.arena[node as usize];
            n.count -= 1;
            if n.slots[ZERO] == Slot::Thread(leaf) {
                n.slots[ZERO] = Slot::Thread(succ);
            }
            if n.slots[ONE] == Slot::Thread(leaf) {
                n.slots[ONE] = Slot::Thread(pred);
            }
            node = n.parent;
        }

        if retired > 1 {
            debug!(value, retired, "retired empty prefix nodes");
        }
        retired
    }
}

impl<'a> IntoIterator for &'a XFastTrie {
    type Item = u64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Debug for XFastTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

include!("tests.rs");
