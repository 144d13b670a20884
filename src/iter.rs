//! Ordered traversal of the leaf list.

use crate::XFastTrie;
use std::iter::FusedIterator;

/// Ascending iterator over the values of an [`XFastTrie`].
///
/// Holds a shared borrow, so the trie cannot change mid-traversal.
pub struct Iter<'a> {
    trie: &'a XFastTrie,
    front: u32,
    back: u32,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(trie: &'a XFastTrie, front: u32, back: u32, remaining: usize) -> Self {
        Self {
            trie,
            front,
            back,
            remaining,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u64;

    #[inline(always)]
    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let leaf = &self.trie.arena[self.front as usize];
        self.front = leaf.next;
        self.remaining -= 1;
        Some(leaf.prefix)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let leaf = &self.trie.arena[self.back as usize];
        self.back = leaf.prev;
        self.remaining -= 1;
        Some(leaf.prefix)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
