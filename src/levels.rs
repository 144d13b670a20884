//! Per-depth prefix tables.

use ahash::AHashMap as HashMap;

/// One prefix -> arena index table per trie depth `0..=width`.
pub(crate) struct LevelIndex {
    tables: Vec<HashMap<u64, u32>>,
}

impl LevelIndex {
    pub(crate) fn new(width: u32) -> Self {
        Self {
            tables: (0..=width).map(|_| HashMap::new()).collect(),
        }
    }

    #[inline(always)]
    pub(crate) fn get(&self, level: u32, prefix: u64) -> Option<u32> {
        self.tables[level as usize].get(&prefix).copied()
    }

    #[inline(always)]
    pub(crate) fn contains(&self, level: u32, prefix: u64) -> bool {
        self.tables[level as usize].contains_key(&prefix)
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, level: u32, prefix: u64, node: u32) {
        self.tables[level as usize].insert(prefix, node);
    }

    #[inline(always)]
    pub(crate) fn remove(&mut self, level: u32, prefix: u64) -> Option<u32> {
        self.tables[level as usize].remove(&prefix)
    }

    /// Entries at `level`.
    #[cfg(test)]
    pub(crate) fn len_at(&self, level: u32) -> usize {
        self.tables[level as usize].len()
    }

    #[cfg(test)]
    pub(crate) fn entries(&self, level: u32) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.tables[level as usize].iter().map(|(&p, &n)| (p, n))
    }
}
