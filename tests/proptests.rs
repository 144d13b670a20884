//! Property-based tests for `XFastTrie`.
//!
//! Differential testing against `BTreeSet` as an oracle.

use proptest::prelude::*;
use std::collections::BTreeSet;
use xfast_rs::{TrieError, XFastTrie};

const WIDTH: u32 = 10;
const UNIVERSE: u64 = 1 << WIDTH;

/// Operations for random testing.
#[derive(Debug, Clone)]
enum Op {
    Insert(u64),
    Delete(u64),
    Predecessor(u64),
    Successor(u64),
    Exists(u64),
}

/// Values are clustered into a small range half the time so deletes hit.
fn value() -> impl Strategy<Value = u64> {
    prop_oneof![0..64u64, 0..UNIVERSE]
}

fn operations(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            4 => value().prop_map(Op::Insert),
            3 => value().prop_map(Op::Delete),
            1 => value().prop_map(Op::Predecessor),
            1 => value().prop_map(Op::Successor),
            1 => value().prop_map(Op::Exists),
        ],
        0..=max_ops,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Every operation agrees with the oracle, and enumeration stays sorted.
    #[test]
    fn matches_btreeset(ops in operations(200)) {
        let mut trie = XFastTrie::new(WIDTH).unwrap();
        let mut oracle = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(v) => {
                    prop_assert_eq!(trie.insert(v).unwrap(), oracle.insert(v));
                }
                Op::Delete(v) => {
                    let expected = if oracle.remove(&v) { Ok(()) } else { Err(TrieError::NotFound(v)) };
                    prop_assert_eq!(trie.delete(v), expected);
                }
                Op::Predecessor(v) => {
                    prop_assert_eq!(trie.predecessor(v).unwrap(), oracle.range(..v).next_back().copied());
                }
                Op::Successor(v) => {
                    prop_assert_eq!(trie.successor(v).unwrap(), oracle.range(v + 1..).next().copied());
                }
                Op::Exists(v) => {
                    prop_assert_eq!(trie.exists(v).unwrap(), oracle.contains(&v));
                }
            }
        }

        let values: Vec<u64> = trie.iter().collect();
        let expected: Vec<u64> = oracle.iter().copied().collect();
        prop_assert_eq!(values, expected);
        prop_assert_eq!(trie.len(), oracle.len());
        prop_assert_eq!(trie.min(), oracle.first().copied());
        prop_assert_eq!(trie.max(), oracle.last().copied());
    }

    /// Deleting everything leaves an empty trie that still works.
    #[test]
    fn delete_all_empties(values in prop::collection::btree_set(0..UNIVERSE, 0..100)) {
        let mut trie = XFastTrie::new(WIDTH).unwrap();
        for &v in &values {
            trie.insert(v).unwrap();
        }
        for &v in values.iter().rev() {
            trie.delete(v).unwrap();
        }
        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.min(), None);
        prop_assert_eq!(trie.max(), None);
        prop_assert_eq!(trie.iter().next(), None);
        prop_assert_eq!(trie.successor(0u64).unwrap(), None);

        prop_assert!(trie.insert(5u64).unwrap());
        prop_assert_eq!(trie.predecessor(UNIVERSE - 1).unwrap(), Some(5));
    }

    /// Out-of-range values are rejected without touching the set.
    #[test]
    fn out_of_range_rejected(
        values in prop::collection::btree_set(0..UNIVERSE, 0..20),
        bad in UNIVERSE..u64::MAX,
    ) {
        let mut trie = XFastTrie::new(WIDTH).unwrap();
        for &v in &values {
            trie.insert(v).unwrap();
        }
        let err = TrieError::OutOfRange { value: bad as i128, width: WIDTH };
        prop_assert_eq!(trie.insert(bad), Err(err.clone()));
        prop_assert_eq!(trie.delete(bad), Err(err.clone()));
        prop_assert_eq!(trie.predecessor(bad), Err(err));
        let after: BTreeSet<u64> = trie.iter().collect();
        prop_assert_eq!(after, values);
    }
}
