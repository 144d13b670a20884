use tracing::info;
use tracing_subscriber::EnvFilter;
use xfast_rs::{TrieError, XFastTrie};

fn main() -> Result<(), TrieError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    // 8-bit universe: 0..=255
    let mut trie = XFastTrie::new(8)?;
    for v in [5u32, 10, 3, 20] {
        trie.insert(v)?;
    }
    info!(set = ?trie, "inserted");

    let exists = trie.exists(10)?;
    info!(exists, "exists(10)");
    let (pred, succ) = (trie.predecessor(7)?, trie.successor(7)?);
    info!(?pred, ?succ, "neighbors of 7");

    trie.delete(10)?;
    let succ = trie.successor(7)?;
    info!(?succ, "successor(7) after delete(10)");
    let (pred, succ) = (trie.predecessor(100)?, trie.successor(100)?);
    info!(?pred, ?succ, "neighbors of 100");

    if let Err(err) = trie.insert(300) {
        info!(%err, "insert(300) rejected");
    }
    if let Err(err) = trie.delete(42) {
        info!(%err, "delete(42) rejected");
    }

    // Byte strings are read big-endian.
    trie.insert(b"\x7f")?;
    let values: Vec<u64> = trie.iter().collect();
    info!(?values, min = ?trie.min(), max = ?trie.max(), "final set");
    Ok(())
}
