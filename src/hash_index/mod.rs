use rustc_hash::FxHashSet;

use crate::entry::extract_key;
use crate::error::Result;

/// Exact-match membership index over directory keys.
#[derive(Debug)]
pub struct HashIndex {
    keys: FxHashSet<String>,
}

impl HashIndex {
    /// Extracts the key of every entry and inserts it into the set.
    pub fn build<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let mut keys = FxHashSet::default();
        keys.reserve(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            keys.insert(extract_key(entry.as_ref(), i + 1)?.to_string());
        }

        Ok(HashIndex { keys })
    }

    /// True only when `key` equals some extracted key exactly.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
