use crate::error::Result;
use crate::hash_index::HashIndex;
use crate::strategy::SearchStrategy;

/// Exact key membership through a hash set.
#[derive(Debug, Default)]
pub struct HashStrategy {
    index: Option<HashIndex>,
}

impl HashStrategy {
    pub fn new() -> Self {
        HashStrategy { index: None }
    }
}

impl SearchStrategy for HashStrategy {
    fn build(&mut self, entries: &[String]) -> Result<()> {
        self.index = Some(HashIndex::build(entries)?);
        Ok(())
    }

    fn contains(&self, _entries: &[String], query: &str) -> bool {
        self.index.as_ref().is_some_and(|index| index.contains(query))
    }

    fn build_phase(&self) -> Option<&'static str> {
        Some("Creating")
    }

    fn name(&self) -> &str {
        "hash table"
    }
}
