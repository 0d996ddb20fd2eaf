use crate::comparator::NaturalOrder;
use crate::entry::extract_keys;
use crate::error::Result;
use crate::search::binary_search;
use crate::sort::quick_sort;
use crate::strategy::SearchStrategy;

/// Keys sorted with randomized quicksort, then looked up by binary search.
#[derive(Debug, Default)]
pub struct QuickBinaryStrategy {
    sorted_keys: Vec<String>,
}

impl QuickBinaryStrategy {
    pub fn new() -> Self {
        QuickBinaryStrategy { sorted_keys: Vec::new() }
    }

    pub fn sorted_keys(&self) -> &[String] {
        &self.sorted_keys
    }
}

impl SearchStrategy for QuickBinaryStrategy {
    fn build(&mut self, entries: &[String]) -> Result<()> {
        let mut keys = extract_keys(entries)?;
        quick_sort(&mut keys, &NaturalOrder);
        self.sorted_keys = keys;
        Ok(())
    }

    fn contains(&self, _entries: &[String], query: &str) -> bool {
        binary_search(&self.sorted_keys, query, &NaturalOrder).is_ok()
    }

    fn build_phase(&self) -> Option<&'static str> {
        Some("Sorting")
    }

    fn name(&self) -> &str {
        "quick sort + binary search"
    }
}
