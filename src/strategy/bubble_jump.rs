use crate::comparator::NaturalOrder;
use crate::entry::extract_keys;
use crate::error::Result;
use crate::search::jump_search;
use crate::sort::bubble_sort;
use crate::strategy::SearchStrategy;

/// Keys sorted with the exchange sort, then looked up by jump search.
#[derive(Debug, Default)]
pub struct BubbleJumpStrategy {
    sorted_keys: Vec<String>,
}

impl BubbleJumpStrategy {
    pub fn new() -> Self {
        BubbleJumpStrategy { sorted_keys: Vec::new() }
    }

    pub fn sorted_keys(&self) -> &[String] {
        &self.sorted_keys
    }
}

impl SearchStrategy for BubbleJumpStrategy {
    fn build(&mut self, entries: &[String]) -> Result<()> {
        let mut keys = extract_keys(entries)?;
        bubble_sort(&mut keys, &NaturalOrder);
        self.sorted_keys = keys;
        Ok(())
    }

    fn contains(&self, _entries: &[String], query: &str) -> bool {
        jump_search(&self.sorted_keys, query, &NaturalOrder).is_some()
    }

    fn build_phase(&self) -> Option<&'static str> {
        Some("Sorting")
    }

    fn name(&self) -> &str {
        "bubble sort + jump search"
    }
}
