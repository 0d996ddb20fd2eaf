use crate::error::Result;
use crate::search::linear_search;
use crate::strategy::SearchStrategy;

/// Substring scan over the unsorted raw entries. Nothing to build.
#[derive(Debug, Default)]
pub struct LinearStrategy;

impl LinearStrategy {
    pub fn new() -> Self {
        LinearStrategy
    }
}

impl SearchStrategy for LinearStrategy {
    fn build(&mut self, _entries: &[String]) -> Result<()> {
        Ok(())
    }

    fn contains(&self, entries: &[String], query: &str) -> bool {
        linear_search(entries, query).is_some()
    }

    fn build_phase(&self) -> Option<&'static str> {
        None
    }

    fn name(&self) -> &str {
        "linear search"
    }
}
