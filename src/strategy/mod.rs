pub mod bubble_jump;
pub mod hash;
pub mod linear;
pub mod quick_binary;

use clap::ValueEnum;

use crate::error::Result;

pub use bubble_jump::BubbleJumpStrategy;
pub use hash::HashStrategy;
pub use linear::LinearStrategy;
pub use quick_binary::QuickBinaryStrategy;

/// A lookup structure paired with the search that runs against it.
pub trait SearchStrategy {
    /// Builds the lookup structure from the raw directory entries.
    ///
    /// Any previously built state is discarded.
    fn build(&mut self, entries: &[String]) -> Result<()>;

    /// Returns whether `query` is found. `entries` are the same raw entries
    /// passed to [`SearchStrategy::build`].
    fn contains(&self, entries: &[String], query: &str) -> bool;

    /// Label of the timed build phase, or `None` when the raw entries are
    /// searched directly.
    fn build_phase(&self) -> Option<&'static str>;

    /// Returns the name of the strategy.
    fn name(&self) -> &str;
}

/// The strategies the benchmark knows about, in their fixed run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum StrategyKind {
    Linear,
    BubbleJump,
    QuickBinary,
    Hash,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Linear,
        StrategyKind::BubbleJump,
        StrategyKind::QuickBinary,
        StrategyKind::Hash,
    ];

    /// Creates a fresh, unbuilt strategy.
    pub fn create(self) -> Box<dyn SearchStrategy> {
        match self {
            StrategyKind::Linear => Box::new(LinearStrategy::new()),
            StrategyKind::BubbleJump => Box::new(BubbleJumpStrategy::new()),
            StrategyKind::QuickBinary => Box::new(QuickBinaryStrategy::new()),
            StrategyKind::Hash => Box::new(HashStrategy::new()),
        }
    }
}
