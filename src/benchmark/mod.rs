use tracing::{debug, info, warn};

use crate::benchmark_utils::{PhaseTiming, StrategyReport, SEARCH_PHASE};
use crate::error::Result;
use crate::strategy::{SearchStrategy, StrategyKind};
use crate::timing::measure;

/// Which strategies to run. They always run in [`StrategyKind::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    strategies: Vec<StrategyKind>,
}

impl BenchmarkConfig {
    /// Duplicates are dropped and the fixed run order is restored. An empty
    /// selection means every strategy.
    pub fn new(mut strategies: Vec<StrategyKind>) -> Self {
        if strategies.is_empty() {
            return Self::default();
        }
        strategies.sort();
        strategies.dedup();
        BenchmarkConfig { strategies }
    }

    pub fn strategies(&self) -> &[StrategyKind] {
        &self.strategies
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig { strategies: StrategyKind::ALL.to_vec() }
    }
}

/// Runs every configured strategy over the same entries and queries.
///
/// Each strategy is built from scratch, so no derived structure is shared
/// between runs. The first failure aborts the whole benchmark.
pub fn run_benchmark(
    entries: &[String],
    queries: &[String],
    config: &BenchmarkConfig,
) -> Result<Vec<StrategyReport>> {
    if queries.is_empty() {
        warn!("Query list is empty, every strategy will report 0 matches");
    }

    let total = config.strategies().len();
    let mut reports = Vec::with_capacity(total);

    for (i, kind) in config.strategies().iter().enumerate() {
        let mut strategy = kind.create();
        info!("({}/{}) Start searching ({})...", i + 1, total, strategy.name());

        let report = run_strategy(strategy.as_mut(), entries, queries)?;
        info!(
            "Found {} / {} entries with {} in {}",
            report.matches_found,
            report.total_queries,
            report.strategy_name,
            report.total_time()
        );
        reports.push(report);
    }

    Ok(reports)
}

/// Builds `strategy` (timed, if it has a build phase) and then times the
/// lookup of every query, counting hits.
pub fn run_strategy(
    strategy: &mut dyn SearchStrategy,
    entries: &[String],
    queries: &[String],
) -> Result<StrategyReport> {
    let mut phase_timings = Vec::with_capacity(2);

    match strategy.build_phase() {
        Some(phase) => {
            let (built, elapsed) = measure(|| strategy.build(entries)).into_parts();
            built?;
            debug!("{} time for {}: {}", phase, strategy.name(), elapsed);
            phase_timings.push(PhaseTiming { phase: phase.to_string(), duration_ms: elapsed });
        }
        None => strategy.build(entries)?,
    }

    let searcher: &dyn SearchStrategy = strategy;
    let (matches_found, elapsed) = measure(|| {
        queries
            .iter()
            .filter(|query| searcher.contains(entries, query))
            .count()
    })
    .into_parts();
    debug!("{} time for {}: {}", SEARCH_PHASE, searcher.name(), elapsed);
    phase_timings.push(PhaseTiming { phase: SEARCH_PHASE.to_string(), duration_ms: elapsed });

    Ok(StrategyReport {
        strategy_name: searcher.name().to_string(),
        matches_found,
        total_queries: queries.len(),
        phase_timings,
    })
}
