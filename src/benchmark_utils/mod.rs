use prettytable::{row, Table};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::error::Result;
use crate::timing::Millis;

pub const SEARCH_PHASE: &str = "Searching";

/// One timed sub-step of a strategy run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PhaseTiming {
    pub phase: String,
    pub duration_ms: Millis,
}

/// Outcome of running one strategy over the whole query list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StrategyReport {
    pub strategy_name: String,
    pub matches_found: usize,
    pub total_queries: usize,
    pub phase_timings: Vec<PhaseTiming>,
}

/// Everything a run produces: input load timings plus one report per strategy.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkSummary {
    pub load_timings: Vec<PhaseTiming>,
    pub strategies: Vec<StrategyReport>,
}

impl StrategyReport {
    /// Sum of all phase timings.
    pub fn total_time(&self) -> Millis {
        self.phase_timings.iter().map(|p| p.duration_ms).sum()
    }

    pub fn phase(&self, name: &str) -> Option<Millis> {
        self.phase_timings
            .iter()
            .find(|p| p.phase == name)
            .map(|p| p.duration_ms)
    }
}

/// Renders a report the way the benchmark has always printed it:
///
/// ```text
/// Start searching (quick sort + binary search)...
/// Found 500 / 500 entries. Time taken: 00 min. 01 sec. 120 ms.
/// Sorting time: 00 min. 01 sec. 100 ms.
/// Searching time: 00 min. 00 sec. 020 ms.
/// ```
///
/// Per-phase lines are only printed when there is more than one phase.
pub fn render_report(report: &StrategyReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Start searching ({})...", report.strategy_name);
    let _ = writeln!(
        out,
        "Found {} / {} entries. Time taken: {}",
        report.matches_found,
        report.total_queries,
        report.total_time()
    );
    if report.phase_timings.len() > 1 {
        for phase in &report.phase_timings {
            let _ = writeln!(out, "{} time: {}", phase.phase, phase.duration_ms);
        }
    }
    out
}

/// Renders every report, separated by blank lines.
pub fn render_reports(reports: &[StrategyReport]) -> String {
    reports
        .iter()
        .map(render_report)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `<phase>... <duration>` line per input file read.
pub fn render_load_timings(load_timings: &[PhaseTiming]) -> String {
    let mut out = String::new();
    for timing in load_timings {
        let _ = writeln!(out, "{}... {}", timing.phase, timing.duration_ms);
    }
    out
}

pub fn render_json(summary: &BenchmarkSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Builds a comparison table with one row per strategy.
pub fn results_table(reports: &[StrategyReport]) -> Table {
    let mut table = Table::new();
    table.add_row(row![
        "Strategy",
        "Found",
        "Build Phase",
        "Build Time (ms)",
        "Search Time (ms)",
        "Total Time (ms)"
    ]);

    for report in reports {
        let build = report
            .phase_timings
            .iter()
            .find(|p| p.phase != SEARCH_PHASE);
        let (build_phase, build_time) = match build {
            Some(p) => (p.phase.clone(), p.duration_ms.as_u64().to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        let search_time = report.phase(SEARCH_PHASE).unwrap_or_default();

        table.add_row(row![
            &report.strategy_name,
            format!("{} / {}", report.matches_found, report.total_queries),
            build_phase,
            build_time,
            format!("{}", search_time.as_u64()),
            format!("{}", report.total_time().as_u64()),
        ]);
    }

    table
}

/// Print benchmark results as a table
pub fn print_benchmark_results(reports: &[StrategyReport]) {
    println!();
    results_table(reports).printstd();
    println!();
}
