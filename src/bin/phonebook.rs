use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use phonebook_benchmark_rs::benchmark::{run_benchmark, BenchmarkConfig};
use phonebook_benchmark_rs::benchmark_utils::{
    print_benchmark_results, render_json, render_load_timings, render_reports, BenchmarkSummary,
};
use phonebook_benchmark_rs::dataset::Phonebook;
use phonebook_benchmark_rs::strategy::StrategyKind;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(about = "Compares linear, sorted and hashed lookups over a phone book", long_about = None)]
struct Cli {
    /// Directory file, one "<id> <name>" entry per line
    directory: PathBuf,

    /// File with one name to look up per line
    find: PathBuf,

    /// Strategy to run; repeat to run several (default: all, in fixed order)
    #[arg(short, long = "strategy", value_enum)]
    strategies: Vec<StrategyKind>,

    /// How to print the results
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Table,
    Json,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let phonebook = Phonebook::load(&cli.directory, &cli.find).with_context(|| {
        format!(
            "loading phone book from {} and {}",
            cli.directory.display(),
            cli.find.display()
        )
    })?;
    info!(
        "Loaded {} entries and {} queries",
        phonebook.entries.len(),
        phonebook.queries.len()
    );

    let config = BenchmarkConfig::new(cli.strategies);
    let reports = run_benchmark(&phonebook.entries, &phonebook.queries, &config)
        .context("running search benchmark")?;

    match cli.format {
        OutputFormat::Text => {
            println!("{}", render_load_timings(&phonebook.load_timings));
            print!("{}", render_reports(&reports));
        }
        OutputFormat::Table => {
            print!("{}", render_load_timings(&phonebook.load_timings));
            print_benchmark_results(&reports);
        }
        OutputFormat::Json => {
            let summary = BenchmarkSummary { load_timings: phonebook.load_timings, strategies: reports };
            println!("{}", render_json(&summary)?);
        }
    }

    Ok(())
}
