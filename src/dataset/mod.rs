use std::fs;
use std::path::Path;

use crate::benchmark_utils::PhaseTiming;
use crate::error::{BenchmarkError, Result};
use crate::timing::measure_logged;

pub const READ_DATA_PHASE: &str = "Reading data file";
pub const READ_FIND_PHASE: &str = "Reading findings file";

/// Directory entries plus the queries to look up in them.
#[derive(Debug, Clone, Default)]
pub struct Phonebook {
    pub entries: Vec<String>,
    pub queries: Vec<String>,
    /// How long reading each input file took, in load order.
    pub load_timings: Vec<PhaseTiming>,
}

impl Phonebook {
    /// Loads the directory file and the find file, one record per line.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(directory: P, find: Q) -> Result<Self> {
        let (entries, data_time) = measure_logged(READ_DATA_PHASE, || read_lines(directory.as_ref())).into_parts();
        let entries = entries?;
        let (queries, find_time) = measure_logged(READ_FIND_PHASE, || read_lines(find.as_ref())).into_parts();
        let queries = queries?;

        let load_timings = vec![
            PhaseTiming { phase: READ_DATA_PHASE.to_string(), duration_ms: data_time },
            PhaseTiming { phase: READ_FIND_PHASE.to_string(), duration_ms: find_time },
        ];

        Ok(Phonebook { entries, queries, load_timings })
    }
}

/// Reads a text file into lines, accepting both `\n` and `\r\n` endings.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| BenchmarkError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    lines.shrink_to_fit();

    Ok(lines)
}
