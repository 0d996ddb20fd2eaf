//! Directory entries look like `"<identifier> <key...>"`. Only the key, i.e.
//! everything after the first space, takes part in sorted and hashed lookups.

use crate::error::{BenchmarkError, Result};

pub const KEY_SEPARATOR: char = ' ';

/// Splits `entry` on the first separator and returns the key half.
///
/// `line` is the 1-based position of the entry, used for error reporting.
pub fn extract_key(entry: &str, line: usize) -> Result<&str> {
    entry
        .split_once(KEY_SEPARATOR)
        .map(|(_, key)| key)
        .ok_or_else(|| BenchmarkError::MalformedEntry {
            line,
            entry: entry.to_string(),
        })
}

/// Extracts an owned key from every entry, failing on the first malformed one.
pub fn extract_keys<S: AsRef<str>>(entries: &[S]) -> Result<Vec<String>> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| extract_key(entry.as_ref(), i + 1).map(str::to_string))
        .collect()
}
