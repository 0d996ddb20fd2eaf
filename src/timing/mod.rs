//! Wall-clock measurement of arbitrary work.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::time::{Duration, Instant};
use tracing::info;

/// Elapsed time in whole milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<Duration> for Millis {
    fn from(duration: Duration) -> Self {
        Millis(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}

impl Add for Millis {
    type Output = Millis;

    fn add(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Millis {
    fn sum<I: Iterator<Item = Millis>>(iter: I) -> Millis {
        iter.fold(Millis::default(), Add::add)
    }
}

/// Renders as `MM min. SS sec. mmm ms.`; minutes keep counting past 59.
impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0 / 60_000;
        let seconds = self.0 / 1_000 % 60;
        let millis = self.0 % 1_000;
        write!(f, "{:02} min. {:02} sec. {:03} ms.", minutes, seconds, millis)
    }
}

/// Result of a timed operation together with how long it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement<R> {
    pub outcome: R,
    pub elapsed: Millis,
}

impl<R> Measurement<R> {
    pub fn into_parts(self) -> (R, Millis) {
        (self.outcome, self.elapsed)
    }
}

/// Runs `operation` and records its elapsed wall-clock time.
///
/// Whatever the operation returns, including an `Err`, is handed back as-is.
pub fn measure<R, F: FnOnce() -> R>(operation: F) -> Measurement<R> {
    let start = Instant::now();
    let outcome = operation();
    let elapsed = Millis::from(start.elapsed());
    Measurement { outcome, elapsed }
}

/// [`measure`], then log the elapsed time under `label`.
pub fn measure_logged<R, F: FnOnce() -> R>(label: &str, operation: F) -> Measurement<R> {
    let measurement = measure(operation);
    info!("{} took {}", label, measurement.elapsed);
    measurement
}
