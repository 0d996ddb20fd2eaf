pub mod benchmark;
pub mod benchmark_utils;
pub mod comparator;
pub mod dataset;
pub mod entry;
pub mod error;
pub mod hash_index;
pub mod search;
pub mod sort;
pub mod strategy;
pub mod timing;

pub use error::{BenchmarkError, Result};
