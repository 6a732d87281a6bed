//! The four benchmarked sorting algorithms.
//!
//! Each algorithm reorders a slice of [`Row`]s so that the extracted keys are
//! non-decreasing. Radix and counting sort truncate fractional parts when
//! bucketing and are stable within a bucket; timsort is stable throughout;
//! Shell sort is not stable.

pub mod counting;
pub mod radix;
pub mod shell;
pub mod tim;

pub use counting::CountingSort;
pub use radix::RadixSort;
pub use shell::ShellSort;
pub use tim::TimSort;

use crate::dataset::Row;
use crate::{Result, SortBenchError};

/// A sorting algorithm under benchmark.
pub trait SortAlgorithm: std::fmt::Debug {
    fn name(&self) -> &'static str;

    /// Sort rows in place by ascending key.
    fn sort(&self, rows: &mut [Row]) -> Result<()>;
}

/// All benchmarked algorithms, in the order they are reported.
pub fn all_algorithms() -> Vec<Box<dyn SortAlgorithm>> {
    vec![
        Box::new(RadixSort),
        Box::new(ShellSort),
        Box::new(CountingSort),
        Box::new(TimSort),
    ]
}

/// Resolve algorithm names (as printed by `name()`) to instances.
pub fn lookup(names: &[String]) -> Result<Vec<Box<dyn SortAlgorithm>>> {
    let mut algorithms: Vec<Box<dyn SortAlgorithm>> = Vec::with_capacity(names.len());
    for name in names {
        let algorithm: Box<dyn SortAlgorithm> = match name.trim() {
            "radix" => Box::new(RadixSort),
            "shell" => Box::new(ShellSort),
            "counting" => Box::new(CountingSort),
            "tim" => Box::new(TimSort),
            other => return Err(SortBenchError::UnknownAlgorithm(other.to_string())),
        };
        algorithms.push(algorithm);
    }
    Ok(algorithms)
}

/// True when keys are non-decreasing.
pub fn is_sorted_by_key(rows: &[Row]) -> bool {
    rows.windows(2).all(|pair| pair[0].key <= pair[1].key)
}
