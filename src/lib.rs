// CSV sorting algorithm benchmark library

pub mod bench;
pub mod datagen;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod sort;

pub use bench::{
    BenchOptions, BenchSpec, BenchmarkResult, display_results_table, run_benchmarks,
    write_results_csv,
};
pub use datagen::{Distribution, GenConfig, generate_table};
pub use dataset::{Row, Table, read_table, write_table};
pub use error::SortBenchError;
pub use sort::{CountingSort, RadixSort, ShellSort, SortAlgorithm, TimSort, all_algorithms};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SortBenchError>;
