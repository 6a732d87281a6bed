use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by dataset I/O, data generation and the sorting
/// algorithms themselves.
#[derive(Error, Debug)]
pub enum SortBenchError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: key column {column} is out of bounds (row has {width} fields)")]
    ColumnOutOfBounds {
        row: usize,
        column: usize,
        width: usize,
    },

    #[error("row {row}: cannot parse {value:?} in column {column} as a number")]
    BadNumber {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("{algorithm}: key {key} is not finite")]
    NonFiniteKey { algorithm: &'static str, key: f64 },

    #[error("radix sort overflow: shifted key range {max} exceeds the largest exactly representable digit span")]
    RadixOverflow { max: f64 },

    #[error("counting sort: key range {range} exceeds the bucket cap {cap}")]
    KeyRangeTooLarge { range: u64, cap: u64 },

    #[error("unknown algorithm {0:?} (expected radix, shell, counting or tim)")]
    UnknownAlgorithm(String),

    #[error("invalid generator config: {0}")]
    InvalidGenConfig(String),

    #[error("invalid dataset spec {0:?} (expected PATH or PATH:KEYCOL)")]
    BadDatasetSpec(String),

    #[error("logging setup failed: {0}")]
    Logging(String),
}
