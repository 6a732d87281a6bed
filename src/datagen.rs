//! Synthetic dataset generation.
//!
//! Produces the input shapes the benchmark is meant to exercise: uniform
//! random keys, fully reversed order, mostly sorted order, a narrow key
//! range, and a heavy-duplicate pool. Output is a header plus integer-valued
//! columns; the key column carries the requested distribution and the other
//! columns carry uniform filler.

use clap::ValueEnum;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::dataset::{Row, Table};
use crate::{Result, SortBenchError};

/// Fraction of rows swapped out of place for `PartiallySorted` (1 in 20).
const SHUFFLE_DIVISOR: usize = 20;
/// Window width for `LimitedRange`.
const LIMITED_WINDOW: i64 = 64;
/// Distinct values drawn for `Duplicates`.
const DUPLICATE_POOL: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Distribution {
    /// Uniform random integers in `[lower, upper]`.
    Uniform,
    /// Uniform keys sorted in descending order.
    Reversed,
    /// Uniform keys sorted ascending, then a few random swaps.
    PartiallySorted,
    /// Uniform keys over a 64-value window starting at `lower`.
    LimitedRange,
    /// Keys drawn from a pool of 16 distinct values.
    Duplicates,
}

#[derive(Debug, Clone)]
pub struct GenConfig {
    pub rows: usize,
    pub columns: usize,
    pub key_column: usize,
    pub distribution: Distribution,
    pub lower: i64,
    pub upper: i64,
    pub seed: Option<u64>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            rows: 10_000,
            columns: 1,
            key_column: 0,
            distribution: Distribution::Uniform,
            lower: 0,
            upper: 100_000,
            seed: None,
        }
    }
}

/// Generate an in-memory table per `config`. Deterministic for a fixed seed.
pub fn generate_table(config: &GenConfig) -> Result<Table> {
    if config.columns == 0 {
        return Err(SortBenchError::InvalidGenConfig(
            "at least one column is required".to_string(),
        ));
    }
    if config.key_column >= config.columns {
        return Err(SortBenchError::InvalidGenConfig(format!(
            "key column {} is out of bounds for {} columns",
            config.key_column, config.columns
        )));
    }
    if config.lower > config.upper {
        return Err(SortBenchError::InvalidGenConfig(format!(
            "lower bound {} exceeds upper bound {}",
            config.lower, config.upper
        )));
    }

    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let keys = generate_keys(config, &mut rng);

    let header: Vec<String> = (0..config.columns).map(|c| format!("col{c}")).collect();
    let mut rows = Vec::with_capacity(config.rows);
    for key in keys {
        let fields: Vec<String> = (0..config.columns)
            .map(|c| {
                if c == config.key_column {
                    key.to_string()
                } else {
                    rng.random_range(config.lower..=config.upper).to_string()
                }
            })
            .collect();
        rows.push(Row::new(key as f64, fields));
    }

    Ok(Table { header, rows })
}

fn generate_keys(config: &GenConfig, rng: &mut SmallRng) -> Vec<i64> {
    let n = config.rows;
    let uniform =
        |rng: &mut SmallRng| -> Vec<i64> {
            (0..n)
                .map(|_| rng.random_range(config.lower..=config.upper))
                .collect()
        };

    match config.distribution {
        Distribution::Uniform => uniform(rng),
        Distribution::Reversed => {
            let mut keys = uniform(rng);
            keys.sort_unstable_by(|a, b| b.cmp(a));
            keys
        }
        Distribution::PartiallySorted => {
            let mut keys = uniform(rng);
            keys.sort_unstable();
            if n > 1 {
                for _ in 0..(n / SHUFFLE_DIVISOR).max(1) {
                    let a = rng.random_range(0..n);
                    let b = rng.random_range(0..n);
                    keys.swap(a, b);
                }
            }
            keys
        }
        Distribution::LimitedRange => {
            // `upper - lower + 1` can overflow i64 for extreme bounds; an
            // overflowing span is necessarily wider than the window.
            let span = config
                .upper
                .checked_sub(config.lower)
                .and_then(|d| d.checked_add(1))
                .unwrap_or(i64::MAX);
            let width = LIMITED_WINDOW.min(span);
            (0..n)
                .map(|_| config.lower + rng.random_range(0..width))
                .collect()
        }
        Distribution::Duplicates => {
            let pool: Vec<i64> = (0..DUPLICATE_POOL)
                .map(|_| rng.random_range(config.lower..=config.upper))
                .collect();
            (0..n)
                .map(|_| pool[rng.random_range(0..pool.len())])
                .collect()
        }
    }
}
