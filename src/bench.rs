//! Benchmark driver: load each dataset once, then time every algorithm on
//! fresh clones of the rows. Timing covers the sort call only; cloning the
//! input happens outside the timed region.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use log::{error, info, warn};

use crate::dataset::{Row, read_table};
use crate::sort::{SortAlgorithm, is_sorted_by_key};
use crate::{Result, SortBenchError};

/// One dataset to benchmark: a CSV path and the key column index.
#[derive(Debug, Clone)]
pub struct BenchSpec {
    pub path: PathBuf,
    pub key_column: usize,
}

impl BenchSpec {
    /// Parse `PATH` or `PATH:KEYCOL`. A suffix that does not parse as a
    /// column index is treated as part of the path.
    pub fn parse(spec: &str) -> Result<Self> {
        if spec.is_empty() {
            return Err(SortBenchError::BadDatasetSpec(spec.to_string()));
        }

        if let Some((path, column)) = spec.rsplit_once(':') {
            if let Ok(key_column) = column.parse::<usize>() {
                if path.is_empty() {
                    return Err(SortBenchError::BadDatasetSpec(spec.to_string()));
                }
                return Ok(Self {
                    path: PathBuf::from(path),
                    key_column,
                });
            }
        }

        Ok(Self {
            path: PathBuf::from(spec),
            key_column: 0,
        })
    }
}

#[derive(Debug, Clone)]
pub struct BenchOptions {
    /// Untimed passes per algorithm before measuring.
    pub warmup: usize,
    /// Timed passes per algorithm.
    pub reps: usize,
    /// Check that the output keys are non-decreasing.
    pub verify: bool,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            warmup: 0,
            reps: 1,
            verify: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub dataset: String,
    pub algorithm: &'static str,
    pub rows: usize,
    pub mean_secs: f64,
    pub best_secs: f64,
    pub throughput_mrps: f64,
    pub sorted_ok: Option<bool>,
}

impl BenchmarkResult {
    fn new(
        dataset: String,
        algorithm: &'static str,
        rows: usize,
        times: &[f64],
        sorted_ok: Option<bool>,
    ) -> Self {
        let mean_secs = times.iter().sum::<f64>() / times.len() as f64;
        let best_secs = times.iter().cloned().fold(f64::INFINITY, f64::min);
        let throughput_mrps = if mean_secs > 0.0 {
            rows as f64 / mean_secs / 1_000_000.0
        } else {
            0.0
        };
        Self {
            dataset,
            algorithm,
            rows,
            mean_secs,
            best_secs,
            throughput_mrps,
            sorted_ok,
        }
    }
}

/// Run every algorithm against every dataset spec. An algorithm failure
/// (radix overflow, counting range, non-finite key) is logged and propagated.
pub fn run_benchmarks(
    specs: &[BenchSpec],
    algorithms: &[Box<dyn SortAlgorithm>],
    options: &BenchOptions,
) -> Result<Vec<BenchmarkResult>> {
    let reps = options.reps.max(1);
    if options.reps == 0 {
        warn!("reps clamped to 1");
    }

    let mut results = Vec::new();

    for spec in specs {
        let dataset = spec.path.display().to_string();
        let table = read_table(&spec.path, spec.key_column)?;
        info!(
            "loaded {} ({} rows, key column {})",
            dataset,
            table.len(),
            spec.key_column
        );

        println!("\nTimings for {dataset}:");

        for algorithm in algorithms {
            for _ in 0..options.warmup {
                let mut rows = table.rows.clone();
                run_one(algorithm.as_ref(), &mut rows, &dataset)?;
            }

            let mut times = Vec::with_capacity(reps);
            let mut sorted_ok = None;
            for rep in 0..reps {
                let mut rows = table.rows.clone();
                let start = Instant::now();
                run_one(algorithm.as_ref(), &mut rows, &dataset)?;
                times.push(start.elapsed().as_secs_f64());

                if options.verify && rep == 0 {
                    let ok = is_sorted_by_key(&rows);
                    if !ok {
                        warn!("{} produced unsorted output on {}", algorithm.name(), dataset);
                    }
                    sorted_ok = Some(ok);
                }
            }

            let result = BenchmarkResult::new(
                dataset.clone(),
                algorithm.name(),
                table.len(),
                &times,
                sorted_ok,
            );
            println!("{}: {:.6} seconds", result.algorithm, result.mean_secs);
            results.push(result);
        }
    }

    Ok(results)
}

fn run_one(algorithm: &dyn SortAlgorithm, rows: &mut [Row], dataset: &str) -> Result<()> {
    algorithm.sort(rows).map_err(|e| {
        error!("{} failed on {}: {}", algorithm.name(), dataset, e);
        e
    })
}

/// Print the final summary table.
pub fn display_results_table(results: &[BenchmarkResult]) {
    if results.is_empty() {
        return;
    }

    println!("\n{}", "=".repeat(92));
    println!(
        "{:<32} {:<10} {:>10} {:>12} {:>12} {:>10} {:>8}",
        "Dataset", "Algorithm", "Rows", "Mean (s)", "Best (s)", "Mrows/s", "Sorted"
    );
    println!("{}", "-".repeat(92));

    for r in results {
        let sorted = match r.sorted_ok {
            Some(true) => "yes",
            Some(false) => "NO",
            None => "-",
        };
        println!(
            "{:<32} {:<10} {:>10} {:>12.6} {:>12.6} {:>10.2} {:>8}",
            r.dataset, r.algorithm, r.rows, r.mean_secs, r.best_secs, r.throughput_mrps, sorted
        );
    }
    println!("{}", "=".repeat(92));
}

/// Append results to a CSV file, writing the header when the file is new.
pub fn write_results_csv(results: &[BenchmarkResult], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    // A zero-byte file still needs the header.
    let needs_header = std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| SortBenchError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let csv_err = |source| SortBenchError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_writer(file);
    if needs_header {
        writer
            .write_record([
                "timestamp",
                "dataset",
                "algorithm",
                "rows",
                "mean_secs",
                "best_secs",
                "throughput_mrps",
                "sorted_ok",
            ])
            .map_err(csv_err)?;
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    for r in results {
        let sorted = match r.sorted_ok {
            Some(ok) => ok.to_string(),
            None => String::new(),
        };
        let record = [
            timestamp.clone(),
            r.dataset.clone(),
            r.algorithm.to_string(),
            r.rows.to_string(),
            format!("{:.6}", r.mean_secs),
            format!("{:.6}", r.best_secs),
            format!("{:.3}", r.throughput_mrps),
            sorted,
        ];
        writer.write_record(&record).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| SortBenchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
