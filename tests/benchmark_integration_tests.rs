mod common;

use common::write_csv;
use sortbench::bench::{BenchOptions, BenchSpec, run_benchmarks, write_results_csv};
use sortbench::sort::lookup;
use sortbench::{SortBenchError, all_algorithms};

fn sample_csv() -> String {
    let mut contents = String::from("id,value\n");
    for i in 0..200 {
        let key = (i * 7919) % 1000;
        contents.push_str(&format!("{i},{key}\n"));
    }
    contents
}

#[test]
fn test_benchmark_runs_all_algorithms() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "sample.csv", &sample_csv());

    let specs = vec![BenchSpec::parse(&format!("{}:1", path.display())).unwrap()];
    let options = BenchOptions {
        warmup: 1,
        reps: 2,
        verify: true,
    };

    let results = run_benchmarks(&specs, &all_algorithms(), &options).unwrap();

    assert_eq!(results.len(), 4);
    for result in &results {
        assert_eq!(result.rows, 200);
        assert_eq!(result.sorted_ok, Some(true));
        assert!(result.mean_secs.is_finite() && result.mean_secs >= 0.0);
        assert!(result.best_secs <= result.mean_secs + f64::EPSILON);
    }

    let names: Vec<_> = results.iter().map(|r| r.algorithm).collect();
    assert_eq!(names, vec!["radix", "shell", "counting", "tim"]);
}

#[test]
fn test_benchmark_missing_file_is_an_error() {
    let specs = vec![BenchSpec::parse("does_not_exist.csv").unwrap()];
    let err = run_benchmarks(&specs, &all_algorithms(), &BenchOptions::default()).unwrap_err();
    assert!(matches!(err, SortBenchError::Io { .. }));
}

#[test]
fn test_radix_overflow_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "huge.csv", "k\n0\n1e19\n");

    let specs = vec![BenchSpec::parse(path.to_str().unwrap()).unwrap()];
    let algorithms = lookup(&["radix".to_string()]).unwrap();

    let err = run_benchmarks(&specs, &algorithms, &BenchOptions::default()).unwrap_err();
    assert!(matches!(err, SortBenchError::RadixOverflow { .. }));
}

#[test]
fn test_results_csv_writes_header_into_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_csv(dir.path(), "sample.csv", &sample_csv());
    let out = dir.path().join("results.csv");
    std::fs::File::create(&out).unwrap();

    let specs = vec![BenchSpec::parse(&format!("{}:1", data.display())).unwrap()];
    let algorithms = lookup(&["counting".to_string()]).unwrap();
    let results = run_benchmarks(&specs, &algorithms, &BenchOptions::default()).unwrap();
    write_results_csv(&results, &out).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("timestamp,dataset,algorithm"));
    assert!(lines[1].contains(",counting,"));
}

#[test]
fn test_results_csv_appends_with_single_header() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_csv(dir.path(), "sample.csv", &sample_csv());
    let out = dir.path().join("results.csv");

    let specs = vec![BenchSpec::parse(&format!("{}:1", data.display())).unwrap()];
    let algorithms = lookup(&["tim".to_string(), "shell".to_string()]).unwrap();

    let results = run_benchmarks(&specs, &algorithms, &BenchOptions::default()).unwrap();
    write_results_csv(&results, &out).unwrap();
    write_results_csv(&results, &out).unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    // One header plus two batches of two results.
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("timestamp,dataset,algorithm"));
    assert!(lines[1].contains(",tim,"));
    assert!(lines[2].contains(",shell,"));
}
