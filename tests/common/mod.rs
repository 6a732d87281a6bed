#![allow(dead_code)]

use std::path::{Path, PathBuf};

use sortbench::Row;

pub fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write test CSV");
    path
}

/// Rows with a single field recording the original position.
pub fn rows_with_keys(keys: &[f64]) -> Vec<Row> {
    keys.iter()
        .enumerate()
        .map(|(i, &key)| Row::new(key, vec![i.to_string()]))
        .collect()
}
