//! In-memory CSV datasets.
//!
//! A dataset is loaded whole: every record keeps its raw fields, and the sort
//! key is parsed once from a fixed column index at load time. The algorithms
//! reorder entire rows and never look at the remaining fields.

use std::fs::File;
use std::path::Path;

use crate::{Result, SortBenchError};

/// One CSV record with its numeric sort key extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: f64,
    pub fields: Vec<String>,
}

impl Row {
    pub fn new(key: f64, fields: Vec<String>) -> Self {
        Self { key, fields }
    }
}

/// A loaded dataset: header plus rows.
#[derive(Debug, Clone)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a CSV file into memory, parsing the key column of every record as
/// `f64`. The first record is treated as a header. Blank lines are skipped.
pub fn read_table(path: impl AsRef<Path>, key_column: usize) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SortBenchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let header: Vec<String> = reader
        .headers()
        .map_err(|source| SortBenchError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|source| SortBenchError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        // Data rows are numbered from 1, not counting the header.
        let row_number = i + 1;

        let fields: Vec<String> = record.iter().map(String::from).collect();
        let key = parse_key(&fields, key_column, row_number)?;
        rows.push(Row { key, fields });
    }

    Ok(Table { header, rows })
}

fn parse_key(fields: &[String], column: usize, row: usize) -> Result<f64> {
    let raw = fields
        .get(column)
        .ok_or(SortBenchError::ColumnOutOfBounds {
            row,
            column,
            width: fields.len(),
        })?;

    raw.trim()
        .parse::<f64>()
        .map_err(|_| SortBenchError::BadNumber {
            row,
            column,
            value: raw.clone(),
        })
}

/// Write header and rows to a CSV file, creating parent directories first.
pub fn write_table(header: &[String], rows: &[Row], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| SortBenchError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(path).map_err(|source| SortBenchError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let csv_err = |source| SortBenchError::Csv {
        path: path.to_path_buf(),
        source,
    };

    writer.write_record(header).map_err(csv_err)?;
    for row in rows {
        writer.write_record(&row.fields).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| SortBenchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
