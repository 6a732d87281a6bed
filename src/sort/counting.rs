//! Counting sort over the truncated integer value of the key.
//!
//! Allocates one bucket per integer between the minimum and maximum key, so
//! the key range is capped to keep a skewed dataset from exhausting memory.

use crate::dataset::Row;
use crate::sort::SortAlgorithm;
use crate::{Result, SortBenchError};

/// Upper bound on `max - min + 1` buckets.
const BUCKET_CAP: u64 = 1 << 32;

#[derive(Debug)]
pub struct CountingSort;

impl SortAlgorithm for CountingSort {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn sort(&self, rows: &mut [Row]) -> Result<()> {
        if rows.len() < 2 {
            return Ok(());
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for row in rows.iter() {
            if !row.key.is_finite() {
                return Err(SortBenchError::NonFiniteKey {
                    algorithm: "counting",
                    key: row.key,
                });
            }
            min = min.min(row.key);
            max = max.max(row.key);
        }

        let range_f = (max - min).trunc() + 1.0;
        if !range_f.is_finite() || range_f > BUCKET_CAP as f64 {
            return Err(SortBenchError::KeyRangeTooLarge {
                range: range_f as u64,
                cap: BUCKET_CAP,
            });
        }
        let range = range_f as usize;

        let bucket = |key: f64| (key - min) as usize;

        let mut count = vec![0usize; range];
        for row in rows.iter() {
            count[bucket(row.key)] += 1;
        }
        for b in 1..range {
            count[b] += count[b - 1];
        }

        // Back-to-front placement keeps equal buckets in input order.
        let src = rows.to_vec();
        for row in src.into_iter().rev() {
            let b = bucket(row.key);
            count[b] -= 1;
            rows[count[b]] = row;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::is_sorted_by_key;
    use crate::sort::testutil::{keys_of, tagged_rows};

    #[test]
    fn test_counting_sorts_small_range() {
        let mut rows = tagged_rows(&[4.0, 2.0, 2.0, 8.0, 3.0, 3.0, 1.0]);
        CountingSort.sort(&mut rows).unwrap();
        assert_eq!(keys_of(&rows), vec![1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 8.0]);
    }

    #[test]
    fn test_counting_handles_negative_keys() {
        let mut rows = tagged_rows(&[-3.0, 5.0, -7.0, 0.0, 5.0]);
        CountingSort.sort(&mut rows).unwrap();
        assert_eq!(keys_of(&rows), vec![-7.0, -3.0, 0.0, 5.0, 5.0]);
    }

    #[test]
    fn test_counting_is_stable() {
        let mut rows = tagged_rows(&[2.0, 1.0, 2.0, 1.0]);
        CountingSort.sort(&mut rows).unwrap();
        let tags: Vec<_> = rows.iter().map(|r| r.fields[0].as_str()).collect();
        assert_eq!(tags, vec!["r1", "r3", "r0", "r2"]);
    }

    #[test]
    fn test_counting_fractional_keys_bucket_by_truncation() {
        // With min 0.5, keys 2.4 and 2.1 both land in bucket trunc(key - min)
        // = 1, so they keep their input order.
        let mut rows = tagged_rows(&[2.4, 0.5, 2.1]);
        CountingSort.sort(&mut rows).unwrap();
        let tags: Vec<_> = rows.iter().map(|r| r.fields[0].as_str()).collect();
        assert_eq!(tags, vec!["r1", "r0", "r2"]);
    }

    #[test]
    fn test_counting_rejects_huge_range() {
        let mut rows = tagged_rows(&[0.0, 1e18]);
        let err = CountingSort.sort(&mut rows).unwrap_err();
        assert!(matches!(err, SortBenchError::KeyRangeTooLarge { .. }));
    }

    #[test]
    fn test_counting_rejects_non_finite_keys() {
        let mut rows = tagged_rows(&[f64::INFINITY, 0.0]);
        let err = CountingSort.sort(&mut rows).unwrap_err();
        assert!(matches!(
            err,
            SortBenchError::NonFiniteKey { algorithm: "counting", .. }
        ));
    }

    #[test]
    fn test_counting_all_equal_keys() {
        let mut rows = tagged_rows(&[9.0, 9.0, 9.0]);
        CountingSort.sort(&mut rows).unwrap();
        assert!(is_sorted_by_key(&rows));
        let tags: Vec<_> = rows.iter().map(|r| r.fields[0].as_str()).collect();
        assert_eq!(tags, vec!["r0", "r1", "r2"]);
    }
}
