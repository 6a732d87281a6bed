//! Least-significant-digit radix sort, base 10.
//!
//! Negative keys are handled by shifting everything so the smallest key maps
//! to zero. Each decimal digit gets one stable counting pass, so rows with
//! equal truncated keys keep their input order.

use crate::dataset::Row;
use crate::sort::SortAlgorithm;
use crate::{Result, SortBenchError};

/// Largest shifted key the digit extraction accepts. `f64` loses integer
/// exactness past 2^53, but division and truncation stay monotone, so the
/// extracted digits still order keys correctly up to the `u64` cast limit.
const MAX_SHIFTED_KEY: f64 = 9_223_372_036_854_775_808.0; // 2^63

#[derive(Debug)]
pub struct RadixSort;

impl SortAlgorithm for RadixSort {
    fn name(&self) -> &'static str {
        "radix"
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
                    algorithm: "radix",
                    key: row.key,
                });
            }
            min = min.min(row.key);
            max = max.max(row.key);
        }

        let offset = if min < 0.0 { -min } else { 0.0 };

        // Digit count comes from the largest *shifted* key, so negative
        // inputs cannot under-count passes.
        let span = max + offset;
        if span >= MAX_SHIFTED_KEY {
            return Err(SortBenchError::RadixOverflow { max: span });
        }

        let mut exp = 1.0_f64;
        loop {
            counting_pass(rows, exp, offset);
            if span / exp < 10.0 {
                break;
            }
            exp *= 10.0;
        }

        Ok(())
    }
}

/// One stable counting pass over the decimal digit selected by `exp`.
fn counting_pass(rows: &mut [Row], exp: f64, offset: f64) {
    let mut count = [0usize; 10];
    for row in rows.iter() {
        count[digit(row.key, offset, exp)] += 1;
    }
    for d in 1..10 {
        count[d] += count[d - 1];
    }

    let src = rows.to_vec();
    for row in src.into_iter().rev() {
        let d = digit(row.key, offset, exp);
        count[d] -= 1;
        rows[count[d]] = row;
    }
}

fn digit(key: f64, offset: f64, exp: f64) -> usize {
    (((key + offset) / exp) as u64 % 10) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::testutil::{keys_of, tagged_rows};
    use crate::sort::is_sorted_by_key;

    #[test]
    fn test_radix_sorts_positive_keys() {
        let mut rows = tagged_rows(&[170.0, 45.0, 75.0, 90.0, 802.0, 24.0, 2.0, 66.0]);
        RadixSort.sort(&mut rows).unwrap();
        assert_eq!(
            keys_of(&rows),
            vec![2.0, 24.0, 45.0, 66.0, 75.0, 90.0, 170.0, 802.0]
        );
    }

    #[test]
    fn test_radix_handles_negative_keys() {
        let mut rows = tagged_rows(&[-5.0, 99.0, -100.0, 0.0, 42.0]);
        RadixSort.sort(&mut rows).unwrap();
        assert_eq!(keys_of(&rows), vec![-100.0, -5.0, 0.0, 42.0, 99.0]);
    }

    #[test]
    fn test_radix_digit_count_uses_shifted_span() {
        // max(|key|) would give 2 digits here, but the shifted span needs 3.
        let mut rows = tagged_rows(&[-5.0, 99.0]);
        RadixSort.sort(&mut rows).unwrap();
        assert!(is_sorted_by_key(&rows));
    }

    #[test]
    fn test_radix_is_stable_on_equal_keys() {
        let mut rows = tagged_rows(&[7.0, 3.0, 7.0, 3.0, 7.0]);
        RadixSort.sort(&mut rows).unwrap();
        let tags: Vec<_> = rows.iter().map(|r| r.fields[0].as_str()).collect();
        assert_eq!(tags, vec!["r1", "r3", "r0", "r2", "r4"]);
    }

    #[test]
    fn test_radix_empty_and_single() {
        let mut empty = tagged_rows(&[]);
        RadixSort.sort(&mut empty).unwrap();
        assert!(empty.is_empty());

        let mut single = tagged_rows(&[1.5]);
        RadixSort.sort(&mut single).unwrap();
        assert_eq!(keys_of(&single), vec![1.5]);
    }

    #[test]
    fn test_radix_rejects_non_finite_keys() {
        let mut rows = tagged_rows(&[1.0, f64::NAN]);
        let err = RadixSort.sort(&mut rows).unwrap_err();
        assert!(matches!(
            err,
            SortBenchError::NonFiniteKey { algorithm: "radix", .. }
        ));
    }

    #[test]
    fn test_radix_rejects_oversized_span() {
        let mut rows = tagged_rows(&[0.0, 1e19]);
        let err = RadixSort.sort(&mut rows).unwrap_err();
        assert!(matches!(err, SortBenchError::RadixOverflow { .. }));
    }
}
