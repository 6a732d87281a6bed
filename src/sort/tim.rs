//! Simplified timsort: insertion-sorted min-runs followed by bottom-up
//! doubling merges. Stable, no galloping, no run stack.

use crate::Result;
use crate::dataset::Row;
use crate::sort::SortAlgorithm;

const MIN_MERGE: usize = 32;

#[derive(Debug)]
pub struct TimSort;

impl SortAlgorithm for TimSort {
    fn name(&self) -> &'static str {
        "tim"
    }

    fn sort(&self, rows: &mut [Row]) -> Result<()> {
        let n = rows.len();
        if n < 2 {
            return Ok(());
        }

        let min_run = min_run_length(n);

        let mut start = 0;
        while start < n {
            let end = (start + min_run).min(n);
            insertion_sort(&mut rows[start..end]);
            start = end;
        }

        let mut size = min_run;
        while size < n {
            let mut left = 0;
            while left + size < n {
                let right = (left + 2 * size).min(n);
                merge(&mut rows[left..right], size);
                left += 2 * size;
            }
            size *= 2;
        }

        Ok(())
    }
}

/// Pick a run length so that `n / min_run` is a power of two or slightly
/// below one (standard halving rule, keeping the low bits' remainder).
fn min_run_length(mut n: usize) -> usize {
    let mut r = 0;
    while n >= MIN_MERGE {
        r |= n & 1;
        n >>= 1;
    }
    n + r
}

fn insertion_sort(rows: &mut [Row]) {
    for i in 1..rows.len() {
        let mut j = i;
        while j > 0 && rows[j - 1].key > rows[j].key {
            rows.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Merge the two sorted halves `rows[..mid]` and `rows[mid..]`. Ties take
/// from the left half, which keeps the merge stable.
fn merge(rows: &mut [Row], mid: usize) {
    let mut left = rows[..mid].to_vec().into_iter().peekable();
    let mut right = rows[mid..].to_vec().into_iter().peekable();

    for slot in rows.iter_mut() {
        let next = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) if l.key <= r.key => left.next(),
            (Some(_), None) => left.next(),
            _ => right.next(),
        };
        if let Some(row) = next {
            *slot = row;
        }
    }
}
