//! Shell sort with Sedgewick's increment sequence.

use crate::Result;
use crate::dataset::Row;
use crate::sort::SortAlgorithm;

#[derive(Debug)]
pub struct ShellSort;

impl SortAlgorithm for ShellSort {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn sort(&self, rows: &mut [Row]) -> Result<()> {
        let n = rows.len();
        if n < 2 {
            return Ok(());
        }

        // Largest gap first, then a gap insertion sort per gap.
        for gap in sedgewick_gaps(n).into_iter().rev() {
            for i in gap..n {
                let mut j = i;
                while j >= gap && rows[j - gap].key > rows[j].key {
                    rows.swap(j - gap, j);
                    j -= gap;
                }
            }
        }

        Ok(())
    }
}

/// Sedgewick's increments in ascending order, capped at `n`:
/// `9·(2^i − 2^(i/2)) + 1` for even `i`, `8·2^i − 6·2^((i+1)/2) + 1` for odd.
fn sedgewick_gaps(n: usize) -> Vec<usize> {
    let mut gaps = Vec::new();
    let mut i = 0u32;
    loop {
        let gap: u128 = if i % 2 == 0 {
            9 * ((1u128 << i) - (1u128 << (i / 2))) + 1
        } else {
            8 * (1u128 << i) - 6 * (1u128 << ((i + 1) / 2)) + 1
        };
        if gap > n as u128 {
            break;
        }
        gaps.push(gap as usize);
        i += 1;
    }
    gaps
}
