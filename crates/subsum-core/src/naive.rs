//! Dynamic-programming subset sums in O(n·u).
//!
//! Used as the ground-truth oracle for the FFT solver and selectable from
//! the CLI for comparison.

use crate::options::SolverOptions;
use crate::solver::{checked_bound, usable_values, SolverError, SubsetSumSolver};
use crate::sumset::{CardinalitySums, SubsetSums};

/// Bitset dynamic-programming solver.
pub struct DynamicProgrammingSolver;

impl DynamicProgrammingSolver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for DynamicProgrammingSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SubsetSumSolver for DynamicProgrammingSolver {
    fn solve(
        &self,
        values: &[u64],
        bound: i64,
        _opts: &SolverOptions,
    ) -> Result<SubsetSums, SolverError> {
        Ok(checked_bound(bound).map_or_else(SubsetSums::new, |u| subset_sums_dp(values, u)))
    }

    fn name(&self) -> &'static str {
        "DynamicProgramming"
    }
}

/// Subset sums `<= bound` by the classic reachability table.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn subset_sums_dp(values: &[u64], bound: u64) -> SubsetSums {
    let u = bound as usize;
    let mut reachable = vec![false; u + 1];
    reachable[0] = true;
    for v in usable_values(values, bound) {
        let v = v as usize;
        for s in (v..=u).rev() {
            if reachable[s - v] {
                reachable[s] = true;
            }
        }
    }
    reachable
        .iter()
        .zip(0u64..)
        .filter(|(&hit, _)| hit)
        .map(|(_, s)| s)
        .collect()
}

/// Every `(sum, cardinality)` with sum `<= bound`, by a 2-D table.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn subset_sums_with_cardinality_dp(values: &[u64], bound: u64) -> CardinalitySums {
    let u = bound as usize;
    let n = values.len();
    // table[s][k]: some k-element subset sums to s
    let mut table = vec![vec![false; n + 1]; u + 1];
    table[0][0] = true;
    for (taken, &v) in values.iter().enumerate() {
        if v > bound {
            continue;
        }
        let v = v as usize;
        for s in (v..=u).rev() {
            for k in (1..=taken + 1).rev() {
                if table[s - v][k - 1] {
                    table[s][k] = true;
                }
            }
        }
    }

    let mut points = CardinalitySums::new();
    for (s, row) in (0u64..).zip(&table) {
        for (k, &hit) in (0u64..).zip(row) {
            if hit {
                points.insert(s, k);
            }
        }
    }
    points
}
