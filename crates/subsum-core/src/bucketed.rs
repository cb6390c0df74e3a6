//! Bucketed FFT subset sums, `S_u(S)`.
//!
//! The input is partitioned into b ≈ √(n·ln n) residue classes modulo b.
//! Every element of class l has the form `l + b·q`, so a k-element subset of
//! that class with rescaled sum Q has original sum `b·Q + l·k`, and
//! `b·Q <= u` bounds the rescaled problem by ⌊u/b⌋. The per-class sets are
//! then folded together with pairwise sums.

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, trace};

use crate::cardinality::subset_sums_with_cardinality;
use crate::options::SolverOptions;
use crate::pairwise::pairwise_sums;
use crate::solver::{checked_bound, usable_values, SolverError, SubsetSumSolver};
use crate::sumset::{CardinalitySums, SubsetSums};

/// FFT solver with residue-class bucketing.
pub struct FftSolver;

impl FftSolver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FftSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SubsetSumSolver for FftSolver {
    fn solve(
        &self,
        values: &[u64],
        bound: i64,
        opts: &SolverOptions,
    ) -> Result<SubsetSums, SolverError> {
        all_subset_sums(values, bound, opts)
    }

    fn name(&self) -> &'static str {
        "FFT"
    }
}

/// Number of residue classes for `n` elements: round(√(n·ln n)).
///
/// Zero for `n <= 1`, which selects the direct recursion.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn bucket_count(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let n = n as f64;
    (n * n.ln()).sqrt().round() as usize
}

/// Split `values` into `buckets` residue classes, rescaling each element
/// x of class l to (x − l) / buckets.
#[must_use]
pub fn partition_buckets(values: &[u64], buckets: usize) -> Vec<Vec<u64>> {
    let b = buckets as u64;
    let mut classes = vec![Vec::new(); buckets];
    for &x in values {
        let l = x % b;
        #[allow(clippy::cast_possible_truncation)]
        classes[l as usize].push((x - l) / b);
    }
    classes
}

/// Map rescaled points of class `residue` back to original sums `<= bound`.
#[must_use]
pub fn reconstruct_bucket(
    points: &CardinalitySums,
    buckets: usize,
    residue: u64,
    bound: u64,
) -> SubsetSums {
    let b = buckets as u64;
    points
        .iter()
        .map(|(q, k)| b * q + residue * k)
        .filter(|&s| s <= bound)
        .collect()
}

/// Every subset sum of `values` that is `<= bound`.
///
/// A negative bound gives the empty set and an empty input gives `{0}`.
pub fn all_subset_sums(
    values: &[u64],
    bound: i64,
    opts: &SolverOptions,
) -> Result<SubsetSums, SolverError> {
    let Some(bound) = checked_bound(bound) else {
        return Ok(SubsetSums::new());
    };
    let values = usable_values(values, bound);
    if values.is_empty() {
        return Ok(SubsetSums::zero());
    }

    let buckets = bucket_count(values.len());
    if buckets == 0 || !opts.bucketing {
        debug!(n = values.len(), bound, "solving without buckets");
        return Ok(subset_sums_with_cardinality(&values, bound, opts)?.sums());
    }

    let sub_bound = bound / buckets as u64;
    debug!(n = values.len(), bound, buckets, sub_bound, "solving with buckets");

    let classes = partition_buckets(&values, buckets);
    let solve_class = |(residue, class): (usize, &Vec<u64>)| -> Result<SubsetSums, SolverError> {
        trace!(residue, size = class.len(), "solving bucket");
        let points = subset_sums_with_cardinality(class, sub_bound, opts)?;
        Ok(reconstruct_bucket(&points, buckets, residue as u64, bound))
    };

    let per_bucket: Vec<SubsetSums> = if values.len() <= opts.parallel_threshold {
        classes.iter().enumerate().map(solve_class).collect::<Result<_, _>>()?
    } else {
        classes
            .iter()
            .enumerate()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(solve_class)
            .collect::<Result<_, _>>()?
    };

    let mut iter = per_bucket.into_iter();
    let mut result = iter.next().unwrap_or_else(SubsetSums::zero);
    for sums in iter {
        result = pairwise_sums(&result, &sums, bound, opts)?;
    }
    Ok(result)
}
