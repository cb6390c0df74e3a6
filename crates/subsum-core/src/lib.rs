//! # subsum-core
//!
//! Subset sums bounded by u, computed by divide-and-conquer over FFT
//! convolutions of characteristic polynomials, with residue-class bucketing
//! to shrink the working range.

pub mod bucketed;
pub mod cardinality;
pub mod characteristic;
pub mod constants;
pub mod naive;
pub mod options;
pub mod pairwise;
pub mod registry;
pub mod solver;
pub mod sumset;

// Re-exports
pub use bucketed::{bucket_count, FftSolver};
pub use constants::{exit_codes, DEFAULT_FFT_PARALLEL_THRESHOLD, DEFAULT_PARALLEL_THRESHOLD};
pub use naive::DynamicProgrammingSolver;
pub use options::SolverOptions;
pub use pairwise::{pairwise_sums, pairwise_sums_with_cardinality};
pub use registry::{DefaultFactory, SolverFactory};
pub use solver::{SolverError, SubsetSumSolver};
pub use sumset::{CardinalitySums, SubsetSums};

/// Every subset sum of `values` that is `<= bound`, with default options.
///
/// # Example
/// ```
/// let sums = subsum_core::all_subset_sums(&[1, 2, 4], 10).unwrap();
/// assert_eq!(sums.to_vec(), vec![0, 1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn all_subset_sums(values: &[u64], bound: i64) -> Result<SubsetSums, SolverError> {
    bucketed::all_subset_sums(values, bound, &SolverOptions::default())
}

/// Every `(sum, cardinality)` of a subset of `values` with sum `<= bound`.
///
/// Uses the direct recursion: bucket folding forgets cardinalities.
///
/// # Example
/// ```
/// let points = subsum_core::all_subset_sums_with_cardinality(&[3, 1, 2], 10).unwrap();
/// assert_eq!(points.min_cardinality(3), Some(1));
/// assert!(points.contains(3, 2));
/// ```
pub fn all_subset_sums_with_cardinality(
    values: &[u64],
    bound: i64,
) -> Result<CardinalitySums, SolverError> {
    let Some(bound) = solver::checked_bound(bound) else {
        return Ok(CardinalitySums::new());
    };
    cardinality::subset_sums_with_cardinality(values, bound, &SolverOptions::default())
}
