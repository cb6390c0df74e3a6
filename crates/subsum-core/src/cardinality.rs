//! Divide-and-conquer subset sums with cardinality, `S^#_u(S)`.

use crate::options::SolverOptions;
use crate::pairwise::pairwise_sums_with_cardinality;
use crate::solver::SolverError;
use crate::sumset::CardinalitySums;

/// Every `(sum, cardinality)` of a subset of `values` with sum `<= bound`.
///
/// The input is split by position into halves of sizes ⌈n/2⌉ and ⌊n/2⌋,
/// each half solved recursively and the results combined with
/// [`pairwise_sums_with_cardinality`]. Above `opts.parallel_threshold`
/// elements the halves are solved with `rayon::join`.
pub fn subset_sums_with_cardinality(
    values: &[u64],
    bound: u64,
    opts: &SolverOptions,
) -> Result<CardinalitySums, SolverError> {
    match values {
        [] => Ok(CardinalitySums::empty_subset()),
        [value] => Ok(CardinalitySums::singleton(*value, bound)),
        _ => {
            let (left, right) = values.split_at(values.len().div_ceil(2));
            let (lhs, rhs) = if values.len() <= opts.parallel_threshold {
                (
                    subset_sums_with_cardinality(left, bound, opts),
                    subset_sums_with_cardinality(right, bound, opts),
                )
            } else {
                rayon::join(
                    || subset_sums_with_cardinality(left, bound, opts),
                    || subset_sums_with_cardinality(right, bound, opts),
                )
            };
            pairwise_sums_with_cardinality(&lhs?, &rhs?, bound, opts)
        }
    }
}
