//! Pairwise sums `X ⊕_u Y` through FFT convolution.

use subsum_fft::multiply_polynomials_with_threshold;
use tracing::trace;

use crate::characteristic::{
    characteristic_polynomial, packed_polynomial, points_from_coefficients,
    sums_from_coefficients, transform_length,
};
use crate::options::SolverOptions;
use crate::solver::SolverError;
use crate::sumset::{CardinalitySums, SubsetSums};

/// `{x + y : x ∈ X, y ∈ Y} ∩ [0, bound]`.
#[allow(clippy::cast_possible_truncation)]
pub fn pairwise_sums(
    x: &SubsetSums,
    y: &SubsetSums,
    bound: u64,
    opts: &SolverOptions,
) -> Result<SubsetSums, SolverError> {
    let x = x.truncated(bound);
    let y = y.truncated(bound);
    let (Some(max_x), Some(max_y)) = (x.max(), y.max()) else {
        return Ok(SubsetSums::new());
    };

    let len = transform_length(max_x as usize, max_y as usize);
    trace!(len, lhs = x.len(), rhs = y.len(), "pairwise sums");

    let fx = characteristic_polynomial(&x, len);
    let fy = characteristic_polynomial(&y, len);
    let product = multiply_polynomials_with_threshold(&fx, &fy, opts.fft_parallel_threshold)?;
    Ok(sums_from_coefficients(&product, bound))
}

/// `{(x₁ + y₁, x₂ + y₂) : (x₁, x₂) ∈ X, (y₁, y₂) ∈ Y, x₁ + y₁ <= bound}`.
#[allow(clippy::cast_possible_truncation)]
pub fn pairwise_sums_with_cardinality(
    x: &CardinalitySums,
    y: &CardinalitySums,
    bound: u64,
    opts: &SolverOptions,
) -> Result<CardinalitySums, SolverError> {
    let x: CardinalitySums = x.iter().filter(|&(sum, _)| sum <= bound).collect();
    let y: CardinalitySums = y.iter().filter(|&(sum, _)| sum <= bound).collect();
    let (Some(max_x), Some(max_y)) = (x.max_sum(), y.max_sum()) else {
        return Ok(CardinalitySums::new());
    };
    let card_x = x.max_cardinality().unwrap_or(0) as usize;
    let card_y = y.max_cardinality().unwrap_or(0) as usize;

    let stride = card_x + card_y + 1;
    let len = ((max_x + max_y) as usize + 1)
        .checked_mul(stride)
        .ok_or_else(|| SolverError::Config("packed transform length overflows".into()))?
        .next_power_of_two();
    trace!(len, stride, lhs = x.len(), rhs = y.len(), "pairwise sums with cardinality");

    let fx = packed_polynomial(&x, stride, len);
    let fy = packed_polynomial(&y, stride, len);
    let product = multiply_polynomials_with_threshold(&fx, &fy, opts.fft_parallel_threshold)?;
    Ok(points_from_coefficients(&product, stride, bound))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u64]) -> SubsetSums {
        values.iter().copied().collect()
    }

    fn brute_force(x: &SubsetSums, y: &SubsetSums, bound: u64) -> SubsetSums {
        x.iter()
            .flat_map(|a| y.iter().map(move |b| a + b))
            .filter(|&s| s <= bound)
            .collect()
    }

    #[test]
    fn small_sets() {
        let opts = SolverOptions::default();
        let got = pairwise_sums(&set(&[0, 1]), &set(&[0, 2]), 10, &opts).unwrap();
        assert_eq!(got.to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn bound_truncates() {
        let opts = SolverOptions::default();
        let got = pairwise_sums(&set(&[0, 5]), &set(&[0, 5]), 7, &opts).unwrap();
        assert_eq!(got.to_vec(), vec![0, 5]);
    }

    #[test]
    fn empty_operand_gives_empty() {
        let opts = SolverOptions::default();
        assert!(pairwise_sums(&SubsetSums::new(), &set(&[0, 1]), 10, &opts)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn matches_brute_force() {
        let opts = SolverOptions::default();
        let x = set(&[0, 3, 4, 11, 17, 30]);
        let y = set(&[0, 1, 9, 13, 22]);
        for bound in [0, 5, 20, 40, 100] {
            assert_eq!(
                pairwise_sums(&x, &y, bound, &opts).unwrap(),
                brute_force(&x, &y, bound),
                "bound {bound}"
            );
        }
    }

    #[test]
    fn cardinalities_add() {
        let opts = SolverOptions::default();
        let x = CardinalitySums::singleton(3, 100);
        let y = CardinalitySums::singleton(3, 100);
        let got = pairwise_sums_with_cardinality(&x, &y, 100, &opts).unwrap();
        let expected: CardinalitySums = [(0, 0), (3, 1), (6, 2)].into_iter().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn all_witnesses_kept() {
        let opts = SolverOptions::default();
        // {1, 2} against {3}: sum 3 is reached by {3} and by {1, 2}.
        let x: CardinalitySums = [(0, 0), (1, 1), (2, 1), (3, 2)].into_iter().collect();
        let y = CardinalitySums::singleton(3, 100);
        let got = pairwise_sums_with_cardinality(&x, &y, 100, &opts).unwrap();
        assert!(got.contains(3, 1));
        assert!(got.contains(3, 2));
        assert_eq!(got.min_cardinality(3), Some(1));
        assert_eq!(got.max_sum(), Some(6));
    }

    #[test]
    fn cardinality_bound_truncates() {
        let opts = SolverOptions::default();
        let x = CardinalitySums::singleton(4, 100);
        let got = pairwise_sums_with_cardinality(&x, &x, 5, &opts).unwrap();
        let expected: CardinalitySums = [(0, 0), (4, 1)].into_iter().collect();
        assert_eq!(got, expected);
    }
}
