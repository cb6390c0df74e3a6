//! Characteristic polynomials: conversions between sets and coefficients.
//!
//! A set S maps to the polynomial with coefficient 1 at x^v for every v in S.
//! Multiplying two such polynomials counts, at each exponent, how many
//! pairs sum to it; a non-zero count marks a reachable sum.
//!
//! Point sets `(sum, cardinality)` use a Kronecker substitution: the point
//! is placed at exponent `sum * stride + cardinality`. As long as `stride`
//! exceeds every combined cardinality, cardinalities never carry into the
//! next sum and one 1-D convolution performs the 2-D one.

use num_complex::Complex64;
use subsum_fft::round_coefficients;

use crate::sumset::{CardinalitySums, SubsetSums};

/// Transform length that holds the product of polynomials of degree
/// `deg_a` and `deg_b` without wraparound.
#[must_use]
pub fn transform_length(deg_a: usize, deg_b: usize) -> usize {
    (deg_a + deg_b + 1).next_power_of_two()
}

/// Characteristic polynomial of `set`, padded with zeros to `len`.
///
/// Members `>= len` are not representable and are skipped.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn characteristic_polynomial(set: &SubsetSums, len: usize) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(0.0, 0.0); len];
    for v in set.iter() {
        let idx = v as usize;
        if idx < len {
            coeffs[idx] = Complex64::new(1.0, 0.0);
        }
    }
    coeffs
}

/// Exponents whose rounded coefficient is positive, up to `bound`.
#[must_use]
pub fn sums_from_coefficients(coeffs: &[Complex64], bound: u64) -> SubsetSums {
    round_coefficients(coeffs)
        .into_iter()
        .zip(0u64..)
        .take_while(|&(_, exponent)| exponent <= bound)
        .filter(|&(count, _)| count > 0)
        .map(|(_, exponent)| exponent)
        .collect()
}

/// Kronecker-packed polynomial of a point set.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn packed_polynomial(points: &CardinalitySums, stride: usize, len: usize) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(0.0, 0.0); len];
    for (sum, card) in points.iter() {
        let idx = sum as usize * stride + card as usize;
        if idx < len {
            coeffs[idx] = Complex64::new(1.0, 0.0);
        }
    }
    coeffs
}

/// Unpack a Kronecker-packed product back into points with sum `<= bound`.
#[must_use]
pub fn points_from_coefficients(coeffs: &[Complex64], stride: usize, bound: u64) -> CardinalitySums {
    let stride = stride as u64;
    round_coefficients(coeffs)
        .into_iter()
        .zip(0u64..)
        .filter(|&(count, _)| count > 0)
        .map(|(_, idx)| (idx / stride, idx % stride))
        .take_while(|&(sum, _)| sum <= bound)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_fits_product() {
        assert_eq!(transform_length(0, 0), 1);
        assert_eq!(transform_length(3, 4), 8);
        assert_eq!(transform_length(4, 4), 16);
    }

    #[test]
    fn set_roundtrip() {
        let set: SubsetSums = [0, 2, 5].into_iter().collect();
        let coeffs = characteristic_polynomial(&set, 8);
        assert_eq!(coeffs.len(), 8);
        assert_eq!(sums_from_coefficients(&coeffs, 100), set);
    }

    #[test]
    fn readback_respects_bound() {
        let set: SubsetSums = [0, 2, 5, 7].into_iter().collect();
        let coeffs = characteristic_polynomial(&set, 8);
        assert_eq!(sums_from_coefficients(&coeffs, 5).to_vec(), vec![0, 2, 5]);
    }

    #[test]
    fn small_noise_is_not_membership() {
        let coeffs = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.3, 0.2),
            Complex64::new(1.9, 0.0),
            Complex64::new(-0.2, 0.0),
        ];
        assert_eq!(sums_from_coefficients(&coeffs, 10).to_vec(), vec![0, 2]);
    }

    #[test]
    fn packed_roundtrip() {
        let points: CardinalitySums = [(0, 0), (1, 1), (3, 2)].into_iter().collect();
        let stride = 3;
        let coeffs = packed_polynomial(&points, stride, 16);
        assert_eq!(coeffs[0].re, 1.0);
        assert_eq!(coeffs[4].re, 1.0);
        assert_eq!(coeffs[11].re, 1.0);
        assert_eq!(points_from_coefficients(&coeffs, stride, 10), points);
        assert_eq!(points_from_coefficients(&coeffs, stride, 2).len(), 2);
    }
}
