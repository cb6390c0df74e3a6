//! Public polynomial multiplication API.
//!
//! Forward-transforms both operands, multiplies pointwise, inverse-transforms
//! and normalizes by the length.

use num_complex::Complex64;
use tracing::trace;

use crate::error::{check_length, FftError};
use crate::fft_core::Direction;
use crate::fft_poly::{normalize, pointwise_multiply};
use crate::fft_recursion::fft_recursive;
use crate::DEFAULT_FFT_PARALLEL_THRESHOLD;

/// Multiply two polynomials given as coefficient sequences.
///
/// Both operands must have the same power-of-two length n, large enough to
/// hold the full product: the result is the cyclic convolution of length n,
/// which equals the linear one only when the caller has padded enough.
/// Real parts should be rounded by the caller when the coefficients are
/// known to be integral.
pub fn multiply_polynomials(a: &[Complex64], b: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    multiply_polynomials_with_threshold(a, b, DEFAULT_FFT_PARALLEL_THRESHOLD)
}

/// Like [`multiply_polynomials`], forking transforms above `parallel_threshold`.
pub fn multiply_polynomials_with_threshold(
    a: &[Complex64],
    b: &[Complex64],
    parallel_threshold: usize,
) -> Result<Vec<Complex64>, FftError> {
    if a.len() != b.len() {
        return Err(FftError::MismatchedOperands {
            left: a.len(),
            right: b.len(),
        });
    }
    let n = a.len();
    check_length(n)?;
    trace!(n, "multiplying polynomials");

    let (fa, fb) = if n <= parallel_threshold {
        (
            fft_recursive(a, Direction::Forward, parallel_threshold),
            fft_recursive(b, Direction::Forward, parallel_threshold),
        )
    } else {
        rayon::join(
            || fft_recursive(a, Direction::Forward, parallel_threshold),
            || fft_recursive(b, Direction::Forward, parallel_threshold),
        )
    };

    let fc = pointwise_multiply(&fa, &fb);
    let mut product = fft_recursive(&fc, Direction::Inverse, parallel_threshold);
    normalize(&mut product);
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fft_poly::{direct_convolution, round_coefficients};

    fn complexify(values: &[f64]) -> Vec<Complex64> {
        values.iter().map(|&v| Complex64::new(v, 0.0)).collect()
    }

    #[test]
    fn binomial_square() {
        // (1 + x)^2 = 1 + 2x + x^2
        let a = complexify(&[1.0, 1.0, 0.0, 0.0]);
        let c = multiply_polynomials(&a, &a).unwrap();
        assert_eq!(round_coefficients(&c), vec![1, 2, 1, 0]);
    }

    #[test]
    fn one_offset_convention() {
        // Reading index i as x^(i+1), both inputs are x + x^2 and the product
        // x^2 + 2x^3 + x^4 appears as [0, 1, 2, 1] once shifted back by one.
        let a = complexify(&[1.0, 1.0, 0.0, 0.0]);
        let c = round_coefficients(&multiply_polynomials(&a, &a).unwrap());
        let shifted: Vec<i64> = std::iter::once(0).chain(c[..3].iter().copied()).collect();
        assert_eq!(shifted, vec![0, 1, 2, 1]);
    }

    #[test]
    fn explicit_exponents() {
        // x + x^2 squared, padded to 8 coefficients.
        let a = complexify(&[0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let c = multiply_polynomials(&a, &a).unwrap();
        assert_eq!(round_coefficients(&c), vec![0, 0, 1, 2, 1, 0, 0, 0]);
    }

    #[test]
    fn constant_times_linear() {
        // 2 * (1 + 3x) = 2 + 6x
        let a = complexify(&[2.0, 0.0, 0.0, 0.0]);
        let b = complexify(&[1.0, 3.0, 0.0, 0.0]);
        let c = multiply_polynomials(&a, &b).unwrap();
        assert_eq!(round_coefficients(&c), vec![2, 6, 0, 0]);
    }

    #[test]
    fn matches_direct_convolution() {
        let a = complexify(&[3.0, 1.0, 4.0, 1.0, 5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let b = complexify(&[9.0, 2.0, 6.0, 5.0, 3.0, 5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let fast = round_coefficients(&multiply_polynomials(&a, &b).unwrap());
        let slow = round_coefficients(&direct_convolution(&a, &b));
        assert_eq!(&fast[..], &slow[..16]);
    }

    #[test]
    fn parallel_threshold_does_not_change_result() {
        let a: Vec<Complex64> = (0..64)
            .map(|i| Complex64::new(f64::from(i % 5), 0.0))
            .collect();
        let sequential = multiply_polynomials_with_threshold(&a, &a, usize::MAX).unwrap();
        let parallel = multiply_polynomials_with_threshold(&a, &a, 4).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn mismatched_operands_rejected() {
        let a = complexify(&[1.0, 0.0]);
        let b = complexify(&[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(
            multiply_polynomials(&a, &b),
            Err(FftError::MismatchedOperands { left: 2, right: 4 })
        );
    }

    #[test]
    fn invalid_length_rejected() {
        let a = complexify(&[1.0, 2.0, 3.0]);
        assert_eq!(multiply_polynomials(&a, &a), Err(FftError::InvalidLength(3)));
        assert_eq!(multiply_polynomials(&[], &[]), Err(FftError::InvalidLength(0)));
    }
}
