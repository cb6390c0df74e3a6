//! Polynomial coefficient helpers for FFT multiplication.

use num_complex::Complex64;
use num_traits::Zero;

/// Pointwise multiplication of two point-value arrays.
#[must_use]
pub fn pointwise_multiply(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).collect()
}

/// Divide every coefficient by the transform length, in place.
#[allow(clippy::cast_precision_loss)]
pub fn normalize(coeffs: &mut [Complex64]) {
    let n = coeffs.len() as f64;
    for c in coeffs.iter_mut() {
        *c /= n;
    }
}

/// Round the real part of every coefficient to the nearest integer.
///
/// Convolutions of integral sequences leave small fractional and imaginary
/// noise; this recovers the exact integer coefficients as long as the noise
/// stays below one half.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_coefficients(coeffs: &[Complex64]) -> Vec<i64> {
    coeffs.iter().map(|c| c.re.round() as i64).collect()
}

/// Schoolbook O(n·m) linear convolution.
///
/// The result has `a.len() + b.len() - 1` coefficients (empty if either
/// operand is empty).
#[must_use]
pub fn direct_convolution(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![Complex64::zero(); a.len() + b.len() - 1];
    for (i, ai) in a.iter().enumerate() {
        for (j, bj) in b.iter().enumerate() {
            out[i + j] += ai * bj;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complexify(values: &[f64]) -> Vec<Complex64> {
        values.iter().map(|&v| Complex64::new(v, 0.0)).collect()
    }

    #[test]
    fn pointwise_multiply_simple() {
        let a = complexify(&[3.0, 5.0]);
        let b = vec![Complex64::new(7.0, 0.0), Complex64::new(0.0, 1.0)];
        let c = pointwise_multiply(&a, &b);
        assert_eq!(c[0], Complex64::new(21.0, 0.0));
        assert_eq!(c[1], Complex64::new(0.0, 5.0));
    }

    #[test]
    fn normalize_divides_by_length() {
        let mut coeffs = complexify(&[4.0, 8.0, 12.0, 16.0]);
        normalize(&mut coeffs);
        assert_eq!(coeffs, complexify(&[1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn rounding_discards_noise() {
        let coeffs = vec![
            Complex64::new(0.999_999_8, 1e-9),
            Complex64::new(-1e-10, -1e-12),
            Complex64::new(2.000_01, 0.0),
        ];
        assert_eq!(round_coefficients(&coeffs), vec![1, 0, 2]);
    }

    #[test]
    fn direct_convolution_binomial() {
        let a = complexify(&[1.0, 1.0]);
        let c = direct_convolution(&a, &a);
        assert_eq!(round_coefficients(&c), vec![1, 2, 1]);
    }

    #[test]
    fn direct_convolution_empty() {
        assert!(direct_convolution(&[], &complexify(&[1.0])).is_empty());
    }
}
