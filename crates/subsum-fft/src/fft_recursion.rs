//! Recursive FFT implementation with parallelism.

use std::f64::consts::PI;

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::fft_core::Direction;

/// Recursive radix-2 FFT with threshold-based parallelism.
///
/// The length of `input` must already be a power of two. Halves longer than
/// `parallel_threshold` are transformed concurrently with `rayon::join`; the
/// combine step is identical either way, so the output does not depend on
/// the threshold.
#[must_use]
pub fn fft_recursive(
    input: &[Complex64],
    direction: Direction,
    parallel_threshold: usize,
) -> Vec<Complex64> {
    let n = input.len();
    if n <= 1 {
        return input.to_vec();
    }

    let even: Vec<Complex64> = input.iter().step_by(2).copied().collect();
    let odd: Vec<Complex64> = input.iter().skip(1).step_by(2).copied().collect();

    let (even_fft, odd_fft) = if n <= parallel_threshold {
        (
            fft_recursive(&even, direction, parallel_threshold),
            fft_recursive(&odd, direction, parallel_threshold),
        )
    } else {
        rayon::join(
            || fft_recursive(&even, direction, parallel_threshold),
            || fft_recursive(&odd, direction, parallel_threshold),
        )
    };

    combine(&even_fft, &odd_fft, direction)
}

/// Butterfly combination of two half-size transforms.
fn combine(even: &[Complex64], odd: &[Complex64], direction: Direction) -> Vec<Complex64> {
    let half = even.len();
    let n = half * 2;
    let wn = principal_root(n, direction);
    let mut w = Complex64::one();

    let mut out = vec![Complex64::zero(); n];
    for k in 0..half {
        let twiddle = w * odd[k];
        out[k] = even[k] + twiddle;
        out[k + half] = even[k] - twiddle;
        w *= wn;
    }
    out
}

/// Principal n-th root of unity, e^(±2πi/n).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn principal_root(n: usize, direction: Direction) -> Complex64 {
    let angle = direction.sign() * 2.0 * PI / n as f64;
    Complex64::from_polar(1.0, angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn principal_root_of_four_is_i() {
        assert!(approx_eq(
            principal_root(4, Direction::Forward),
            Complex64::new(0.0, 1.0)
        ));
        assert!(approx_eq(
            principal_root(4, Direction::Inverse),
            Complex64::new(0.0, -1.0)
        ));
    }

    #[test]
    fn single_element_unchanged() {
        let input = vec![Complex64::new(42.0, -1.0)];
        assert_eq!(fft_recursive(&input, Direction::Forward, usize::MAX), input);
    }

    #[test]
    fn impulse_transforms_to_constant() {
        let mut input = vec![Complex64::zero(); 8];
        input[0] = Complex64::one();
        let out = fft_recursive(&input, Direction::Forward, usize::MAX);
        for c in out {
            assert!(approx_eq(c, Complex64::one()));
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let input: Vec<Complex64> = (0..256)
            .map(|i| Complex64::new(f64::from(i % 7), f64::from(i % 3)))
            .collect();
        let sequential = fft_recursive(&input, Direction::Forward, usize::MAX);
        let parallel = fft_recursive(&input, Direction::Forward, 2);
        assert_eq!(sequential, parallel);
    }
}
