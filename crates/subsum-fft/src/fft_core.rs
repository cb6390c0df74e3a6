//! Core FFT transform: forward and inverse over complex sequences.

use num_complex::Complex64;

use crate::error::{check_length, FftError};
use crate::fft_recursion::fft_recursive;
use crate::DEFAULT_FFT_PARALLEL_THRESHOLD;

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Coefficients to point values, root e^(+2πi/n).
    Forward,
    /// Point values back to coefficients, root e^(−2πi/n), unnormalized.
    Inverse,
}

impl Direction {
    /// Sign of the exponent of the principal root.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Inverse => -1.0,
        }
    }
}

/// Transform `input` in the given direction.
///
/// The length must be a non-zero power of two. The inverse transform is not
/// scaled by 1/n; that is left to the caller.
pub fn transform(input: &[Complex64], direction: Direction) -> Result<Vec<Complex64>, FftError> {
    transform_with_threshold(input, direction, DEFAULT_FFT_PARALLEL_THRESHOLD)
}

/// Like [`transform`], forking the recursion above `parallel_threshold`.
pub fn transform_with_threshold(
    input: &[Complex64],
    direction: Direction,
    parallel_threshold: usize,
) -> Result<Vec<Complex64>, FftError> {
    check_length(input.len())?;
    Ok(fft_recursive(input, direction, parallel_threshold))
}
