//! # subsum-fft
//!
//! Recursive Cooley-Tukey FFT over `Complex64` sequences and polynomial
//! multiplication by convolution.

pub mod error;
pub mod fft;
pub mod fft_core;
pub mod fft_poly;
pub mod fft_recursion;

// Re-exports
pub use error::FftError;
pub use fft::{multiply_polynomials, multiply_polynomials_with_threshold};
pub use fft_core::{transform, transform_with_threshold, Direction};
pub use fft_poly::{direct_convolution, round_coefficients};
pub use num_complex::Complex64;

/// Transform length above which the two recursive halves run in parallel.
pub const DEFAULT_FFT_PARALLEL_THRESHOLD: usize = 1 << 14;
