//! Constants for solver thresholds and exit codes.

/// Default input size above which the two halves of the cardinality
/// recursion (and the per-bucket solves) run in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Default transform length above which FFT halves run in parallel.
pub const DEFAULT_FFT_PARALLEL_THRESHOLD: usize = subsum_fft::DEFAULT_FFT_PARALLEL_THRESHOLD;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Solver results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
