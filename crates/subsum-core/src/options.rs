//! Solver options and configuration.

use crate::constants::{DEFAULT_FFT_PARALLEL_THRESHOLD, DEFAULT_PARALLEL_THRESHOLD};

/// Options for subset-sum solving.
#[derive(Debug, Clone)]
pub struct SolverOptions {
    /// Input size above which recursive halves are solved in parallel.
    pub parallel_threshold: usize,
    /// Transform length above which FFT halves are computed in parallel.
    pub fft_parallel_threshold: usize,
    /// Whether to decompose the input into residue-class buckets.
    pub bucketing: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            fft_parallel_threshold: DEFAULT_FFT_PARALLEL_THRESHOLD,
            bucketing: true,
        }
    }
}

impl SolverOptions {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        if self.fft_parallel_threshold == 0 {
            self.fft_parallel_threshold = DEFAULT_FFT_PARALLEL_THRESHOLD;
        }
        self
    }

    /// Options that never fork.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            fft_parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = SolverOptions::default();
        assert_eq!(opts.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert_eq!(opts.fft_parallel_threshold, DEFAULT_FFT_PARALLEL_THRESHOLD);
        assert!(opts.bucketing);
    }

    #[test]
    fn normalize_zero_thresholds() {
        let opts = SolverOptions {
            parallel_threshold: 0,
            fft_parallel_threshold: 0,
            bucketing: false,
        };
        let normalized = opts.normalize();
        assert_eq!(normalized.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert_eq!(normalized.fft_parallel_threshold, DEFAULT_FFT_PARALLEL_THRESHOLD);
        assert!(!normalized.bucketing);
    }

    #[test]
    fn sequential_never_forks() {
        let opts = SolverOptions::sequential();
        assert_eq!(opts.parallel_threshold, usize::MAX);
        assert_eq!(opts.fft_parallel_threshold, usize::MAX);
    }
}
