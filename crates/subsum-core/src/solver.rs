//! Solver trait and error type.
//!
//! `SubsetSumSolver` is the public trait consumed by orchestration.
//! `FftSolver` (bucketed FFT convolution) and `DynamicProgrammingSolver`
//! (bitset DP) implement it.

use subsum_fft::FftError;

use crate::options::SolverOptions;
use crate::sumset::SubsetSums;

/// Error type for subset-sum solving.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SolverError {
    /// The FFT engine rejected its input (a padding bug).
    #[error("transform error: {0}")]
    Fft(#[from] FftError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input could not be turned into values.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Results from different solvers don't match.
    #[error("result mismatch between solvers")]
    Mismatch,
}

/// Public trait for subset-sum solvers, consumed by orchestration.
pub trait SubsetSumSolver: Send + Sync {
    /// Compute every subset sum of `values` that is `<= bound`.
    ///
    /// A negative bound yields the empty set; an empty `values` yields `{0}`.
    fn solve(
        &self,
        values: &[u64],
        bound: i64,
        opts: &SolverOptions,
    ) -> Result<SubsetSums, SolverError>;

    /// Get the name of this solver.
    fn name(&self) -> &str;
}

/// Convert a signed bound, `None` when negative.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn checked_bound(bound: i64) -> Option<u64> {
    (bound >= 0).then_some(bound as u64)
}

/// Values that can take part in a sum `<= bound`.
#[must_use]
pub fn usable_values(values: &[u64], bound: u64) -> Vec<u64> {
    values.iter().copied().filter(|&v| v <= bound).collect()
}
