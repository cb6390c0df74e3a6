//! Orchestration interfaces.

use std::time::Duration;

use subsum_core::solver::SolverError;
use subsum_core::sumset::SubsetSums;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one solver's result.
    fn present_result(&self, result: &SolveResult, values: &[u64], bound: i64, details: bool);

    /// Present a side-by-side comparison of several solvers.
    fn present_comparison(&self, results: &[SolveResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single solver run.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Solver name.
    pub solver: String,
    /// The reachable sums or a structured error.
    pub outcome: Result<SubsetSums, SolverError>,
    /// Computation duration.
    pub duration: Duration,
}

impl SolveResult {
    /// The sums, if the solver succeeded.
    #[must_use]
    pub fn sums(&self) -> Option<&SubsetSums> {
        self.outcome.as_ref().ok()
    }
}
