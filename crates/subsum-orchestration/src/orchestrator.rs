//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, warn};

use subsum_core::options::SolverOptions;
use subsum_core::solver::{SolverError, SubsetSumSolver};

use crate::interfaces::SolveResult;

/// Execute one timed solver run.
fn run_solver(
    solver: &Arc<dyn SubsetSumSolver>,
    values: &[u64],
    bound: i64,
    opts: &SolverOptions,
) -> SolveResult {
    let start = Instant::now();
    let outcome = solver.solve(values, bound, opts);
    let duration = start.elapsed();
    debug!(solver = solver.name(), ?duration, ok = outcome.is_ok(), "solver finished");
    SolveResult {
        solver: solver.name().to_string(),
        outcome,
        duration,
    }
}

/// Execute every given solver on the same input.
///
/// A single solver runs on the calling thread; several run concurrently.
/// Results keep the order of `solvers`.
pub fn execute_solvers(
    solvers: &[Arc<dyn SubsetSumSolver>],
    values: &[u64],
    bound: i64,
    opts: &SolverOptions,
) -> Vec<SolveResult> {
    if let [solver] = solvers {
        return vec![run_solver(solver, values, bound, opts)];
    }

    solvers
        .par_iter()
        .map(|solver| run_solver(solver, values, bound, opts))
        .collect()
}

/// Analyze comparison results for mismatches.
pub fn analyze_comparison_results(results: &[SolveResult]) -> Result<(), SolverError> {
    let mut valid = results.iter().filter_map(|r| r.sums().map(|s| (r, s)));

    let Some((first, first_sums)) = valid.next() else {
        return Err(SolverError::Config("no valid results".into()));
    };

    for (result, sums) in valid {
        if sums != first_sums {
            warn!(
                expected = first.solver.as_str(),
                got = result.solver.as_str(),
                "solver results differ"
            );
            return Err(SolverError::Mismatch);
        }
    }

    Ok(())
}
