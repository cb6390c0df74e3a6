//! Solver selection logic.

use std::sync::Arc;

use subsum_core::registry::SolverFactory;
use subsum_core::solver::{SolverError, SubsetSumSolver};

/// Get solvers to run based on algorithm selection.
pub fn get_solvers_to_run(
    algo: &str,
    factory: &dyn SolverFactory,
) -> Result<Vec<Arc<dyn SubsetSumSolver>>, SolverError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
