//! Solver factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::bucketed::FftSolver;
use crate::naive::DynamicProgrammingSolver;
use crate::solver::{SolverError, SubsetSumSolver};

/// Factory trait for creating solvers.
pub trait SolverFactory: Send + Sync {
    /// Get or create a solver by name.
    fn get(&self, name: &str) -> Result<Arc<dyn SubsetSumSolver>, SolverError>;

    /// List all available solver names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn SubsetSumSolver>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_solver(name: &str) -> Result<Arc<dyn SubsetSumSolver>, SolverError> {
        match name {
            "fft" => Ok(Arc::new(FftSolver::new())),
            "dp" | "naive" => Ok(Arc::new(DynamicProgrammingSolver::new())),
            _ => Err(SolverError::Config(format!("unknown solver: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn SubsetSumSolver>, SolverError> {
        if let Some(solver) = self.cache.read().get(name) {
            return Ok(Arc::clone(solver));
        }

        let solver = Self::create_solver(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&solver));
        Ok(solver)
    }

    fn available(&self) -> Vec<&str> {
        vec!["fft", "dp"]
    }
}
