//! # subsum-orchestration
//!
//! Parallel solver execution, solver selection, and result analysis.

pub mod interfaces;
pub mod orchestrator;
pub mod solver_selection;

pub use interfaces::{ResultPresenter, SolveResult};
pub use orchestrator::{analyze_comparison_results, execute_solvers};
pub use solver_selection::get_solvers_to_run;
