//! Error handling and exit codes.

use subsum_core::constants::exit_codes;
use subsum_core::solver::SolverError;

/// Map a solver error to its exit code.
pub fn handle_error(err: &SolverError) -> i32 {
    match err {
        SolverError::Fft(_) | SolverError::InvalidInput(_) => exit_codes::ERROR_GENERIC,
        SolverError::Config(_) => exit_codes::ERROR_CONFIG,
        SolverError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for an application error, looking through `anyhow` context.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SolverError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
