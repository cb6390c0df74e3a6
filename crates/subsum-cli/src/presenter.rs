//! CLI result presenter.

use std::collections::BTreeMap;

use subsum_core::bucketed::bucket_count;
use subsum_orchestration::interfaces::{ResultPresenter, SolveResult};

use crate::output::{format_duration, format_number, format_sums, format_witnesses};
use crate::ui::{header, print_error, status_tag};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Present the minimum-cardinality witness of every reachable sum.
    pub fn present_witnesses(&self, witnesses: &BTreeMap<u64, u64>) {
        if !self.quiet {
            println!("Witnesses (sum:cardinality):");
        }
        println!("{}", format_witnesses(witnesses));
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &SolveResult, values: &[u64], bound: i64, details: bool) {
        let sums = match &result.outcome {
            Ok(sums) => sums,
            Err(e) => {
                self.present_error(&format!("{}: {e}", result.solver));
                return;
            }
        };

        if self.quiet {
            println!("{}", format_sums(sums, true));
            return;
        }

        println!("Solver: {}", result.solver);
        println!("Values: {}", format_number(values.len() as u64));
        println!("Bound: {bound}");
        println!("Duration: {}", format_duration(result.duration));

        if details {
            println!("Buckets: {}", bucket_count(values.len()));
            if let Some(max) = sums.max() {
                println!("Largest sum: {}", format_number(max));
            }
        }

        println!("Reachable: {}", format_number(sums.len() as u64));
        println!("Sums: {}", format_sums(sums, self.verbose));
    }

    fn present_comparison(&self, results: &[SolveResult]) {
        if self.quiet {
            return;
        }

        println!("\n{}", header("Comparison"));
        for result in results {
            println!(
                "  {:<20} {:>10} {}",
                result.solver,
                format_duration(result.duration),
                status_tag(result.outcome.is_ok()),
            );
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
