//! Application configuration from CLI flags and environment.

use clap::Parser;

use subsum_core::options::SolverOptions;

/// SubSum-rs: every subset sum up to a bound, via FFT convolution.
#[derive(Parser, Debug)]
#[command(name = "subsum", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Input values: non-negative integers, space or comma separated.
    #[arg(value_name = "VALUE", env = "SUBSUM_VALUES")]
    pub values: Vec<String>,

    /// Read additional values from a file.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<String>,

    /// Upper bound on sums (defaults to the total of all values).
    #[arg(short = 'u', long, env = "SUBSUM_BOUND", allow_negative_numbers = true)]
    pub bound: Option<i64>,

    /// Solver to use: fft, dp, or all.
    #[arg(long, default_value = "fft")]
    pub algo: String,

    /// Also report the minimum cardinality witnessing each sum.
    #[arg(long)]
    pub cardinality: bool,

    /// Input size above which recursive halves are solved in parallel.
    #[arg(long, default_value = "0")]
    pub threshold: usize,

    /// Transform length above which FFT halves run in parallel.
    #[arg(long, default_value = "0")]
    pub fft_threshold: usize,

    /// Disable residue-class bucketing.
    #[arg(long)]
    pub no_buckets: bool,

    /// Verbose output (list every sum).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the sums).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Write the reachable sums to a file, one per line.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Solver options implied by the flags.
    #[must_use]
    pub fn solver_options(&self) -> SolverOptions {
        SolverOptions {
            parallel_threshold: self.threshold,
            fft_parallel_threshold: self.fft_threshold,
            bucketing: !self.no_buckets,
        }
        .normalize()
    }

    /// The bound to solve with: the explicit one, or the total of `values`.
    #[must_use]
    pub fn effective_bound(&self, values: &[u64]) -> i64 {
        self.bound.unwrap_or_else(|| {
            let total = values.iter().fold(0u64, |acc, &v| acc.saturating_add(v));
            i64::try_from(total).unwrap_or(i64::MAX)
        })
    }
}
