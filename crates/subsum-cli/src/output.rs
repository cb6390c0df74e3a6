//! CLI output formatting.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use subsum_core::sumset::SubsetSums;
use subsum_orchestration::interfaces::SolveResult;

/// Sums shown at each end of a truncated listing.
const PREVIEW_LEN: usize = 10;

/// Format sums space-separated, eliding the middle of long sets unless verbose.
#[must_use]
pub fn format_sums(sums: &SubsetSums, verbose: bool) -> String {
    let all: Vec<String> = sums.iter().map(|s| s.to_string()).collect();
    if !verbose && all.len() > 2 * PREVIEW_LEN {
        format!(
            "{} ... {} ({} sums)",
            all[..PREVIEW_LEN].join(" "),
            all[all.len() - PREVIEW_LEN..].join(" "),
            all.len()
        )
    } else {
        all.join(" ")
    }
}

/// Format `sum:cardinality` witnesses, one pair per sum.
#[must_use]
pub fn format_witnesses(witnesses: &BTreeMap<u64, u64>) -> String {
    witnesses
        .iter()
        .map(|(sum, card)| format!("{sum}:{card}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// One solver's entry in the JSON report.
#[derive(Debug, Serialize)]
pub struct JsonSolverEntry<'a> {
    pub solver: &'a str,
    pub duration_us: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sums: Option<&'a SubsetSums>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Machine-readable report of a run.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub values: &'a [u64],
    pub bound: i64,
    pub results: Vec<JsonSolverEntry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witnesses: Option<&'a BTreeMap<u64, u64>>,
}

impl<'a> JsonReport<'a> {
    #[must_use]
    pub fn new(values: &'a [u64], bound: i64, results: &'a [SolveResult]) -> Self {
        let results = results
            .iter()
            .map(|r| JsonSolverEntry {
                solver: &r.solver,
                duration_us: r.duration.as_micros(),
                sums: r.outcome.as_ref().ok(),
                error: r.outcome.as_ref().err().map(ToString::to_string),
            })
            .collect();
        Self {
            values,
            bound,
            results,
            witnesses: None,
        }
    }

    /// Attach per-sum minimum cardinalities.
    #[must_use]
    pub fn with_witnesses(mut self, witnesses: &'a BTreeMap<u64, u64>) -> Self {
        self.witnesses = Some(witnesses);
        self
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write sums to a file, one per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, sums: &SubsetSums) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    for s in sums.iter() {
        writeln!(file, "{s}")?;
    }
    file.flush()
}
