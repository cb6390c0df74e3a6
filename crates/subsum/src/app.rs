//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use subsum_cli::output::{write_to_file, JsonReport};
use subsum_cli::presenter::CLIResultPresenter;
use subsum_cli::ui::print_warning;
use subsum_core::registry::DefaultFactory;
use subsum_orchestration::interfaces::{ResultPresenter, SolveResult};
use subsum_orchestration::orchestrator::{analyze_comparison_results, execute_solvers};
use subsum_orchestration::solver_selection::get_solvers_to_run;

use crate::config::AppConfig;
use crate::input::collect_values;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        subsum_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let values = collect_values(config)?;
    let bound = config.effective_bound(&values);
    let opts = config.solver_options();
    info!(version = %full_version(), n = values.len(), bound, algo = %config.algo, "solving");

    let factory = DefaultFactory::new();
    let solvers = get_solvers_to_run(&config.algo, &factory)?;
    let results = execute_solvers(&solvers, &values, bound, &opts);

    let witnesses = if config.cardinality {
        Some(subsum_core::all_subset_sums_with_cardinality(&values, bound)?.witnesses())
    } else {
        None
    };

    if config.json {
        let mut report = JsonReport::new(&values, bound, &results);
        if let Some(witnesses) = &witnesses {
            report = report.with_witnesses(witnesses);
        }
        println!("{}", report.to_json()?);
    } else {
        let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
        for result in &results {
            presenter.present_result(result, &values, bound, config.details);
        }
        if results.len() > 1 {
            presenter.present_comparison(&results);
        }
        if let Some(witnesses) = &witnesses {
            presenter.present_witnesses(witnesses);
        }
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        match results.iter().find_map(SolveResult::sums) {
            Some(sums) => {
                write_to_file(path, sums).with_context(|| format!("writing sums to {path}"))?;
            }
            None => print_warning("no solver succeeded, nothing written"),
        }
    }

    if results.len() > 1 {
        analyze_comparison_results(&results)?;
    } else if let Some(Err(e)) = results.first().map(|r| &r.outcome) {
        return Err(e.clone().into());
    }

    Ok(())
}
