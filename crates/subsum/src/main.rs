//! SubSum-rs: subset sums bounded by u, via FFT convolution.

use std::process::ExitCode;

use subsum_cli::ui::print_error;
use subsum_lib::{app, config, errors};

fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{err:#}"));
            ExitCode::from(u8::try_from(errors::exit_code(&err)).unwrap_or(1))
        }
    }
}
