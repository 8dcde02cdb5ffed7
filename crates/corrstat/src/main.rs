//! corrstat — correlate country indicators and fit regression lines.

use corrstat_cli::ui::print_error;
use corrstat_core::constants::exit_codes;
use corrstat_lib::{app, config, errors, version};

fn main() {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit with the configuration code instead of clap's default
    let config = match config::AppConfig::try_parse_args() {
        Ok(config) => config,
        Err(e) => {
            let code = if e.use_stderr() {
                exit_codes::ERROR_CONFIG
            } else {
                exit_codes::SUCCESS
            };
            if let Err(io_err) = e.print() {
                tracing::debug!(error = %io_err, "could not write usage message");
            }
            std::process::exit(code);
        }
    };
    tracing::debug!(version = %version::full_version(), "starting");

    if let Err(err) = app::run(&config) {
        print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
