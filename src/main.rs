//! itemlink binary entry point.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use itemlink::cli::{self, Cli};
use itemlink::ui::output::{self, Verbosity};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(Verbosity::from_flags(cli.quiet, cli.debug));

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so stdout stays clean for `--format json`.
fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
