//! stockroom - inventory tracker entry point.

use std::process::ExitCode;

use clap::Parser;
use stockroom_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    stockroom_observability::init(&cli.log_level);

    let stdout = std::io::stdout();
    match stockroom_cli::run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}
