//! `respcurve` binary — a thin wrapper over the library CLI.

use std::process::ExitCode;

use clap::Parser;
use respcurve::cli::Cli;
use respcurve::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = cli
        .load_settings()
        .and_then(|settings| cli.run(&settings, &mut out));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "command failed");
            eprintln!("respcurve: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
