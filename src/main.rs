//! PadiSquare storefront CLI

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use padisquare::observability;

use crate::cli::Cli;

mod cli;

/// Storefront CLI entry point
pub fn main() -> ExitCode {
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(err) = observability::init_subscriber(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("Logging error: {err}");
        }

        return ExitCode::FAILURE;
    }

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");

            #[expect(clippy::print_stderr, reason = "user-facing error report")]
            {
                eprintln!("error: {err}");
            }

            ExitCode::FAILURE
        }
    }
}
