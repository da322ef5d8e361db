//! Gantry - deploy container groups from the command line.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gantry::cli::output;
use gantry::cli::{execute, Cli};
use gantry::error::GantryError;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GANTRY_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gantry=debug")
        } else {
            EnvFilter::new("gantry=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            GantryError::Config(_) => Some("set it in .gantry.toml or pass --subscription"),
            GantryError::Usage(_) => Some("run: gantry create --help"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
