//! `aql`: render or submit AQL queries from the command line.
//!
//! Builder warnings (rejected `--sort` objects and the like) are logged to
//! stderr; set `RUST_LOG=aql=debug` to also see request tracing.

mod cli;

use aql::prelude::*;
use clap::Parser;
use cli::{Cli, CliError, Command};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render(args) => {
            println!("{}", args.build());
        }

        Command::Submit { query, target } => {
            let config = target.resolve()?;
            tracing::debug!(url = %config.url, method = %config.method, "resolved AQL target");
            let client = AqlClient::new(config)?;
            let query = query.build();

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(CliError::Runtime)?;
            let value = runtime.block_on(client.submit(&query))?;

            match value {
                Value::String(text) => println!("{text}"),
                other => println!("{}", serde_json::to_string_pretty(&other)?),
            }
        }
    }

    Ok(())
}
