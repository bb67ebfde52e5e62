//! tinydb CLI - drives the tinydb record store from the command line
//!
//! Each invocation builds a store, registers the persisted employee,
//! department and bonus tables, runs one operation and prints the result.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::{exit_code_for, open_store};
use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_aggregate, handle_completions, handle_insert, handle_join, handle_select,
    handle_tables,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("Error: {}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Commands::Completions(args) = &cli.command {
        return handle_completions(args.shell);
    }

    let mut store = open_store(cli)?;
    match &cli.command {
        Commands::Insert(args) => handle_insert(cli, &mut store, args),
        Commands::Select(args) => handle_select(cli, &store, args),
        Commands::Join(args) => handle_join(cli, &store, args),
        Commands::Aggregate(args) => handle_aggregate(cli, &store, args),
        Commands::Tables => handle_tables(cli, &store),
        Commands::Completions(_) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("tinydb=debug,tinydb_core=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
