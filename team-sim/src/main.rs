//! Suggests teams for a game from a local data directory.
//!
//! Run with: `team-sim --data-dir data suggest --game Red --team Charizard`

mod commands;

use std::path::PathBuf;

use anyhow::{
    Context,
    Result,
};
use clap::Parser;
use commands::{
    Baseline,
    Browse,
    Suggest,
};
use teambuilder_data::LocalDataStore;

/// Team suggestions for a game-specific roster
#[derive(Parser)]
#[command(name = "team-sim")]
#[command(about = "Suggests teams for a game-specific roster", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory containing the reference data
    #[arg(long, env = "DATA_DIR")]
    data_dir: PathBuf,

    /// Log every pick and data load
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Fill the empty slots of a team
    Suggest(Suggest),

    /// Show the average base stats of a game's endpoint creatures
    Baseline(Baseline),

    /// List the creatures that may be picked for a team
    Browse(Browse),
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing_core::Level::DEBUG
    } else {
        tracing_core::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let data = LocalDataStore::new(&cli.data_dir).context(format!(
        "failed to load data from {}",
        cli.data_dir.display()
    ))?;

    match cli.command {
        Command::Suggest(cmd) => cmd.execute(&data),
        Command::Baseline(cmd) => cmd.execute(&data),
        Command::Browse(cmd) => cmd.execute(&data),
    }
}
