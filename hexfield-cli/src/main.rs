//! HEXFIELD CLI - Command-line interface
//!
//! Commands:
//! - zones: Print the zone table
//! - moves: Legal-move set for a unit
//! - targets: Legal-target set for a unit
//! - path: Cheapest route between two zones
//! - move / attack: Validate and apply a requested action
//! - generate: Write a random scenario

mod context;
mod generate;
mod inspect;
mod move_cmd;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use context::Context;

#[derive(Parser)]
#[command(name = "hexfield")]
#[command(about = "HEXFIELD tactical battlefield rules")]
struct Cli {
    /// Scenario JSON file (defaults to the built-in skirmish)
    #[arg(long, global = true, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Engine config JSON file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every zone with its classification
    Zones,
    /// Legal moves for the unit at a position
    Moves(inspect::SelectArgs),
    /// Legal targets for the unit at a position
    Targets(inspect::SelectArgs),
    /// Cheapest route between two zones
    Path(inspect::PathArgs),
    /// Move a unit and optionally save the scenario
    Move(move_cmd::ActionArgs),
    /// Check that an attack is legal
    Attack(move_cmd::ActionArgs),
    /// Generate a random mirrored scenario
    Generate(generate::GenerateArgs),
}

fn main() -> anyhow::Result<()> {
    let Cli { scenario, config, json, verbose, command } = Cli::parse();

    init_logging(verbose);

    let load = || Context::load(scenario.as_deref(), config.as_deref(), json);

    match command {
        Commands::Zones => inspect::run_zones(&load()?),
        Commands::Moves(args) => inspect::run_moves(&load()?, &args),
        Commands::Targets(args) => inspect::run_targets(&load()?, &args),
        Commands::Path(args) => inspect::run_path(&load()?, &args),
        Commands::Move(args) => move_cmd::run_move(&mut load()?, &args, scenario.as_deref()),
        Commands::Attack(args) => move_cmd::run_attack(&load()?, &args),
        Commands::Generate(args) => generate::run(args),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
