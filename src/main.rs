//! Connections - CLI
//!
//! Find the four groups of four, in a TUI or a plain line-based mode, plus a
//! simulator that plays many rounds with a random player.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use connections::{
    commands::{run_simple, run_simulation},
    config::{DEFAULT_MAX_MISTAKES, GameConfig},
    content::Mode,
    output::print_simulation_result,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "connections",
    about = "Find the four groups of four hidden among sixteen words",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle to play
    #[arg(short, long, global = true, value_enum, default_value_t = Mode::Easy)]
    mode: Mode,

    /// Seed for the tile shuffle (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Wrong guesses allowed before the round is lost
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_MISTAKES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_mistakes: u32,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Play many rounds with a random player and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

/// Install the log subscriber
///
/// The TUI owns the terminal, so it only logs when a file is given.
fn init_tracing(command: &Commands, log_file: Option<&Path>) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match (command, log_file) {
        (_, Some(path)) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (Commands::Play, None) => {}
        (_, None) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(&command, cli.log_file.as_deref())?;

    let mut config = GameConfig::new(cli.mode).with_max_mistakes(cli.max_mistakes);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple(config),
        Commands::Simulate { count } => {
            run_simulate_command(&config, count);
            Ok(())
        }
    }
}

fn run_simulate_command(config: &GameConfig, count: usize) {
    let base_seed = config.seed.unwrap_or_else(rand::random);
    let result = run_simulation(config, count, base_seed);
    print_simulation_result(&result);
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use connections::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}
