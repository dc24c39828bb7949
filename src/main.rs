//! fitness-rs - Fitness Tracker TUI
//!
//! A terminal application for logging workouts, planning sessions and
//! watching simulated health stats.
//! Run without arguments to launch the TUI, or use subcommands for CLI mode.
//!
//! Available as the `fit` command.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fitness_rs::cli::commands::{Cli, Commands};
use fitness_rs::cli::{config, summary};
use fitness_rs::core::config::Config;
use fitness_rs::core::random::SeededRandom;
use fitness_rs::error::Result;
use fitness_rs::tui::App;

#[tokio::main]
async fn main() {
    // Initialize logging; stdout belongs to the TUI
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let Cli {
        seed,
        config: config_path,
        dark,
        command,
    } = Cli::parse();

    match command {
        // No subcommand - launch TUI mode
        None => run_tui(config_path.as_deref(), seed, dark).await,

        Some(Commands::Config(args)) => config::handle_config(args.command, config_path.as_deref()),

        Some(Commands::Summary { json }) => {
            summary::handle_summary(Box::new(SeededRandom::new(seed)), json)
        }
    }
}

/// Run the TUI application
async fn run_tui(config_path: Option<&Path>, seed: Option<u64>, dark: bool) -> Result<()> {
    let path = Config::resolve_path(config_path)?;
    let config = Config::load_from(&path)?;
    tracing::debug!(?seed, dark, "starting TUI");

    let mut app = App::new(config, Box::new(SeededRandom::new(seed)));
    if dark {
        app = app.with_dark_mode();
    }
    app.run().await
}
