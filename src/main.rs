use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tally::config::Config;
use tally::error::TallyError;

/// A terminal stopwatch for tracking work sessions.
///
/// Runs a full-screen stopwatch: press space to pause or resume the active
/// session, N to archive it and start a new one, q to quit and see the
/// per-session summary.
#[derive(Parser)]
#[command(name = "tally", version, about)]
struct Cli {
    /// Tick period in milliseconds (overrides the config file)
    #[arg(long, value_name = "MILLIS")]
    tick: Option<u64>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TallyError> {
    // Silent unless RUST_LOG is set, so the TUI stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let tick = Duration::from_millis(cli.tick.unwrap_or(config.tick_ms));

    tally::tui::run(tick)
}
