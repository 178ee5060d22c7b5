//! `slot-finder` CLI — find bookable slots across a photographer roster.
//!
//! ## Usage
//!
//! ```sh
//! # 90-minute slots against the built-in sample roster
//! slot-finder
//!
//! # Requested duration from a flag or the environment
//! slot-finder slots --duration 45
//! BOOKING_DURATION_MINUTES=120 slot-finder slots
//!
//! # Use a roster file and prefer the earliest-starting free interval
//! slot-finder --roster studio.json slots --policy earliest -o slots.json
//!
//! # Inspect the derived free intervals per photographer
//! slot-finder --roster studio.json free
//!
//! # Diagnostics go to stderr
//! RUST_LOG=slot_engine=debug slot-finder
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slot_engine::{BookingRequest, Roster, SelectionPolicy};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// The roster shipped with the tool, used when `--roster` is not given.
const SAMPLE_ROSTER: &str = include_str!("../data/sample_roster.json");

#[derive(Parser)]
#[command(
    name = "slot-finder",
    version,
    about = "Find the first bookable slot per photographer"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Roster JSON file (uses the built-in sample roster if omitted)
    #[arg(long, global = true)]
    roster: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Requested booking length in whole minutes
    #[arg(
        long,
        env = "BOOKING_DURATION_MINUTES",
        default_value = "90",
        global = true
    )]
    duration: String,

    /// Which free interval to use: "emission" (first derived) or "earliest"
    #[arg(long, default_value_t = SelectionPolicy::EmissionOrder, global = true)]
    policy: SelectionPolicy,
}

#[derive(Subcommand)]
enum Commands {
    /// Find one slot of the requested length per photographer (default)
    Slots,
    /// Print the free intervals derived for each photographer
    Free,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Slots);
    let roster = load_roster(cli.roster.as_deref())?;

    let json = match command {
        Commands::Slots => {
            let request = BookingRequest::parse(&cli.duration)
                .context("Failed to read the requested duration")?
                .with_policy(cli.policy);
            let slots = slot_engine::resolve_available_slots(&roster, &request);
            info!(matched = slots.len(), "found available slots");
            serde_json::to_string_pretty(&slots)?
        }
        Commands::Free => {
            let free = slot_engine::derive_roster_free_intervals(&roster);
            serde_json::to_string_pretty(&free)?
        }
    };

    write_output(cli.output.as_deref(), &json)
}

/// Load and validate the roster from a file, or fall back to the built-in sample.
fn load_roster(path: Option<&str>) -> Result<Roster> {
    let (source, json) = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path))?;
            (path, json)
        }
        None => ("<sample>", SAMPLE_ROSTER.to_string()),
    };

    let roster =
        Roster::from_json(&json).with_context(|| format!("Failed to parse roster: {}", source))?;
    roster
        .validate()
        .with_context(|| format!("Invalid roster: {}", source))?;

    info!(source, resources = roster.len(), "loaded roster");
    Ok(roster)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
