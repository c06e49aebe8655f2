//! Main entry point for the scorebook rating CLI
//!
//! Loads the event list, determines which events still lack a rating, and
//! runs the interactive collection session over them.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use scorebook::config::AppConfig;
use scorebook::rating::{filter_unrated, FileRatingStore, RatingStore};
use scorebook::session::{ConsolePrompt, RatingCollector};
use scorebook::types::Event;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Scorebook - collect and persist quality ratings for events
#[derive(Parser)]
#[command(
    name = "scorebook",
    version,
    about = "Collect and persist operator quality ratings for a list of events",
    long_about = "Scorebook keeps one JSON rating record per event in a ratings directory, \
                 computes which events are still unrated, and walks the operator through \
                 an interactive scoring session for the missing ones."
)]
struct Args {
    /// Events file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to the events list (JSON array of {id, name})"
    )]
    events: Option<PathBuf>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Ratings directory override
    #[arg(long, value_name = "DIR", help = "Override the ratings directory")]
    ratings_dir: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// List unrated events and exit without starting a session
    #[arg(long, help = "Print the unrated events and exit")]
    list_unrated: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without starting a session")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if let Some(ratings_dir) = &args.ratings_dir {
        config.storage.ratings_dir = ratings_dir.clone();
    }

    Ok(config)
}

/// Read the externally supplied event list from a JSON file
fn load_events(path: &PathBuf) -> Result<Vec<Event>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read events file {}", path.display()))?;
    let events: Vec<Event> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse events file {}", path.display()))?;
    Ok(events)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        info!("Ratings directory: {}", config.storage.ratings_dir.display());
        return Ok(());
    }

    let events_path = args
        .events
        .ok_or_else(|| anyhow!("an events file is required (--events <FILE>)"))?;
    let events = load_events(&events_path)?;
    info!("Loaded {} event(s) from {}", events.len(), events_path.display());

    let store = Arc::new(FileRatingStore::new(config.storage.ratings_dir.clone()));
    let ratings = store.load_all()?;
    let unrated = filter_unrated(&events, &ratings);
    info!(
        "{} rating(s) on disk, {} event(s) unrated",
        ratings.len(),
        unrated.len()
    );

    if args.list_unrated {
        for event in &unrated {
            println!("{}", event);
        }
        return Ok(());
    }

    if unrated.is_empty() {
        println!("All {} events already rated.", events.len());
        return Ok(());
    }

    let prompt = Box::new(ConsolePrompt::new()?);
    let mut collector = RatingCollector::new(store, prompt);
    let outcome = collector.run(&unrated)?;

    info!(
        "Session finished ({:?}): {} rating(s) saved, {} event(s) still unrated",
        outcome.end,
        outcome.ratings_saved,
        unrated.len() - outcome.ratings_saved
    );
    Ok(())
}
