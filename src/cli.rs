use crate::search::CombinationSearch;
use crate::utils::is_achievable;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Enneadix - Find digit combinations with a fixed length and sum
#[derive(Parser, Debug)]
#[command(name = "enneadix")]
#[command(
    about = "Find strictly increasing combinations of digits 1-9 with a given length and sum"
)]
#[command(version)]
pub struct CliArgs {
    /// How many distinct digits each combination must use
    #[arg(allow_negative_numbers = true)]
    pub count: i32,

    /// Sum each combination must reach
    #[arg(allow_negative_numbers = true)]
    pub target: i32,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    let search = CombinationSearch::new();

    info!(
        "Searching for combinations of {} digits from 1..=9 summing to {}",
        args.count, args.target
    );

    if !is_achievable(args.count, args.target) {
        warn!(
            "No combination of {} distinct digits can sum to {}",
            args.count, args.target
        );
    }

    let found = search.find_combinations(args.count, args.target);

    if found.is_empty() {
        warn!("No matching combinations found");
        println!("No combinations.");
    } else {
        for combination in &found {
            println!("{}", combination);
        }
    }

    Ok(())
}
