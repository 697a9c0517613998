//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crypto-signal")]
#[command(author, version, about = "Market-quote monitoring and trading-signal service")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the recurring market monitor
    Monitor(MonitorArgs),
    /// Train the signal model on historical data
    Train(TrainArgs),
    /// Predict the current signal for a symbol
    Predict(PredictArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct MonitorArgs {
    /// Symbols to monitor (comma-separated)
    #[arg(short = 'S', long, value_delimiter = ',', required = true)]
    pub symbols: Vec<String>,

    /// Use the rule-based classifier instead of the trained model
    #[arg(long)]
    pub rule: bool,
}

#[derive(clap::Args)]
pub struct TrainArgs {
    /// Symbol to fetch training history for
    #[arg(short, long)]
    pub symbol: String,

    /// Days of daily history (defaults to the configured value)
    #[arg(short, long)]
    pub days: Option<u32>,
}

#[derive(clap::Args)]
pub struct PredictArgs {
    /// Symbol to classify
    #[arg(short, long)]
    pub symbol: String,

    /// Use the rule-based classifier instead of the trained model
    #[arg(long)]
    pub rule: bool,
}
