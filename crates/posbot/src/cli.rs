//! Command-line interface.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// EVE Online starbase monitoring Discord bot.
#[derive(Debug, Parser)]
#[command(name = "posbot", version, about)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "posbot.toml")]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Runtime environment, selects the log format
    #[arg(long, value_enum, default_value = "dev")]
    pub env: Environment,
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    /// Local development, human-readable logs
    Dev,
    /// Production, JSON logs for ingestion
    Prod,
}
