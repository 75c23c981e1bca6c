//! Command-line argument definitions for the Rollcall CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The `rank` and `meet` subcommands drive the two engines;
//! the global options select the configuration file and logging verbosity.

use clap::{Parser, Subcommand, ValueEnum};

use rollcall::availability::YearMonth;

use crate::input::ToggleArg;

/// Command-line arguments for the Rollcall tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a random ranking game
    Rank(RankArgs),
    /// Find the days most users can meet
    Meet(MeetArgs),
}

#[derive(clap::Args, Debug)]
pub struct RankArgs {
    /// Number of participants (2 to 30)
    #[arg(short = 'n', long, required_unless_present = "names")]
    pub count: Option<usize>,

    /// Comma-separated participant names
    #[arg(long, value_delimiter = ',')]
    pub names: Option<Vec<String>>,

    /// Seed for a reproducible board and rank order
    #[arg(long)]
    pub seed: Option<u64>,

    /// File of picks, one per line; read from stdin when omitted
    #[arg(short, long)]
    pub picks: Option<String>,

    /// Write the board as SVG
    #[arg(long)]
    pub board: Option<String>,

    /// Write the results table as SVG once every rank is assigned
    #[arg(long)]
    pub results: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(clap::Args, Debug)]
pub struct MeetArgs {
    /// Month to show, as YYYY-MM
    #[arg(short, long)]
    pub month: YearMonth,

    /// File of events, one `YYYY-MM-DD user [user ...]` per line
    #[arg(short, long)]
    pub events: Option<String>,

    /// Toggle a single user on a date, as YYYY-MM-DD:USER
    #[arg(short, long = "toggle")]
    pub toggles: Vec<ToggleArg>,

    /// Write the month as SVG
    #[arg(long)]
    pub calendar: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Output format for reports on stdout
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}
