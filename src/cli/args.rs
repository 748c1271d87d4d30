//! CLI argument definitions and parsing structures.

use super::types::team::TeamAbbrev;
use crate::config::{DEFAULT_CSV_PATH, DEFAULT_RAW_PATH};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Arguments shared by every pipeline step
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Team to collect (repeatable): `-t TOR -t FLA`. Falls back to
    /// `NHL_STATS_TEAMS`, then TOR and FLA.
    #[clap(short = 't', long = "team")]
    pub teams: Option<Vec<TeamAbbrev>>,

    /// Base URL of the NHL web API (or set `NHL_API_BASE_URL`).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Path of the intermediate JSON document.
    #[clap(long, default_value = DEFAULT_RAW_PATH)]
    pub raw: PathBuf,

    /// Path of the CSV dataset.
    #[clap(long, default_value = DEFAULT_CSV_PATH)]
    pub csv: PathBuf,

    /// Reference date for player ages, `YYYY-MM-DD` (defaults to today).
    #[clap(long)]
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Parser)]
#[clap(name = "nhl-stats", about = "NHL player statistics to CSV")]
pub struct NhlStats {
    /// Enable debug logging (`RUST_LOG` takes precedence when set).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch rosters and player stats, writing the intermediate JSON document.
    Collect {
        #[clap(flatten)]
        args: CommonArgs,
    },

    /// Flatten the intermediate JSON document into the CSV dataset.
    Transform {
        #[clap(flatten)]
        args: CommonArgs,

        /// Skip the dataset summary printed after writing the CSV.
        #[clap(long)]
        no_summary: bool,
    },

    /// Collect, then transform, with the same configuration.
    Run {
        #[clap(flatten)]
        args: CommonArgs,

        /// Skip the dataset summary printed after writing the CSV.
        #[clap(long)]
        no_summary: bool,
    },
}
