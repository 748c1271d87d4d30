//! NHL player statistics pipeline
//!
//! Fetches current rosters and per-player statistics from the public NHL web
//! API for a fixed set of teams, and flattens them into a CSV dataset with one
//! row per player, ready for statistical or machine-learning work.
//!
//! The pipeline runs in two independent steps with a file handoff:
//!
//! 1. **Collect** ([`commands::collect`]): roster and landing requests, one at
//!    a time, into an intermediate JSON document keyed by player id.
//! 2. **Transform** ([`commands::transform`]): validates each entry into a
//!    [`dataset::PlayerRecord`], flattens it to a [`dataset::FlatPlayerRow`]
//!    with per-game rates, and writes the CSV.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nhl_stats::{commands::{handle_collect, handle_transform}, Config};
//!
//! # async fn example() -> nhl_stats::Result<()> {
//! let config = Config {
//!     teams: vec!["TOR".parse()?, "FLA".parse()?],
//!     ..Config::default()
//! };
//!
//! handle_collect(&config).await?;
//! handle_transform(&config, true)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NHL_STATS_TEAMS=TOR,FLA,BOS
//! export NHL_API_BASE_URL=https://api-web.nhle.com/v1
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dataset;
pub mod error;
pub mod nhl;

// Re-export commonly used types
pub use cli::types::{PlayerId, TeamAbbrev};
pub use config::Config;
pub use error::{NhlError, Result};
