//! Error types for the NHL stats pipeline

use thiserror::Error;


pub type Result<T> = std::result::Result<T, NhlError>;

#[derive(Error, Debug)]
pub enum NhlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid team abbreviation: {value}")]
    InvalidTeam { value: String },

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("NHL API unreachable: no roster could be fetched for {teams}")]
    UpstreamUnavailable { teams: String },

    #[error("Malformed intermediate document: {reason}")]
    MalformedDocument { reason: String },

    #[error("Invalid record for player {player}: {reason}")]
    InvalidRecord { player: String, reason: String },
}
