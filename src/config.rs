//! Run configuration shared by the collector and the transformer.
//!
//! A [`Config`] is built once per invocation from CLI flags, with environment
//! variables as fallbacks, and is never mutated afterwards.

use chrono::{Local, NaiveDate};
use std::path::PathBuf;

use crate::{cli::CommonArgs, Result, TeamAbbrev};

/// Base path for the public NHL web API.
pub const DEFAULT_BASE_URL: &str = "https://api-web.nhle.com/v1";

/// Overrides [`DEFAULT_BASE_URL`] when `--base-url` is not given.
pub const BASE_URL_ENV_VAR: &str = "NHL_API_BASE_URL";

/// Comma-separated team list used when no `--team` flag is given.
pub const TEAMS_ENV_VAR: &str = "NHL_STATS_TEAMS";

pub const DEFAULT_TEAMS: [&str; 2] = ["TOR", "FLA"];
pub const DEFAULT_RAW_PATH: &str = "output.json";
pub const DEFAULT_CSV_PATH: &str = "data/processed_player_stats.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// API root without a trailing slash.
    pub base_url: String,
    /// Teams to collect, in collection order, without duplicates.
    pub teams: Vec<TeamAbbrev>,
    /// Intermediate JSON document.
    pub raw_path: PathBuf,
    /// Final CSV dataset.
    pub csv_path: PathBuf,
    /// Date player ages are computed against.
    pub as_of: NaiveDate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            teams: default_teams(),
            raw_path: PathBuf::from(DEFAULT_RAW_PATH),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            as_of: Local::now().date_naive(),
        }
    }
}

impl Config {
    /// Build the run configuration from parsed CLI arguments and the process environment.
    pub fn from_args(args: &CommonArgs) -> Result<Self> {
        let base_url = resolve_base_url(
            args.base_url.clone(),
            std::env::var(BASE_URL_ENV_VAR).ok(),
        );
        let teams = resolve_teams(args.teams.clone(), std::env::var(TEAMS_ENV_VAR).ok())?;

        Ok(Self {
            base_url,
            teams,
            raw_path: args.raw.clone(),
            csv_path: args.csv.clone(),
            as_of: args.as_of.unwrap_or_else(|| Local::now().date_naive()),
        })
    }

    /// Comma-joined team list, for diagnostics.
    pub fn team_list(&self) -> String {
        self.teams
            .iter()
            .map(TeamAbbrev::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Flag wins over environment, environment wins over the default.
pub fn resolve_base_url(flag: Option<String>, env_value: Option<String>) -> String {
    flag.or(env_value)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Resolve the team list: `--team` flags, then `NHL_STATS_TEAMS`, then [`DEFAULT_TEAMS`].
///
/// Duplicates are dropped, keeping the first occurrence. An environment value
/// naming no team at all (blank, or only separators) counts as unset; a
/// malformed code in it is an error. The result is never empty.
pub fn resolve_teams(
    flag: Option<Vec<TeamAbbrev>>,
    env_value: Option<String>,
) -> Result<Vec<TeamAbbrev>> {
    let teams = match flag.filter(|teams| !teams.is_empty()) {
        Some(teams) => teams,
        None => {
            let from_env = parse_team_list(env_value.as_deref().unwrap_or_default())?;
            if from_env.is_empty() {
                default_teams()
            } else {
                from_env
            }
        }
    };

    let mut unique: Vec<TeamAbbrev> = Vec::with_capacity(teams.len());
    for team in teams {
        if !unique.contains(&team) {
            unique.push(team);
        }
    }
    Ok(unique)
}

fn parse_team_list(raw: &str) -> Result<Vec<TeamAbbrev>> {
    raw.split(',')
        .filter(|code| !code.trim().is_empty())
        .map(|code| code.parse::<TeamAbbrev>())
        .collect()
}

fn default_teams() -> Vec<TeamAbbrev> {
    DEFAULT_TEAMS
        .iter()
        .filter_map(|code| code.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NhlError;

    fn teams(codes: &[&str]) -> Vec<TeamAbbrev> {
        codes.iter().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn test_resolve_base_url_precedence() {
        assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
        assert_eq!(
            resolve_base_url(None, Some("http://env.local/v1/".to_string())),
            "http://env.local/v1"
        );
        assert_eq!(
            resolve_base_url(
                Some("http://flag.local".to_string()),
                Some("http://env.local".to_string())
            ),
            "http://flag.local"
        );
        assert_eq!(resolve_base_url(None, Some("  ".to_string())), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_teams_defaults() {
        assert_eq!(resolve_teams(None, None).unwrap(), teams(&["TOR", "FLA"]));
        assert_eq!(
            resolve_teams(None, Some("   ".to_string())).unwrap(),
            teams(&["TOR", "FLA"])
        );
    }

    #[test]
    fn test_resolve_teams_from_env() {
        let resolved = resolve_teams(None, Some("bos, tbl,,BOS".to_string())).unwrap();
        assert_eq!(resolved, teams(&["BOS", "TBL"]));

        for only_separators in [",", " , ,", ",,,"] {
            assert_eq!(
                resolve_teams(None, Some(only_separators.to_string())).unwrap(),
                teams(&["TOR", "FLA"]),
                "env value {only_separators:?}"
            );
        }
    }

    #[test]
    fn test_resolve_teams_flag_overrides_env() {
        let resolved =
            resolve_teams(Some(teams(&["DET", "DET", "OTT"])), Some("BOS".to_string())).unwrap();
        assert_eq!(resolved, teams(&["DET", "OTT"]));

        let resolved =
            resolve_teams(Some(teams(&["BUF"])), Some("not,teams".to_string())).unwrap();
        assert_eq!(resolved, teams(&["BUF"]));
    }

    #[test]
    fn test_resolve_teams_invalid_env() {
        match resolve_teams(None, Some("TOR,Florida".to_string())) {
            Err(NhlError::InvalidTeam { value }) => assert_eq!(value, "Florida"),
            other => panic!("Expected InvalidTeam, got {other:?}"),
        }
    }

    #[test]
    fn test_team_list() {
        let config = Config {
            teams: teams(&["TOR", "MTL"]),
            ..Config::default()
        };
        assert_eq!(config.team_list(), "TOR, MTL");
    }
}
