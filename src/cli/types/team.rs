//! NHL club abbreviations.

use crate::error::{NhlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Clubs the pipeline knows a display name for.
pub const KNOWN_TEAMS: [(&str, &str); 8] = [
    ("TOR", "Toronto Maple Leafs"),
    ("FLA", "Florida Panthers"),
    ("BOS", "Boston Bruins"),
    ("TBL", "Tampa Bay Lightning"),
    ("MTL", "Montreal Canadiens"),
    ("OTT", "Ottawa Senators"),
    ("BUF", "Buffalo Sabres"),
    ("DET", "Detroit Red Wings"),
];

/// Three-letter NHL team code, always upper-case.
///
/// Codes missing from [`KNOWN_TEAMS`] are still accepted as long as they are
/// well formed; they simply have no display name.
///
/// ```rust
/// use nhl_stats::TeamAbbrev;
///
/// let team: TeamAbbrev = "tor".parse().unwrap();
/// assert_eq!(team.as_str(), "TOR");
/// assert_eq!(team.full_name(), Some("Toronto Maple Leafs"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamAbbrev(String);

impl TeamAbbrev {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn full_name(&self) -> Option<&'static str> {
        KNOWN_TEAMS
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for TeamAbbrev {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TeamAbbrev {
    type Err = NhlError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(NhlError::InvalidTeam {
                value: s.to_string(),
            })
        }
    }
}

impl TryFrom<String> for TeamAbbrev {
    type Error = NhlError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TeamAbbrev> for String {
    fn from(team: TeamAbbrev) -> Self {
        team.0
    }
}
