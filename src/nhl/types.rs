//! Payloads returned by the NHL web API.
//!
//! Only the fields the pipeline consumes are modelled; everything else in
//! the responses is ignored by serde.

use serde::Deserialize;

use crate::{dataset::StatLine, PlayerId, TeamAbbrev};


/// Localized text; the API keys translations by locale with `default` always present.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedName {
    pub default: String,
}

/// Response of `roster/{team}/current`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterResponse {
    #[serde(default)]
    pub forwards: Vec<RosterEntry>,
    #[serde(default)]
    pub defensemen: Vec<RosterEntry>,
    #[serde(default)]
    pub goalies: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub id: PlayerId,
}

/// A team's current roster: forwards, then defensemen, then goalies.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRoster {
    pub team: TeamAbbrev,
    pub players: Vec<PlayerId>,
}

impl TeamRoster {
    pub fn from_response(team: TeamAbbrev, response: RosterResponse) -> Self {
        let players = response
            .forwards
            .into_iter()
            .chain(response.defensemen)
            .chain(response.goalies)
            .map(|entry| entry.id)
            .collect();
        Self { team, players }
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Response of `player/{id}/landing`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLanding {
    pub player_id: PlayerId,
    pub first_name: LocalizedName,
    pub last_name: LocalizedName,
    pub position: String,
    #[serde(default)]
    pub current_team_abbrev: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub height_in_centimeters: Option<u32>,
    #[serde(default)]
    pub weight_in_kilograms: Option<u32>,
    #[serde(default)]
    pub featured_stats: Option<FeaturedStats>,
    #[serde(default)]
    pub career_totals: Option<CareerTotals>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedStats {
    #[serde(default)]
    pub regular_season: Option<FeaturedRegularSeason>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedRegularSeason {
    #[serde(default)]
    pub sub_season: Option<StatLine>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerTotals {
    #[serde(default)]
    pub regular_season: Option<StatLine>,
}

impl PlayerLanding {
    /// `featuredStats.regularSeason.subSeason`
    pub fn current_season(&self) -> Option<&StatLine> {
        self.featured_stats
            .as_ref()?
            .regular_season
            .as_ref()?
            .sub_season
            .as_ref()
    }

    /// `careerTotals.regularSeason`
    pub fn career(&self) -> Option<&StatLine> {
        self.career_totals.as_ref()?.regular_season.as_ref()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.default, self.last_name.default)
            .trim()
            .to_string()
    }
}
