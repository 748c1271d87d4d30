//! Validated player records as stored in the intermediate document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{nhl::types::PlayerLanding, PlayerId, TeamAbbrev};

/// Regular-season counting stats for one scope (current season or career).
///
/// `gamesPlayed` is required. Every other stat defaults to zero when absent,
/// since the API omits stats that are not tracked for a position (goalies
/// carry no `shots`, for instance).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLine {
    pub games_played: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub plus_minus: i32,
    #[serde(default)]
    pub pim: u32,
    #[serde(default)]
    pub shots: u32,
    #[serde(default)]
    pub shooting_pctg: f64,
    #[serde(default)]
    pub power_play_goals: u32,
    #[serde(default)]
    pub power_play_points: u32,
}

/// One player as stored in the intermediate document.
///
/// `team` is the roster the player was collected from, not whatever the
/// profile reports, so each record belongs to exactly one configured team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub player_id: PlayerId,
    pub team: TeamAbbrev,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default, rename = "heightInCentimeters")]
    pub height_cm: Option<u32>,
    #[serde(default, rename = "weightInKilograms")]
    pub weight_kg: Option<u32>,
    #[serde(default)]
    pub current_season: Option<StatLine>,
    #[serde(default)]
    pub career: Option<StatLine>,
}

impl PlayerRecord {
    /// Combine a roster team with the player's landing payload.
    pub fn from_landing(team: &TeamAbbrev, landing: PlayerLanding, as_of: NaiveDate) -> Self {
        let age = landing
            .birth_date
            .as_deref()
            .and_then(|birth| age_on(birth, as_of));
        let current_season = landing.current_season().copied();
        let career = landing.career().copied();

        Self {
            player_id: landing.player_id,
            team: team.clone(),
            first_name: landing.first_name.default,
            last_name: landing.last_name.default,
            position: landing.position,
            birth_date: landing.birth_date,
            age,
            height_cm: landing.height_in_centimeters,
            weight_kg: landing.weight_in_kilograms,
            current_season,
            career,
        }
    }

    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Age in whole years on `as_of` for a `YYYY-MM-DD` birth date.
///
/// Returns `None` for unparseable dates or births after `as_of`.
pub fn age_on(birth_date: &str, as_of: NaiveDate) -> Option<u32> {
    let born = NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d").ok()?;
    as_of.years_since(born)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_on_birthday_boundary() {
        assert_eq!(age_on("1996-09-17", date(2024, 9, 16)), Some(27));
        assert_eq!(age_on("1996-09-17", date(2024, 9, 17)), Some(28));
        assert_eq!(age_on("not-a-date", date(2024, 9, 17)), None);
        assert_eq!(age_on("2030-01-01", date(2024, 9, 17)), None);
    }

    #[test]
    fn test_stat_line_defaults_missing_counting_stats() {
        let line: StatLine = serde_json::from_value(json!({
            "gamesPlayed": 40,
            "goals": 0,
            "assists": 2,
            "pim": 4
        }))
        .unwrap();

        assert_eq!(line.games_played, 40);
        assert_eq!(line.assists, 2);
        assert_eq!(line.shots, 0);
        assert_eq!(line.shooting_pctg, 0.0);
        assert_eq!(line.plus_minus, 0);
    }

    #[test]
    fn test_stat_line_requires_games_played() {
        let err = serde_json::from_value::<StatLine>(json!({ "goals": 3 })).unwrap_err();
        assert!(err.to_string().contains("gamesPlayed"));
    }

    #[test]
    fn test_from_landing_uses_roster_team() {
        let landing: PlayerLanding = serde_json::from_value(json!({
            "playerId": 8478483,
            "firstName": { "default": "John" },
            "lastName": { "default": "Doe" },
            "currentTeamAbbrev": "FLA",
            "position": "C",
            "birthDate": "1996-09-17",
            "heightInCentimeters": 183,
            "weightInKilograms": 88,
            "featuredStats": {
                "regularSeason": {
                    "subSeason": { "gamesPlayed": 82, "goals": 30, "points": 80 }
                }
            }
        }))
        .unwrap();
        let team: TeamAbbrev = "TOR".parse().unwrap();

        let record = PlayerRecord::from_landing(&team, landing, date(2024, 10, 1));

        assert_eq!(record.player_id, PlayerId::new(8478483));
        assert_eq!(record.team, team);
        assert_eq!(record.name(), "John Doe");
        assert_eq!(record.age, Some(28));
        assert_eq!(record.height_cm, Some(183));
        assert_eq!(record.current_season.unwrap().goals, 30);
        assert!(record.career.is_none());
    }

    #[test]
    fn test_record_json_shape() {
        let record = PlayerRecord {
            player_id: PlayerId::new(1),
            team: "TOR".parse().unwrap(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            position: "D".to_string(),
            birth_date: None,
            age: None,
            height_cm: Some(190),
            weight_kg: None,
            current_season: Some(StatLine {
                games_played: 1,
                ..StatLine::default()
            }),
            career: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["playerId"], json!(1));
        assert_eq!(value["team"], json!("TOR"));
        assert_eq!(value["heightInCentimeters"], json!(190));
        assert_eq!(value["currentSeason"]["gamesPlayed"], json!(1));
        assert!(value["career"].is_null());

        let back: PlayerRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
