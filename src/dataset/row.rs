//! Flat CSV row representation of a player.

use serde::Serialize;

use super::record::{PlayerRecord, StatLine};

/// CSV header, in column order. Field names of [`FlatPlayerRow`] match it one to one.
pub const COLUMNS: [&str; 30] = [
    "player_id",
    "name",
    "team",
    "position",
    "age",
    "height_cm",
    "weight_kg",
    "games_played",
    "goals",
    "assists",
    "points",
    "plus_minus",
    "pim",
    "shots",
    "shooting_pct",
    "powerplay_goals",
    "powerplay_points",
    "career_games",
    "career_goals",
    "career_assists",
    "career_points",
    "career_plus_minus",
    "career_pim",
    "career_shots",
    "career_shooting_pct",
    "career_powerplay_goals",
    "career_powerplay_points",
    "goals_per_game",
    "points_per_game",
    "shots_per_game",
];

/// `stat / games`, or `0.0` when no games were played.
pub fn per_game(stat: u32, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        f64::from(stat) / f64::from(games)
    }
}

/// Per-game rates derived from a current-season stat line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerGame {
    pub goals: f64,
    pub points: f64,
    pub shots: f64,
}

impl PerGame {
    pub fn from_stat_line(line: &StatLine) -> Self {
        Self {
            goals: per_game(line.goals, line.games_played),
            points: per_game(line.points, line.games_played),
            shots: per_game(line.shots, line.games_played),
        }
    }
}

/// One CSV row.
///
/// `None` is written as an empty cell. A record without a current-season
/// block leaves the season and per-game columns empty; one without a career
/// block leaves the career columns empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatPlayerRow {
    pub player_id: u64,
    pub name: String,
    pub team: String,
    pub position: String,
    pub age: Option<u32>,
    pub height_cm: Option<u32>,
    pub weight_kg: Option<u32>,

    pub games_played: Option<u32>,
    pub goals: Option<u32>,
    pub assists: Option<u32>,
    pub points: Option<u32>,
    pub plus_minus: Option<i32>,
    pub pim: Option<u32>,
    pub shots: Option<u32>,
    pub shooting_pct: Option<f64>,
    pub powerplay_goals: Option<u32>,
    pub powerplay_points: Option<u32>,

    pub career_games: Option<u32>,
    pub career_goals: Option<u32>,
    pub career_assists: Option<u32>,
    pub career_points: Option<u32>,
    pub career_plus_minus: Option<i32>,
    pub career_pim: Option<u32>,
    pub career_shots: Option<u32>,
    pub career_shooting_pct: Option<f64>,
    pub career_powerplay_goals: Option<u32>,
    pub career_powerplay_points: Option<u32>,

    pub goals_per_game: Option<f64>,
    pub points_per_game: Option<f64>,
    pub shots_per_game: Option<f64>,
}

impl FlatPlayerRow {
    pub fn from_record(record: &PlayerRecord) -> Self {
        let season = record.current_season.as_ref();
        let career = record.career.as_ref();
        let rates = season.map(PerGame::from_stat_line);

        Self {
            player_id: record.player_id.as_u64(),
            name: record.name(),
            team: record.team.to_string(),
            position: record.position.clone(),
            age: record.age,
            height_cm: record.height_cm,
            weight_kg: record.weight_kg,

            games_played: season.map(|s| s.games_played),
            goals: season.map(|s| s.goals),
            assists: season.map(|s| s.assists),
            points: season.map(|s| s.points),
            plus_minus: season.map(|s| s.plus_minus),
            pim: season.map(|s| s.pim),
            shots: season.map(|s| s.shots),
            shooting_pct: season.map(|s| s.shooting_pctg),
            powerplay_goals: season.map(|s| s.power_play_goals),
            powerplay_points: season.map(|s| s.power_play_points),

            career_games: career.map(|s| s.games_played),
            career_goals: career.map(|s| s.goals),
            career_assists: career.map(|s| s.assists),
            career_points: career.map(|s| s.points),
            career_plus_minus: career.map(|s| s.plus_minus),
            career_pim: career.map(|s| s.pim),
            career_shots: career.map(|s| s.shots),
            career_shooting_pct: career.map(|s| s.shooting_pctg),
            career_powerplay_goals: career.map(|s| s.power_play_goals),
            career_powerplay_points: career.map(|s| s.power_play_points),

            goals_per_game: rates.map(|r| r.goals),
            points_per_game: rates.map(|r| r.points),
            shots_per_game: rates.map(|r| r.shots),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;

    fn line(games: u32, goals: u32, points: u32, shots: u32) -> StatLine {
        StatLine {
            games_played: games,
            goals,
            points,
            shots,
            ..StatLine::default()
        }
    }

    fn record(season: Option<StatLine>, career: Option<StatLine>) -> PlayerRecord {
        PlayerRecord {
            player_id: PlayerId::new(123),
            team: "TOR".parse().unwrap(),
            first_name: "X".to_string(),
            last_name: String::new(),
            position: "C".to_string(),
            birth_date: None,
            age: Some(25),
            height_cm: None,
            weight_kg: Some(90),
            current_season: season,
            career,
        }
    }

    #[test]
    fn test_per_game_division() {
        for (stat, games) in [(5, 10), (30, 82), (1, 3), (0, 7), (250, 300)] {
            let expected = stat as f64 / games as f64;
            assert!((per_game(stat, games) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_per_game_zero_games_is_zero() {
        assert_eq!(per_game(0, 0), 0.0);
        assert_eq!(per_game(12, 0), 0.0);

        let rates = PerGame::from_stat_line(&line(0, 3, 4, 20));
        assert_eq!(
            rates,
            PerGame {
                goals: 0.0,
                points: 0.0,
                shots: 0.0
            }
        );
    }

    #[test]
    fn test_single_player_rates() {
        let row = FlatPlayerRow::from_record(&record(Some(line(10, 5, 8, 30)), None));

        assert_eq!(row.player_id, 123);
        assert_eq!(row.name, "X");
        assert_eq!(row.team, "TOR");
        assert_eq!(row.goals_per_game, Some(0.5));
        assert_eq!(row.points_per_game, Some(0.8));
        assert_eq!(row.shots_per_game, Some(3.0));
    }

    #[test]
    fn test_missing_career_leaves_career_columns_empty() {
        let row = FlatPlayerRow::from_record(&record(Some(line(10, 5, 8, 30)), None));

        assert_eq!(row.games_played, Some(10));
        assert!(row.career_games.is_none());
        assert!(row.career_goals.is_none());
        assert!(row.career_shooting_pct.is_none());
        assert!(row.career_powerplay_points.is_none());
    }

    #[test]
    fn test_missing_season_leaves_season_and_rate_columns_empty() {
        let row = FlatPlayerRow::from_record(&record(None, Some(line(300, 100, 250, 800))));

        assert!(row.games_played.is_none());
        assert!(row.shots.is_none());
        assert!(row.goals_per_game.is_none());
        assert_eq!(row.career_games, Some(300));
        assert_eq!(row.career_points, Some(250));
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let rec = record(Some(line(82, 30, 80, 200)), Some(line(300, 100, 250, 800)));
        assert_eq!(FlatPlayerRow::from_record(&rec), FlatPlayerRow::from_record(&rec));
    }

    #[test]
    fn test_field_names_match_columns() {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer
            .serialize(FlatPlayerRow::from_record(&record(None, None)))
            .unwrap();
        let data = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let header = data.lines().next().unwrap();
        assert_eq!(header, COLUMNS.join(","));
    }
}
