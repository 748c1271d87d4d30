//! Descriptive summary of a finished dataset, printed after a transform.

use std::collections::BTreeMap;
use std::fmt;

use super::row::FlatPlayerRow;

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct TopScorer {
    pub name: String,
    pub team: String,
    pub position: String,
    pub points: u32,
    pub points_per_game: f64,
}

/// Descriptive statistics for one numeric column, over its non-empty cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub column: &'static str,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnStats {
    /// `None` when there is no value to describe.
    pub fn from_values(column: &'static str, values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = (count > 1).then(|| {
            let sq: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (sq / (count - 1) as f64).sqrt()
        });

        Some(Self {
            column,
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }
}

/// Linear interpolation between closest ranks. `sorted` must be non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Numeric feature cells of a row, in column order.
fn numeric_cells(row: &FlatPlayerRow) -> [(&'static str, Option<f64>); 26] {
    let int = |v: Option<u32>| v.map(f64::from);
    let signed = |v: Option<i32>| v.map(f64::from);
    [
        ("age", int(row.age)),
        ("height_cm", int(row.height_cm)),
        ("weight_kg", int(row.weight_kg)),
        ("games_played", int(row.games_played)),
        ("goals", int(row.goals)),
        ("assists", int(row.assists)),
        ("points", int(row.points)),
        ("plus_minus", signed(row.plus_minus)),
        ("pim", int(row.pim)),
        ("shots", int(row.shots)),
        ("shooting_pct", row.shooting_pct),
        ("powerplay_goals", int(row.powerplay_goals)),
        ("powerplay_points", int(row.powerplay_points)),
        ("career_games", int(row.career_games)),
        ("career_goals", int(row.career_goals)),
        ("career_assists", int(row.career_assists)),
        ("career_points", int(row.career_points)),
        ("career_plus_minus", signed(row.career_plus_minus)),
        ("career_pim", int(row.career_pim)),
        ("career_shots", int(row.career_shots)),
        ("career_shooting_pct", row.career_shooting_pct),
        ("career_powerplay_goals", int(row.career_powerplay_goals)),
        ("career_powerplay_points", int(row.career_powerplay_points)),
        ("goals_per_game", row.goals_per_game),
        ("points_per_game", row.points_per_game),
        ("shots_per_game", row.shots_per_game),
    ]
}

fn feature_stats(rows: &[FlatPlayerRow]) -> Vec<ColumnStats> {
    let mut columns: Vec<(&'static str, Vec<f64>)> = Vec::new();
    for row in rows {
        for (i, (column, cell)) in numeric_cells(row).into_iter().enumerate() {
            if columns.len() <= i {
                columns.push((column, Vec::new()));
            }
            if let Some(value) = cell {
                columns[i].1.push(value);
            }
        }
    }

    columns
        .into_iter()
        .filter_map(|(column, values)| ColumnStats::from_values(column, &values))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub total: usize,
    /// Most common first; ties broken alphabetically.
    pub by_team: Vec<(String, usize)>,
    pub by_position: Vec<(String, usize)>,
    /// Highest current-season points first; ties keep dataset order.
    pub top_scorers: Vec<TopScorer>,
    /// One entry per numeric column with at least one value, in column order.
    pub features: Vec<ColumnStats>,
}

impl DatasetSummary {
    pub fn from_rows(rows: &[FlatPlayerRow], top_n: usize) -> Self {
        let mut scorers: Vec<TopScorer> = rows
            .iter()
            .filter_map(|row| {
                Some(TopScorer {
                    name: row.name.clone(),
                    team: row.team.clone(),
                    position: row.position.clone(),
                    points: row.points?,
                    points_per_game: row.points_per_game.unwrap_or(0.0),
                })
            })
            .collect();
        scorers.sort_by(|a, b| b.points.cmp(&a.points));
        scorers.truncate(top_n);

        Self {
            total: rows.len(),
            by_team: value_counts(rows.iter().map(|r| r.team.as_str())),
            by_position: value_counts(rows.iter().map(|r| r.position.as_str())),
            top_scorers: scorers,
            features: feature_stats(rows),
        }
    }
}

fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, n)| (value.to_string(), n))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset Summary:")?;
        writeln!(f, "{}", "-".repeat(20))?;
        writeln!(f, "Total players: {}", self.total)?;

        writeln!(f, "\nTeam distribution:")?;
        for (team, n) in &self.by_team {
            writeln!(f, "  {:<4} {}", team, n)?;
        }

        writeln!(f, "\nPosition distribution:")?;
        for (position, n) in &self.by_position {
            writeln!(f, "  {:<4} {}", position, n)?;
        }

        writeln!(f, "\nTop {} players by points:", self.top_scorers.len())?;
        writeln!(
            f,
            "  {:<24} {:<4} {:<4} {:>6} {:>8}",
            "Name", "Team", "Pos", "Points", "Pts/GP"
        )?;
        for p in &self.top_scorers {
            writeln!(
                f,
                "  {:<24} {:<4} {:<4} {:>6} {:>8.3}",
                p.name, p.team, p.position, p.points, p.points_per_game
            )?;
        }

        writeln!(f, "\nFeature statistics:")?;
        writeln!(
            f,
            "  {:<24} {:>5} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}",
            "Column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
        )?;
        for c in &self.features {
            let std = c
                .std
                .map_or_else(|| "-".to_string(), |std| format!("{std:.3}"));
            writeln!(
                f,
                "  {:<24} {:>5} {:>9.3} {:>9} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3}",
                c.column, c.count, c.mean, std, c.min, c.q25, c.median, c.q75, c.max
            )?;
        }
        Ok(())
    }
}
