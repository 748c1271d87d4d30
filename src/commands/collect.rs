//! Collection step: rosters and player stats into the intermediate document.
//!
//! Teams are walked in configured order and players in roster order, one
//! request at a time. A player whose fetch fails is logged and omitted; a
//! team whose roster fetch fails contributes nothing. The run fails, and
//! nothing is written, when no roster could be fetched or when every
//! rostered player's fetch failed.

use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    dataset::{to_document, write_document, PlayerRecord},
    nhl::NhlClient,
    NhlError, PlayerId, Result, TeamAbbrev,
};

/// Outcome of a collection run.
#[derive(Debug, Default)]
pub struct CollectReport {
    /// Successfully fetched players, in collection order.
    pub records: Vec<PlayerRecord>,
    pub teams_fetched: usize,
    pub teams_failed: Vec<TeamAbbrev>,
    pub players_failed: Vec<PlayerId>,
    /// Players already collected under an earlier team.
    pub duplicates: Vec<PlayerId>,
}

pub struct Collector {
    config: Config,
    client: NhlClient,
}

impl Collector {
    pub fn new(config: Config) -> Result<Self> {
        let client = NhlClient::new(config.base_url.clone())?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch every configured team's roster and each rostered player's stats.
    pub async fn collect(&self) -> Result<CollectReport> {
        let mut report = CollectReport::default();
        let mut seen: HashSet<PlayerId> = HashSet::new();

        for team in &self.config.teams {
            info!(%team, "Fetching roster");
            let roster = match self.client.team_roster(team).await {
                Ok(roster) => roster,
                Err(e) => {
                    warn!(%team, error = %e, "Roster fetch failed; skipping team");
                    report.teams_failed.push(team.clone());
                    continue;
                }
            };
            report.teams_fetched += 1;
            info!(%team, players = roster.players.len(), "Roster fetched");

            let mut collected = 0usize;
            for &player_id in &roster.players {
                if seen.contains(&player_id) {
                    warn!(
                        %team,
                        player = %player_id,
                        "Player already collected for another team; skipping"
                    );
                    report.duplicates.push(player_id);
                    continue;
                }

                match self.fetch_player(team, player_id).await {
                    Ok(record) => {
                        debug!(
                            %team,
                            player = %player_id,
                            name = %record.name(),
                            "Player stats fetched"
                        );
                        seen.insert(player_id);
                        report.records.push(record);
                        collected += 1;
                    }
                    Err(e) => {
                        warn!(
                            %team,
                            player = %player_id,
                            error = %e,
                            "Player fetch failed; omitting player"
                        );
                        report.players_failed.push(player_id);
                    }
                }
            }

            info!(%team, collected, "Team processed");
        }

        let no_rosters = !self.config.teams.is_empty() && report.teams_fetched == 0;
        let no_players = report.records.is_empty() && !report.players_failed.is_empty();
        if no_rosters || no_players {
            return Err(NhlError::UpstreamUnavailable {
                teams: self.config.team_list(),
            });
        }

        Ok(report)
    }

    /// Collect, then write the intermediate document to `config.raw_path`.
    pub async fn run(&self) -> Result<CollectReport> {
        let report = self.collect().await?;

        let doc = to_document(&report.records)?;
        write_document(&self.config.raw_path, &doc)?;

        info!(
            path = %self.config.raw_path.display(),
            players = report.records.len(),
            failed = report.players_failed.len(),
            "Intermediate document written"
        );
        Ok(report)
    }

    async fn fetch_player(&self, team: &TeamAbbrev, player_id: PlayerId) -> Result<PlayerRecord> {
        let landing = self.client.player_landing(player_id).await?;
        if landing.player_id != player_id {
            return Err(NhlError::InvalidRecord {
                player: player_id.to_string(),
                reason: format!("landing returned playerId {}", landing.player_id),
            });
        }
        Ok(PlayerRecord::from_landing(team, landing, self.config.as_of))
    }
}

/// Handle the collect command
pub async fn handle_collect(config: &Config) -> Result<CollectReport> {
    info!(teams = %config.team_list(), base_url = %config.base_url, "Starting collection");

    let report = Collector::new(config.clone())?.run().await?;

    if !report.teams_failed.is_empty() || !report.players_failed.is_empty() {
        warn!(
            teams_failed = report.teams_failed.len(),
            players_failed = report.players_failed.len(),
            "Collection finished with omissions"
        );
    }
    Ok(report)
}
