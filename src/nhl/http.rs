//! HTTP client for the NHL web API

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{PlayerLanding, RosterResponse, TeamRoster};
use crate::{PlayerId, Result, TeamAbbrev};


const USER_AGENT: &str = concat!("nhl-stats/", env!("CARGO_PKG_VERSION"));

/// Read-only client for the roster and player landing endpoints.
///
/// Requests are plain GETs with `Accept: application/json`; non-2xx statuses
/// and undecodable bodies both surface as [`crate::NhlError::Http`].
#[derive(Debug, Clone)]
pub struct NhlClient {
    http: Client,
    base_url: String,
}

impl NhlClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn roster_url(&self, team: &TeamAbbrev) -> String {
        format!("{}/roster/{}/current", self.base_url, team)
    }

    pub fn landing_url(&self, player_id: PlayerId) -> String {
        format!("{}/player/{}/landing", self.base_url, player_id)
    }

    /// Current roster for `team`.
    pub async fn team_roster(&self, team: &TeamAbbrev) -> Result<TeamRoster> {
        let response: RosterResponse = self.get_json(&self.roster_url(team)).await?;
        Ok(TeamRoster::from_response(team.clone(), response))
    }

    /// Profile, current-season and career stats for one player.
    pub async fn player_landing(&self, player_id: PlayerId) -> Result<PlayerLanding> {
        self.get_json(&self.landing_url(player_id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(%url, "GET");

        let res = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }
}
