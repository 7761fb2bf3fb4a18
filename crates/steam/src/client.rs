//! Steam Web API client.
//!
//! Async HTTP client using `reqwest`. The API key travels as the `key`
//! query parameter on every request.

use reqwest::StatusCode;
use tracing::debug;

use crate::types::{OwnedGameEntry, OwnedGamesEnvelope, PlayerStatsEnvelope};

const DEFAULT_BASE_URL: &str = "https://api.steampowered.com";

/// Error payload the achievements endpoint returns for games without an
/// achievement system.
const NO_STATS_ERROR: &str = "Requested app has no stats";

/// Errors from the Steam Web API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Steam API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid or unauthorized Steam Web API key")]
    Unauthorized,
}

/// Steam Web API client.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    /// Creates a new client with the given Web API key.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Sets a custom base URL (for testing).
    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Performs an authenticated GET request, returning status and body.
    ///
    /// Non-success statuses are not mapped to errors here: the achievements
    /// endpoint reports "no stats" through an error status whose body the
    /// caller must inspect.
    async fn get(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<(StatusCode, String), Error> {
        let url = format!("{}{}", self.base_url, endpoint);
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("key".to_string(), self.api_key.clone()),
                ("format".to_string(), "json".to_string()),
            ])
            .query(params)
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok((status, body))
    }

    /// Lists all games in the user's library, with app metadata.
    ///
    /// Free and unvetted apps are excluded, matching the listing the AGCR
    /// metrics are defined over.
    pub async fn owned_games(&self, steam_id: u64) -> Result<Vec<OwnedGameEntry>, Error> {
        let params = [
            ("steamid".to_string(), steam_id.to_string()),
            ("include_appinfo".to_string(), "true".to_string()),
            ("include_extended_appinfo".to_string(), "false".to_string()),
            ("include_free_sub".to_string(), "false".to_string()),
            ("include_played_free_games".to_string(), "false".to_string()),
            ("skip_unvetted_apps".to_string(), "true".to_string()),
            ("language".to_string(), "en-US".to_string()),
        ];
        let (status, body) = self.get("/IPlayerService/GetOwnedGames/v1/", &params).await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Unauthorized);
        }
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: OwnedGamesEnvelope = serde_json::from_str(&body)?;
        debug!(count = envelope.response.games.len(), "fetched owned games");
        Ok(envelope.response.games)
    }

    /// Returns `(unlocked, total)` achievement counts for one game.
    ///
    /// A game without an achievement system is reported by the API as an
    /// error payload; that case maps to `(0, 0)` instead of failing.
    pub async fn player_achievement_counts(
        &self,
        steam_id: u64,
        app_id: u32,
    ) -> Result<(u32, u32), Error> {
        let params = [
            ("steamid".to_string(), steam_id.to_string()),
            ("appid".to_string(), app_id.to_string()),
            ("l".to_string(), "en-US".to_string()),
        ];
        let (status, body) = self
            .get("/ISteamUserStats/GetPlayerAchievements/v1/", &params)
            .await?;

        if !status.is_success() {
            if is_no_stats_payload(&body) {
                debug!(app_id, "app has no achievement stats");
                return Ok((0, 0));
            }
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(Error::Unauthorized);
            }
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: PlayerStatsEnvelope = serde_json::from_str(&body)?;
        let Some(achievements) = envelope.playerstats.achievements else {
            return Ok((0, 0));
        };
        let unlocked = achievements.iter().filter(|a| a.achieved != 0).count();
        Ok((unlocked as u32, achievements.len() as u32))
    }
}

/// Checks whether an error body is the "no achievement system" payload.
fn is_no_stats_payload(body: &str) -> bool {
    serde_json::from_str::<PlayerStatsEnvelope>(body)
        .map(|env| env.playerstats.error.as_deref() == Some(NO_STATS_ERROR))
        .unwrap_or(false)
}
