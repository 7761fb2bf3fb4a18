//! Wire types for the Steam Web API.

use serde::Deserialize;

/// One game from the `GetOwnedGames` listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwnedGameEntry {
    #[serde(rename = "appid")]
    pub app_id: u32,
    #[serde(default)]
    pub name: String,
}

/// Envelope around the `GetOwnedGames` response body.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct OwnedGamesEnvelope {
    #[serde(default)]
    pub response: OwnedGamesResponse,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OwnedGamesResponse {
    #[serde(default)]
    #[allow(dead_code)]
    pub game_count: u32,
    /// Absent entirely for accounts with a private game list.
    #[serde(default)]
    pub games: Vec<OwnedGameEntry>,
}

/// Envelope around the `GetPlayerAchievements` response body.
///
/// Also the shape of the error payload the endpoint returns for games
/// without an achievement system.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlayerStatsEnvelope {
    #[serde(default)]
    pub playerstats: PlayerStats,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlayerStats {
    #[serde(default)]
    #[allow(dead_code)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub achievements: Option<Vec<PlayerAchievement>>,
}

/// One achievement row. `achieved` is the API's 0/1 integer flag.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PlayerAchievement {
    #[serde(default)]
    pub achieved: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_games_parse() {
        let json = r#"{"response":{"game_count":2,"games":[
            {"appid":400,"name":"Portal","playtime_forever":610},
            {"appid":620,"name":"Portal 2","playtime_forever":1201}
        ]}}"#;
        let envelope: OwnedGamesEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.response.games.len(), 2);
        assert_eq!(envelope.response.games[0].app_id, 400);
        assert_eq!(envelope.response.games[0].name, "Portal");
        assert_eq!(envelope.response.games[1].app_id, 620);
    }

    #[test]
    fn owned_games_private_profile_has_no_games_field() {
        let json = r#"{"response":{}}"#;
        let envelope: OwnedGamesEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.response.games.is_empty());
    }

    #[test]
    fn player_achievements_parse() {
        let json = r#"{"playerstats":{"steamID":"765611","gameName":"Portal","achievements":[
            {"apiname":"PORTAL_GET_PORTALGUNS","achieved":1,"unlocktime":1356044198},
            {"apiname":"PORTAL_BEAT_GAME","achieved":0,"unlocktime":0}
        ],"success":true}}"#;
        let envelope: PlayerStatsEnvelope = serde_json::from_str(json).unwrap();
        let achievements = envelope.playerstats.achievements.unwrap();
        assert_eq!(achievements.len(), 2);
        assert_eq!(achievements[0].achieved, 1);
        assert_eq!(achievements[1].achieved, 0);
    }

    #[test]
    fn player_achievements_no_stats_error_payload() {
        let json = r#"{"playerstats":{"error":"Requested app has no stats","success":false}}"#;
        let envelope: PlayerStatsEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.playerstats.error.as_deref(),
            Some("Requested app has no stats")
        );
        assert!(envelope.playerstats.achievements.is_none());
    }

    #[test]
    fn player_achievements_missing_achievements_field() {
        let json = r#"{"playerstats":{"steamID":"765611","gameName":"SomeGame","success":true}}"#;
        let envelope: PlayerStatsEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.playerstats.achievements.is_none());
    }
}
