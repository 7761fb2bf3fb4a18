//! Domain types for the game library.

use serde::{Deserialize, Serialize};

/// One game in the user's library with its achievement progress.
///
/// Constructed exactly once — from the snapshot or from a fresh fetch — and
/// never mutated afterwards. The serde field names are the on-disk snapshot
/// schema.
///
/// `achievements_total == 0` means the game has no achievement system; such
/// games carry `achievements_unlocked == 0` and are excluded from completion
/// metrics rather than counted as 0%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub app_id: u32,
    pub name: String,
    pub achievements_unlocked: u32,
    pub achievements_total: u32,
}

/// Identity of an owned game before its achievement counts are known.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedGame {
    pub app_id: u32,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_snapshot_schema_roundtrip() {
        let game = Game {
            app_id: 620,
            name: "Portal 2".into(),
            achievements_unlocked: 34,
            achievements_total: 51,
        };
        let json = serde_json::to_string(&game).unwrap();
        assert!(json.contains("\"app_id\":620"));
        assert!(json.contains("\"achievements_unlocked\":34"));
        assert!(json.contains("\"achievements_total\":51"));

        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
    }
}
