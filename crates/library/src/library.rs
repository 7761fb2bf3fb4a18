//! Library fetch orchestration.
//!
//! [`LibraryManager`] sequences snapshot check, remote listing, per-game
//! achievement fetches, and snapshot write-back. The Steam client is
//! consumed through the [`AchievementSource`] trait so tests can substitute
//! a canned-response implementation.

use std::future::Future;
use std::pin::Pin;

use tracing::{info, warn};

use crate::error::LibraryError;
use crate::snapshot::{Snapshot, SnapshotError};
use crate::types::{Game, OwnedGame};

/// Abstract source of owned-game listings and achievement counts.
///
/// The CLI implements this on top of the Steam Web API client.
pub trait AchievementSource: Send + Sync {
    /// Lists the games the user owns.
    fn owned_games(
        &self,
        steam_id: u64,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<OwnedGame>, LibraryError>> + Send + '_>>;

    /// Returns `(unlocked, total)` achievement counts for one game.
    ///
    /// A game without an achievement system reports `(0, 0)` — that is not
    /// an error condition.
    fn achievement_counts(
        &self,
        steam_id: u64,
        app_id: u32,
    ) -> Pin<Box<dyn Future<Output = Result<(u32, u32), LibraryError>> + Send + '_>>;
}

/// Retrieves the game library, snapshot first.
pub struct LibraryManager {
    snapshot: Snapshot,
    cache_enabled: bool,
}

impl LibraryManager {
    /// Creates a manager over the given snapshot store.
    ///
    /// When `cache_enabled` is false the snapshot is never read and never
    /// written.
    pub fn new(snapshot: Snapshot, cache_enabled: bool) -> Self {
        Self {
            snapshot,
            cache_enabled,
        }
    }

    /// Returns the user's games with achievement counts.
    ///
    /// A non-empty snapshot is returned as-is without touching the remote
    /// API. Otherwise every owned game is fetched sequentially and the
    /// resulting collection is written back to the snapshot. Any remote
    /// failure aborts the whole retrieval, so a partial library is never
    /// returned or cached as if complete.
    pub async fn owned_games(
        &self,
        source: &dyn AchievementSource,
        steam_id: u64,
    ) -> Result<Vec<Game>, LibraryError> {
        if self.cache_enabled {
            match self.snapshot.load() {
                Ok(Some(games)) if !games.is_empty() => {
                    info!(count = games.len(), "loaded game library from snapshot");
                    return Ok(games);
                }
                Ok(_) => {}
                Err(SnapshotError::Corrupt(e)) => {
                    warn!(error = %e, "snapshot is malformed, refetching");
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!(steam_id, "retrieving games and achievements");
        let listing = source.owned_games(steam_id).await?;

        let mut games = Vec::with_capacity(listing.len());
        for OwnedGame { app_id, name } in listing {
            let (unlocked, total) = source.achievement_counts(steam_id, app_id).await?;
            games.push(Game {
                app_id,
                name,
                achievements_unlocked: unlocked,
                achievements_total: total,
            });
        }

        if self.cache_enabled {
            self.snapshot.save(&games)?;
        }
        Ok(games)
    }
}
