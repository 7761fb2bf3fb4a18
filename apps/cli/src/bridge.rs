//! Bridge between the Steam Web API client and the library's
//! [`AchievementSource`] seam.

use std::future::Future;
use std::pin::Pin;

use agcr_library::{AchievementSource, LibraryError, OwnedGame};

/// Implements [`AchievementSource`] on top of [`agcr_steam::Client`].
pub struct SteamSource {
    client: agcr_steam::Client,
}

impl SteamSource {
    /// Creates a source over a constructed client.
    pub fn new(client: agcr_steam::Client) -> Self {
        Self { client }
    }
}

impl AchievementSource for SteamSource {
    fn owned_games(
        &self,
        steam_id: u64,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<OwnedGame>, LibraryError>> + Send + '_>> {
        Box::pin(async move {
            let listing = self.client.owned_games(steam_id).await.map_err(map_err)?;
            Ok(listing
                .into_iter()
                .map(|entry| OwnedGame {
                    app_id: entry.app_id,
                    name: entry.name,
                })
                .collect())
        })
    }

    fn achievement_counts(
        &self,
        steam_id: u64,
        app_id: u32,
    ) -> Pin<Box<dyn Future<Output = Result<(u32, u32), LibraryError>> + Send + '_>> {
        Box::pin(async move {
            self.client
                .player_achievement_counts(steam_id, app_id)
                .await
                .map_err(map_err)
        })
    }
}

/// Maps transport errors into the library's error taxonomy.
fn map_err(err: agcr_steam::Error) -> LibraryError {
    match err {
        agcr_steam::Error::Unauthorized => LibraryError::Unauthorized,
        agcr_steam::Error::Api { status, body } => LibraryError::Api { status, body },
        other => LibraryError::Http(other.to_string()),
    }
}
