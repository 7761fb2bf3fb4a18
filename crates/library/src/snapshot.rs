//! On-disk game snapshot.
//!
//! The full collection is cached as a JSON file so repeated runs avoid
//! re-walking the library over the Steam Web API.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::Game;

/// Errors from snapshot I/O.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Persistent store for the fetched game collection.
///
/// [`load`](Snapshot::load) distinguishes an absent snapshot (`None`) from a
/// present snapshot of an empty library (`Some(vec![])`).
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    /// Creates a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the cached collection, or `None` when no snapshot exists.
    pub fn load(&self) -> Result<Option<Vec<Game>>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&self.path)?;
        let games: Vec<Game> = serde_json::from_str(&data)?;
        debug!("loaded {} game(s) from {:?}", games.len(), self.path);
        Ok(Some(games))
    }

    /// Writes the full collection, replacing any prior snapshot.
    ///
    /// The write goes to a sibling temporary file and is renamed over the
    /// target, so a concurrent reader never observes a partial snapshot.
    pub fn save(&self, games: &[Game]) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(games)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!("persisted {} game(s) to {:?}", games.len(), self.path);
        Ok(())
    }
}
