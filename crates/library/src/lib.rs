//! Game library retrieval and caching.
//!
//! This crate implements the **business logic** for building a user's game
//! collection with per-game achievement counts. It is a library crate with
//! no transport dependency — the CLI provides an [`AchievementSource`]
//! implementation that bridges to the actual Steam Web API client.
//!
//! # Flow
//!
//! - **Snapshot first** — a non-empty local snapshot is returned without any
//!   remote call
//! - **Fetch** — otherwise list owned games, then fetch achievement counts
//!   for each game sequentially
//! - **Persist** — write the fresh collection back to the snapshot
//!
//! Any remote failure aborts the whole retrieval; a partial library is never
//! returned or cached as if complete.

pub mod error;
pub mod library;
pub mod snapshot;
pub mod types;

// Re-export primary types for convenience.
pub use error::LibraryError;
pub use library::{AchievementSource, LibraryManager};
pub use snapshot::{Snapshot, SnapshotError};
pub use types::{Game, OwnedGame};
