//! Steam Web API client.
//!
//! Covers the two endpoints the AGCR pipeline needs:
//!
//! - **Owned games** — `IPlayerService/GetOwnedGames/v1`, the full library
//!   listing with app metadata.
//! - **Player achievements** — `ISteamUserStats/GetPlayerAchievements/v1`,
//!   reduced to `(unlocked, total)` counts per game.
//!
//! The client performs no caching and no retries; a failed request is final.

pub mod client;
pub mod types;

// Re-export primary types.
pub use client::{Client, Error};
pub use types::OwnedGameEntry;
