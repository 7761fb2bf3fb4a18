//! AGCR command-line entry point.

mod bridge;
mod report;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use agcr_library::{LibraryManager, Snapshot};

/// Average Game Completion Rate report for a Steam library.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Cli {
    /// 64-bit Steam ID of the account to inspect.
    steam_id: u64,

    /// File holding the Steam Web API key.
    #[arg(long, default_value = ".steam-api-key")]
    keyfile: PathBuf,

    /// Skip the local snapshot entirely: never read it, never write it.
    #[arg(long)]
    no_cache: bool,

    /// Snapshot location (defaults to the platform config directory).
    #[arg(long)]
    cache_file: Option<PathBuf>,

    /// How many games to list in each ranking.
    #[arg(long, default_value_t = 10)]
    top: usize,
}

fn main() -> anyhow::Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if !cli.keyfile.is_file() {
        bail!("Steam Web API key not found at {}", cli.keyfile.display());
    }
    let api_key = std::fs::read_to_string(&cli.keyfile)
        .with_context(|| format!("failed to read {}", cli.keyfile.display()))?;

    let snapshot_path = match cli.cache_file {
        Some(ref path) => path.clone(),
        None => default_snapshot_path().context("could not determine a snapshot location")?,
    };

    let client =
        agcr_steam::Client::new(api_key.trim()).context("failed to build the Steam client")?;
    let source = bridge::SteamSource::new(client);
    let manager = LibraryManager::new(Snapshot::new(snapshot_path), !cli.no_cache);

    tracing::info!(steam_id = cli.steam_id, "connected to the Steam Web API");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let games = rt
        .block_on(manager.owned_games(&source, cli.steam_id))
        .context("failed to retrieve the game library")?;

    report::print(&games, cli.top);
    Ok(())
}

/// Returns the default snapshot path under the platform config directory.
fn default_snapshot_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("agcr").join("games.json"))
}

/// Returns the platform-specific config directory.
fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|h| PathBuf::from(h).join(".config"))
            })
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA").ok().map(PathBuf::from)
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        std::env::var("HOME")
            .ok()
            .map(|h| PathBuf::from(h).join(".config"))
    }
}
