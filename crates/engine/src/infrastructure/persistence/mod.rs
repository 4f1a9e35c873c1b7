//! Flat-file JSON persistence.
//!
//! Both repositories own one document each and follow the same
//! contract: `load` reads and backfills the whole document, `save`
//! rewrites it pretty-printed. No caching between requests - each
//! request re-reads, which keeps the two files the single source of
//! truth for a single table of trusted users. Concurrent writers race
//! (last save wins); a per-document lock is the extension point if
//! that ever stops being acceptable.

use std::path::Path;

use thiserror::Error;

pub mod game_state_repository;
pub mod player_repository;

pub use game_state_repository::GameStateRepository;
pub use player_repository::PlayerRepository;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Write to a sibling temp file, then rename over the target so a
/// crash mid-write never corrupts the committed document.
pub(crate) async fn write_atomic(path: &Path, bytes: Vec<u8>) -> Result<(), RepoError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("store.json");
    let tmp = path.with_file_name(format!("{file_name}.tmp"));
    tokio::fs::write(&tmp, &bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
