//! JSON-file storage for the player list.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mesa_domain::{Player, PlayerId};

use super::{write_atomic, RepoError};

/// Whole-document store for `players.json` (a JSON array of sheets).
pub struct PlayerRepository {
    path: PathBuf,
}

impl PlayerRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("players.json"),
        }
    }

    /// Load every sheet. A missing file is an empty table, not an
    /// error. Pool backfill runs on every load so documents written by
    /// older schema versions come out complete.
    pub async fn load(&self) -> Result<Vec<Player>, RepoError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut players: Vec<Player> = serde_json::from_slice(&bytes)?;
        for player in &mut players {
            player.backfill();
        }
        Ok(players)
    }

    /// Rewrite the full document, pretty-printed.
    pub async fn save(&self, players: &[Player]) -> Result<(), RepoError> {
        let bytes = serde_json::to_vec_pretty(players)?;
        write_atomic(&self.path, bytes).await
    }

    /// Linear scan by id.
    pub fn find(players: &[Player], id: PlayerId) -> Option<&Player> {
        players.iter().find(|p| p.id == id)
    }

    pub fn find_mut(players: &mut [Player], id: PlayerId) -> Option<&mut Player> {
        players.iter_mut().find(|p| p.id == id)
    }
}
