//! JSON-file storage for the singleton session record.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mesa_domain::GameState;

use super::{write_atomic, RepoError};

/// Whole-document store for `gamestate.json` (one JSON object).
pub struct GameStateRepository {
    path: PathBuf,
}

impl GameStateRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("gamestate.json"),
        }
    }

    /// Load the session record. A missing file yields the defaults;
    /// fields absent from an older document are default-filled by the
    /// schema itself.
    pub async fn load(&self) -> Result<GameState, RepoError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(GameState::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Rewrite the full document, pretty-printed.
    pub async fn save(&self, state: &GameState) -> Result<(), RepoError> {
        let bytes = serde_json::to_vec_pretty(state)?;
        write_atomic(&self.path, bytes).await
    }
}
