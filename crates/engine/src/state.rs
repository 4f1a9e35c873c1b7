//! Shared router state: the two document repositories.

use std::path::Path;

use crate::infrastructure::persistence::{GameStateRepository, PlayerRepository};

pub struct AppState {
    pub players: PlayerRepository,
    pub game_state: GameStateRepository,
}

impl AppState {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            players: PlayerRepository::new(data_dir),
            game_state: GameStateRepository::new(data_dir),
        }
    }
}
