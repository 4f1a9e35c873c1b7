//! The shared session record: scene fields, doom clock, GM dice.
//!
//! A single document with no identity. Field-level serde defaults merge
//! older persisted documents with the current schema on load.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::dice::Die;

/// Doom clock ceiling for a session.
pub const DOOM_MAX: u32 = 12;

/// Scene fields posted from the dashboard; absent fields stay unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneUpdate {
    pub location: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

/// Doom clock action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoomAction {
    Inc,
    Dec,
    Reset,
}

impl FromStr for DoomAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inc" => Ok(Self::Inc),
            "dec" => Ok(Self::Dec),
            "reset" => Ok(Self::Reset),
            _ => Err(()),
        }
    }
}

/// Shared state of the running session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_time")]
    pub time: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub doom_clock: u32,
    #[serde(default = "default_doom_max")]
    pub doom_max: u32,
    #[serde(default)]
    pub dm_last_roll: Option<u32>,
    #[serde(default)]
    pub dm_last_die: Option<String>,
}

fn default_location() -> String {
    "DESCONHECIDO".to_string()
}

fn default_time() -> String {
    "00:00".to_string()
}

fn default_doom_max() -> u32 {
    DOOM_MAX
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            location: default_location(),
            time: default_time(),
            notes: String::new(),
            doom_clock: 0,
            doom_max: DOOM_MAX,
            dm_last_roll: None,
            dm_last_die: None,
        }
    }
}

impl GameState {
    /// Apply a scene update; only the fields present change. The
    /// location is uppercased like player names.
    pub fn apply_scene(&mut self, update: SceneUpdate) {
        if let Some(location) = update.location {
            self.location = location.to_uppercase();
        }
        if let Some(time) = update.time {
            self.time = time;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
    }

    /// Step the doom clock: inc clamps at `doom_max`, dec floors at 0,
    /// reset zeroes it.
    pub fn adjust_doom(&mut self, action: DoomAction) {
        self.doom_clock = match action {
            DoomAction::Inc => (self.doom_clock + 1).min(self.doom_max),
            DoomAction::Dec => self.doom_clock.saturating_sub(1),
            DoomAction::Reset => 0,
        };
    }

    /// Record the GM's roll: numeric result plus the uppercase die label.
    pub fn record_dm_roll(&mut self, die: Die, value: u32) {
        self.dm_last_roll = Some(value);
        self.dm_last_die = Some(die.label().to_string());
    }
}
