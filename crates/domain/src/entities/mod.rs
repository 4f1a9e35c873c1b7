pub mod game_state;
pub mod player;

pub use game_state::{DoomAction, GameState, SceneUpdate};
pub use player::{DiceTray, InventoryItem, MoveDirection, Player, Pool, StepAction};
