pub mod attributes;
pub mod dice;
pub mod entities;
pub mod error;
pub mod ids;
pub mod specialization;
pub mod stats;

pub use attributes::{Attribute, Attributes};
pub use dice::Die;
pub use entities::{
    DiceTray, DoomAction, GameState, InventoryItem, MoveDirection, Player, Pool, SceneUpdate,
    StepAction,
};
pub use error::DomainError;
pub use ids::{ItemId, PlayerId};
pub use specialization::Specialization;
pub use stats::{calculate_stats, DerivedStats};
