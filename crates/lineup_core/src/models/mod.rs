pub mod player;
pub mod position;

pub use player::{Player, Roster, UNKNOWN_PLAYER_NAME};
pub use position::PositionTag;
