//! Game module - Core game logic and state management

mod error;
mod messages;
mod state;

pub use error::GameError;
pub use messages::{GameMessage, MessageCategory};
pub use state::{parse_door, parse_yes_no, DeathCause, Game, GameState, FLEE_DAMAGE};
