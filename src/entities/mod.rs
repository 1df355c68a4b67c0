//! Entity definitions

pub mod player;

pub use player::{Item, Player, StatSnapshot, START_HEALTH, START_STRENGTH};
