//! Mazedelve - a procedurally generated dungeon maze crawl
//!
//! Wander a randomly carved maze room by room, gamble on what each room
//! offers, survive the monsters, and find the hidden exit.

pub mod combat;
pub mod data;
pub mod entities;
pub mod events;
pub mod game;
pub mod ui;
pub mod world;

// Re-export commonly used types
pub use data::{GameConfig, NarrativeTable};
pub use entities::Player;
pub use game::{Game, GameError, GameState};
pub use world::{generate_maze, Maze};
