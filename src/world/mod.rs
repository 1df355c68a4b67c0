//! World module
//!
//! Contains the maze data structure and its procedural generation.

pub mod generation;
pub mod maze;

pub use generation::generate_maze;
pub use maze::{Direction, Doors, Maze, Position};
