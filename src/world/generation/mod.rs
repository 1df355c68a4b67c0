//! Procedural maze generation
//!
//! A maze is built in three passes: a randomized DFS spanning tree, a loop
//! pass that opens extra doors, and a uniform pick of the exit room.

pub mod backtracker;
pub mod densify;

pub use backtracker::carve_spanning_tree;
pub use densify::{add_loops, MIN_DOORS};

use rand::Rng;

use super::{Maze, Position};

/// Generate a connected maze of `width` x `height` rooms
///
/// The exit is drawn uniformly over every room, the start room included.
pub fn generate_maze(rng: &mut impl Rng, width: usize, height: usize) -> Maze {
    debug_assert!(width > 0 && height > 0, "maze must have at least one room");

    let mut maze = Maze::new(width, height);
    let start = Position::new(0, 0);

    carve_spanning_tree(rng, &mut maze, start);
    log::debug!("spanning tree carved with {} doors", maze.door_count());

    add_loops(rng, &mut maze);

    let exit = Position::new(rng.gen_range(0..height), rng.gen_range(0..width));
    maze.set_exit(exit);

    log::info!(
        "generated {}x{} maze: {} doors, exit at {}",
        width,
        height,
        maze.door_count(),
        exit
    );
    maze
}
