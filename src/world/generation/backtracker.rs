//! Recursive backtracker
//!
//! Carves a random spanning tree over the grid with an explicit DFS stack,
//! so every room is reachable from the start room.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::world::{Direction, Maze, Position};

/// Carve a spanning tree rooted at `start`
///
/// Adds exactly `room_count - 1` doors to a door-less maze.
pub fn carve_spanning_tree(rng: &mut impl Rng, maze: &mut Maze, start: Position) {
    let mut visited = vec![false; maze.room_count()];
    visited[maze.room_index(start)] = true;

    let mut stack = vec![start];
    while let Some(&current) = stack.last() {
        let unvisited: Vec<(Direction, Position)> = maze
            .adjacent(current)
            .filter(|(_, next)| !visited[maze.room_index(*next)])
            .collect();

        match unvisited.choose(rng) {
            Some(&(dir, next)) => {
                maze.carve(current, dir);
                visited[maze.room_index(next)] = true;
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tree_has_minimum_doors() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut maze = Maze::new(5, 4);
            carve_spanning_tree(&mut rng, &mut maze, Position::new(0, 0));
            assert_eq!(maze.door_count(), 19, "seed {seed}");
        }
    }

    #[test]
    fn test_single_room_tree() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut maze = Maze::new(1, 1);
        carve_spanning_tree(&mut rng, &mut maze, Position::new(0, 0));
        assert_eq!(maze.door_count(), 0);
    }
}
