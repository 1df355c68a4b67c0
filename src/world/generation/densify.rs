//! Loop carving
//!
//! A spanning tree leaves dead ends everywhere. This pass opens extra
//! doors until every room has at least [`MIN_DOORS`], where the grid allows it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::world::{Direction, Maze, Position};

/// Door count every room is raised to when it has enough grid neighbors
pub const MIN_DOORS: usize = 2;

/// Open extra doors so rooms reach [`MIN_DOORS`]
///
/// Only adds doors. Rooms are visited row by row, and a door opened for one
/// room also counts for the room on the other side.
pub fn add_loops(rng: &mut impl Rng, maze: &mut Maze) {
    let rooms: Vec<Position> = maze.positions().collect();
    let mut added = 0;

    for pos in rooms {
        let doors = maze.doors(pos);
        if doors.count() >= Direction::ALL.len() {
            continue;
        }

        let mut candidates: Vec<Direction> = maze
            .adjacent(pos)
            .map(|(dir, _)| dir)
            .filter(|dir| !doors.contains(*dir))
            .collect();
        candidates.shuffle(rng);

        let wanted = MIN_DOORS.saturating_sub(doors.count()).min(candidates.len());
        for dir in candidates.into_iter().take(wanted) {
            maze.carve(pos, dir);
            added += 1;
        }
    }

    log::debug!("loop pass opened {} extra doors", added);
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_raises_isolated_grid() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut maze = Maze::new(3, 3);
        add_loops(&mut rng, &mut maze);
        for pos in maze.positions() {
            assert!(maze.doors(pos).count() >= MIN_DOORS, "room {pos}");
        }
    }

    #[test]
    fn test_keeps_existing_doors() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut maze = Maze::new(2, 2);
        maze.carve(Position::new(0, 0), Direction::East);
        add_loops(&mut rng, &mut maze);
        assert!(maze.has_door(Position::new(0, 0), Direction::East));
        assert!(maze.has_door(Position::new(0, 1), Direction::West));
    }

    #[test]
    fn test_strip_endpoints_stay_at_one() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut maze = Maze::new(4, 1);
        add_loops(&mut rng, &mut maze);
        assert_eq!(maze.doors(Position::new(0, 0)).count(), 1);
        assert_eq!(maze.doors(Position::new(0, 3)).count(), 1);
        assert_eq!(maze.doors(Position::new(0, 1)).count(), 2);
    }
}
