//! Maze data structure
//!
//! The grid of rooms, the doors between them, and the neighbor lookup the
//! game loop uses to build its door menu.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A room coordinate on the maze grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step one room in a direction, or `None` when that leaves the grid
    pub fn step(self, dir: Direction, width: usize, height: usize) -> Option<Position> {
        match dir {
            Direction::North if self.row > 0 => Some(Position::new(self.row - 1, self.col)),
            Direction::South if self.row + 1 < height => Some(Position::new(self.row + 1, self.col)),
            Direction::East if self.col + 1 < width => Some(Position::new(self.row, self.col + 1)),
            Direction::West if self.col > 0 => Some(Position::new(self.row, self.col - 1)),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Compass direction of a door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Menu order for doors
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::South => 0b0010,
            Direction::East => 0b0100,
            Direction::West => 0b1000,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of doors in one room, at most one per direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Doors(u8);

impl Doors {
    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    /// Number of doors in the room
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Doors present, in menu order
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

/// A rectangular maze of rooms connected by doors
///
/// Built once by [`generate_maze`](super::generate_maze) and never changed
/// afterwards; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    /// Door sets, indexed by `row * width + col`
    cells: Vec<Doors>,
    exit: Position,
}

impl Maze {
    /// Create a maze with no doors and the exit at the start room
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Doors::default(); width * height],
            exit: Position::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of rooms
    pub fn room_count(&self) -> usize {
        self.width * self.height
    }

    /// The room whose arrival ends the run in success
    pub fn exit(&self) -> Position {
        self.exit
    }

    pub fn set_exit(&mut self, pos: Position) {
        debug_assert!(self.in_bounds(pos));
        self.exit = pos;
    }

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Flat index of a room, also used to look up its narrative
    #[inline]
    pub fn room_index(&self, pos: Position) -> usize {
        pos.row * self.width + pos.col
    }

    /// Every room position, row by row
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Position::new(row, col)))
    }

    /// Doors of a room
    pub fn doors(&self, pos: Position) -> Doors {
        self.cells[self.room_index(pos)]
    }

    /// Whether `pos` has a door leading `dir`
    pub fn has_door(&self, pos: Position, dir: Direction) -> bool {
        self.doors(pos).contains(dir)
    }

    /// Grid-adjacent rooms of `pos`, connected or not
    pub fn adjacent(&self, pos: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| pos.step(dir, self.width, self.height).map(|next| (dir, next)))
    }

    /// Carve a two-way door from `pos` towards `dir`
    ///
    /// Returns the room on the other side, or `None` if `dir` leaves the grid.
    pub fn carve(&mut self, pos: Position, dir: Direction) -> Option<Position> {
        let next = pos.step(dir, self.width, self.height)?;
        let (here, there) = (self.room_index(pos), self.room_index(next));
        self.cells[here].insert(dir);
        self.cells[there].insert(dir.opposite());
        Some(next)
    }

    /// Rooms reachable through the doors of `pos`, in North, South, East, West order
    pub fn neighbors(&self, pos: Position) -> Vec<(Direction, Position)> {
        self.doors(pos)
            .iter()
            .filter_map(|dir| pos.step(dir, self.width, self.height).map(|next| (dir, next)))
            .collect()
    }

    /// Total number of two-way doors
    pub fn door_count(&self) -> usize {
        self.cells.iter().map(|d| d.count()).sum::<usize>() / 2
    }
}
