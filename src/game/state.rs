//! Game state machine
//!
//! Drives a run turn by turn: exit check, first-visit room event, door
//! choice. A run ends in exactly one terminal [`GameState`].

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::error::GameError;
use super::messages::MessageCategory;
use crate::combat::{fight, CombatOutcome};
use crate::data::NarrativeTable;
use crate::entities::{Player, StatSnapshot};
use crate::events::{deadly_roll, RoomEvent};
use crate::ui::{Input, Output, Reply};
use crate::world::{Maze, Position};

/// Health lost when running from a fight
pub const FLEE_DAMAGE: i32 = 10;

const WELCOME: &str =
    "Welcome to the Dungeon Adventure! Explore the maze, make choices, and find the exit.";
const YES_NO_HINT: &str = "Please enter 'yes', 'y', 'no', or 'n'.";
const FALLBACK_AMBUSH: &str = "A monster blocks your way! Fight?";

/// What killed the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// The one-in-a-hundred roll on a room choice
    Catastrophe,
    /// A lost fight
    Combat,
    /// The one-in-a-hundred roll on a door
    Trap,
    /// Health worn down by room events
    Wounds,
}

/// Where a run stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Still moving through the maze
    Exploring,
    /// Reached the exit room
    Escaped,
    Died(DeathCause),
    /// Standing in a room without doors
    Stuck,
    /// The input source ran out
    InputClosed,
    /// The player interrupted the run
    Interrupted,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::Exploring)
    }
}

/// Parse a yes/no answer, case-insensitively
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

/// Parse a 1-based door number into an index below `count`
pub fn parse_door(answer: &str, count: usize) -> Option<usize> {
    let answer = answer.trim();
    if !answer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match answer.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// The main game struct that holds all run data
pub struct Game<R> {
    maze: Maze,
    player: Player,
    /// Rooms whose event has been offered
    visited: HashSet<Position>,
    narrative: NarrativeTable,
    /// Random number generator, supplied by the caller
    rng: R,
    state: GameState,
    turn: u32,
}

impl<R: Rng> Game<R> {
    /// Create a new run with a fresh player at the start room
    pub fn new(maze: Maze, narrative: NarrativeTable, rng: R) -> Self {
        Self {
            maze,
            player: Player::new(),
            visited: HashSet::new(),
            narrative,
            rng,
            state: GameState::Exploring,
            turn: 0,
        }
    }

    /// Replace the starting player
    pub fn with_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn visited(&self) -> &HashSet<Position> {
        &self.visited
    }

    pub fn snapshot(&self) -> StatSnapshot {
        self.player.snapshot()
    }

    /// Play until a terminal state, then report the ending and final stats
    pub fn run(&mut self, input: &mut impl Input, out: &mut impl Output) -> Result<GameState, GameError> {
        out.emit(MessageCategory::Lore, WELCOME);
        log::info!(
            "run started: {}x{} maze, exit at {}",
            self.maze.width(),
            self.maze.height(),
            self.maze.exit()
        );

        while !self.state.is_over() {
            self.play_turn(input, out)?;
        }

        self.announce_ending(out);
        log::info!("run ended after {} turns: {:?}", self.turn, self.state);
        Ok(self.state)
    }

    /// Play one turn of the loop
    pub fn play_turn(&mut self, input: &mut impl Input, out: &mut impl Output) -> Result<(), GameError> {
        if self.state.is_over() {
            return Ok(());
        }
        self.turn += 1;

        let pos = self.player.position;
        log::trace!("turn {} at {}", self.turn, pos);

        if !self.player.is_alive() {
            self.state = GameState::Died(DeathCause::Wounds);
            return Ok(());
        }

        if pos == self.maze.exit() {
            out.emit(
                MessageCategory::System,
                "You have found the hidden exit room! You escape the dungeon!",
            );
            self.state = GameState::Escaped;
            return Ok(());
        }

        if !self.visited.contains(&pos) {
            self.enter_room(pos, input, out)?;
            if self.state.is_over() {
                return Ok(());
            }
            if !self.player.is_alive() {
                self.state = GameState::Died(DeathCause::Wounds);
                return Ok(());
            }
        }

        self.choose_door(pos, input, out)
    }

    /// Read one reply; `None` once the run has been ended by the input
    fn read_answer(&mut self, input: &mut impl Input) -> Result<Option<String>, GameError> {
        match input.read_reply()? {
            Reply::Line(line) => Ok(Some(line)),
            Reply::Closed => {
                self.state = GameState::InputClosed;
                Ok(None)
            }
            Reply::Interrupted => {
                self.state = GameState::Interrupted;
                Ok(None)
            }
        }
    }

    /// Narrate a room on first entry and resolve its event
    fn enter_room(&mut self, pos: Position, input: &mut impl Input, out: &mut impl Output) -> Result<(), GameError> {
        self.visited.insert(pos);

        let index = self.maze.room_index(pos);
        let room = self
            .narrative
            .room(index)
            .ok_or(GameError::NarrativeOutOfRange {
                index,
                len: self.narrative.len(),
            })?;
        out.emit(MessageCategory::Lore, &room.description);
        let prompt = format!("Do you want to {} (yes/no)?", room.choice);

        let accepted = loop {
            out.emit(MessageCategory::Prompt, &prompt);
            let Some(answer) = self.read_answer(input)? else {
                return Ok(());
            };
            match parse_yes_no(&answer) {
                Some(accepted) => break accepted,
                None => out.emit(MessageCategory::Warning, YES_NO_HINT),
            }
        };
        if !accepted {
            return Ok(());
        }

        if deadly_roll(&mut self.rng) {
            out.emit(MessageCategory::Event, "Catastrophic failure! You die instantly.");
            self.player.kill();
            self.state = GameState::Died(DeathCause::Catastrophe);
            return Ok(());
        }

        let event = RoomEvent::roll(&mut self.rng);
        log::debug!("room {} event: {:?}", pos, event);
        match event {
            RoomEvent::Ambush => self.ambush(input, out)?,
            RoomEvent::Boon(boon) => {
                out.emit(MessageCategory::Item, &boon.text());
                boon.apply(&mut self.player);
            }
            RoomEvent::Bane(bane) => {
                out.emit(MessageCategory::Event, &bane.text());
                bane.apply(&mut self.player);
            }
            RoomEvent::Nothing => out.emit(MessageCategory::Event, "Nothing happens."),
        }
        Ok(())
    }

    /// Offer a fight; an unreadable answer drops the encounter
    fn ambush(&mut self, input: &mut impl Input, out: &mut impl Output) -> Result<(), GameError> {
        let line = self
            .narrative
            .ambush_lines
            .choose(&mut self.rng)
            .map(String::as_str)
            .unwrap_or(FALLBACK_AMBUSH);
        out.emit(MessageCategory::Combat, line);
        out.emit(MessageCategory::Prompt, "Fight? (yes/no):");

        let Some(answer) = self.read_answer(input)? else {
            return Ok(());
        };
        match parse_yes_no(&answer) {
            Some(true) => {
                if fight(&mut self.player, &mut self.rng, out) == CombatOutcome::Lost {
                    self.state = GameState::Died(DeathCause::Combat);
                }
            }
            Some(false) => {
                out.emit(MessageCategory::Event, "You flee, but take 10 damage.");
                self.player.take_damage(FLEE_DAMAGE);
            }
            None => out.emit(MessageCategory::Warning, YES_NO_HINT),
        }
        Ok(())
    }

    /// List the doors of `pos` and walk through the chosen one
    fn choose_door(&mut self, pos: Position, input: &mut impl Input, out: &mut impl Output) -> Result<(), GameError> {
        let doors = self.maze.neighbors(pos);
        if doors.is_empty() {
            out.emit(MessageCategory::Warning, "Error: No valid doors available. Ending game.");
            log::error!("room {} has no doors", pos);
            self.state = GameState::Stuck;
            return Ok(());
        }

        out.emit(MessageCategory::System, "Available doors:");
        for (i, (dir, _)) in doors.iter().enumerate() {
            out.emit(MessageCategory::System, &format!("{}. {}", i + 1, dir));
        }
        out.emit(MessageCategory::Prompt, "Choose a door (number):");

        let Some(answer) = self.read_answer(input)? else {
            return Ok(());
        };
        let Some(choice) = parse_door(&answer, doors.len()) else {
            out.emit(
                MessageCategory::Warning,
                &format!("Please enter a number between 1 and {}.", doors.len()),
            );
            return Ok(());
        };

        if deadly_roll(&mut self.rng) {
            out.emit(
                MessageCategory::Event,
                "A deadly trap triggers as you open the door! You die.",
            );
            self.player.kill();
            self.state = GameState::Died(DeathCause::Trap);
            return Ok(());
        }

        let (dir, next) = doors[choice];
        self.player.move_to(next, dir);
        log::trace!("moved {} to {}", dir, next);
        Ok(())
    }

    fn announce_ending(&self, out: &mut impl Output) {
        let closing = match self.state {
            GameState::Escaped => Some("Congratulations on escaping!"),
            GameState::Died(_) => Some("Game over. You died."),
            GameState::InputClosed => Some("Input stream closed. Exiting game."),
            GameState::Interrupted => Some("Game interrupted by user. Exiting."),
            GameState::Stuck | GameState::Exploring => None,
        };
        if let Some(closing) = closing {
            out.emit(MessageCategory::System, closing);
        }
        out.emit(MessageCategory::System, &self.player.snapshot().to_string());
    }
}
