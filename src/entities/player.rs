//! The adventurer
//!
//! Stats, inventory and position of the player, plus the stat summary
//! printed when a run ends.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::world::{Direction, Position};

/// Starting health
pub const START_HEALTH: i32 = 100;
/// Starting strength, also the upper bound of a player blow
pub const START_STRENGTH: i32 = 10;

/// Items the player can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    HealingPotion,
    Sword,
    Key,
}

impl Item {
    pub fn name(&self) -> &'static str {
        match self {
            Item::HealingPotion => "Healing Potion",
            Item::Sword => "Sword",
            Item::Key => "Key",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Player state for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Can drop below zero during a fight; the player is dead at 0 or less
    pub health: i32,
    pub strength: i32,
    pub gold: i32,
    pub experience: i32,
    /// Append-only, in pickup order
    pub inventory: Vec<Item>,
    pub position: Position,
    /// Direction of the last door taken
    pub previous_door: Option<Direction>,
}

impl Player {
    /// A fresh adventurer standing in the start room
    pub fn new() -> Self {
        Self {
            health: START_HEALTH,
            strength: START_STRENGTH,
            gold: 0,
            experience: 0,
            inventory: Vec::new(),
            position: Position::new(0, 0),
            previous_door: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn heal(&mut self, amount: i32) {
        self.health += amount;
    }

    /// Lose health; there is no floor, callers check [`Player::is_alive`]
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Set health to zero (instant death)
    pub fn kill(&mut self) {
        self.health = 0;
    }

    pub fn add_gold(&mut self, amount: i32) {
        self.gold += amount;
    }

    /// Lose gold, never going below zero
    pub fn lose_gold(&mut self, amount: i32) {
        self.gold = (self.gold - amount).max(0);
    }

    pub fn add_experience(&mut self, amount: i32) {
        self.experience += amount;
    }

    pub fn add_strength(&mut self, amount: i32) {
        self.strength += amount;
    }

    pub fn pick_up(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Walk through a door into `to`
    pub fn move_to(&mut self, to: Position, through: Direction) {
        self.position = to;
        self.previous_door = Some(through);
    }

    /// Snapshot of the stats for the end-of-run report
    pub fn snapshot(&self) -> StatSnapshot {
        StatSnapshot {
            health: self.health,
            strength: self.strength,
            gold: self.gold,
            experience: self.experience,
            inventory: self.inventory.clone(),
            position: self.position,
            previous_door: self.previous_door,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Player stats at the end of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSnapshot {
    pub health: i32,
    pub strength: i32,
    pub gold: i32,
    pub experience: i32,
    pub inventory: Vec<Item>,
    pub position: Position,
    pub previous_door: Option<Direction>,
}

impl fmt::Display for StatSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<&str> = self.inventory.iter().map(Item::name).collect();
        write!(
            f,
            "Final stats: Health {}, Strength {}, Gold {}, Experience {}, Inventory: [{}]",
            self.health,
            self.strength,
            self.gold,
            self.experience,
            items.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let player = Player::new();
        assert_eq!(player.health, 100);
        assert_eq!(player.strength, 10);
        assert_eq!(player.gold, 0);
        assert!(player.inventory.is_empty());
        assert_eq!(player.position, Position::new(0, 0));
        assert!(player.is_alive());
    }

    #[test]
    fn test_zero_health_is_dead() {
        let mut player = Player::new();
        player.take_damage(100);
        assert_eq!(player.health, 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_gold_floor() {
        let mut player = Player::new();
        player.add_gold(4);
        player.lose_gold(10);
        assert_eq!(player.gold, 0);
    }

    #[test]
    fn test_move_records_door() {
        let mut player = Player::new();
        player.move_to(Position::new(1, 0), Direction::South);
        assert_eq!(player.position, Position::new(1, 0));
        assert_eq!(player.previous_door, Some(Direction::South));
    }

    #[test]
    fn test_snapshot_display() {
        let mut player = Player::new();
        player.pick_up(Item::Sword);
        player.pick_up(Item::Key);
        assert_eq!(
            player.snapshot().to_string(),
            "Final stats: Health 100, Strength 10, Gold 0, Experience 0, Inventory: [Sword, Key]"
        );
    }
}
