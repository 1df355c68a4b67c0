//! Room event outcomes
//!
//! Each outcome is a tagged value: the tag alone decides which stat
//! changes and by how much. The narration text is derived from it, never
//! parsed back.

use rand::Rng;

use crate::entities::{Item, Player};

/// Strength granted by the sword on top of the item itself
pub const SWORD_STRENGTH: i32 = 2;

/// Good things found in a room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boon {
    Gold(i32),
    Health(i32),
    Potion,
    Strength(i32),
    Sword,
    Experience(i32),
    Key,
}

impl Boon {
    /// The seven boons, each equally likely
    pub const ALL: [Boon; 7] = [
        Boon::Gold(20),
        Boon::Health(10),
        Boon::Potion,
        Boon::Strength(1),
        Boon::Sword,
        Boon::Experience(50),
        Boon::Key,
    ];

    pub fn roll(rng: &mut impl Rng) -> Self {
        let roll: u32 = rng.gen_range(0..Self::ALL.len() as u32);
        Self::ALL[roll as usize]
    }

    pub fn text(&self) -> String {
        match self {
            Boon::Gold(amount) => format!("You find {} gold pieces!", amount),
            Boon::Health(amount) => format!("Your health is restored by {}!", amount),
            Boon::Potion => "You gain a healing potion!".to_string(),
            Boon::Strength(amount) => format!("Your strength increases by {}!", amount),
            Boon::Sword => "You find a sharp sword!".to_string(),
            Boon::Experience(amount) => format!("You gain {} experience points!", amount),
            Boon::Key => "You find a mysterious key!".to_string(),
        }
    }

    pub fn apply(&self, player: &mut Player) {
        match *self {
            Boon::Gold(amount) => player.add_gold(amount),
            Boon::Health(amount) => player.heal(amount),
            Boon::Potion => player.pick_up(Item::HealingPotion),
            Boon::Strength(amount) => player.add_strength(amount),
            Boon::Sword => {
                player.pick_up(Item::Sword);
                player.add_strength(SWORD_STRENGTH);
            }
            Boon::Experience(amount) => player.add_experience(amount),
            Boon::Key => player.pick_up(Item::Key),
        }
    }
}

/// Bad things that happen in a room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bane {
    Trap(i32),
    Poison(i32),
    Curse(i32),
    Ambush(i32),
}

impl Bane {
    /// The four banes, each equally likely
    pub const ALL: [Bane; 4] = [
        Bane::Trap(15),
        Bane::Poison(10),
        Bane::Curse(10),
        Bane::Ambush(20),
    ];

    pub fn roll(rng: &mut impl Rng) -> Self {
        let roll: u32 = rng.gen_range(0..Self::ALL.len() as u32);
        Self::ALL[roll as usize]
    }

    pub fn text(&self) -> String {
        match self {
            Bane::Trap(amount) => format!("It's trapped! Lose {} health.", amount),
            Bane::Poison(amount) => format!("Poisoned! Lose {} health.", amount),
            Bane::Curse(amount) => format!("Cursed! Lose {} gold.", amount),
            Bane::Ambush(amount) => format!("A monster attacks! Lose {} health.", amount),
        }
    }

    pub fn apply(&self, player: &mut Player) {
        match *self {
            Bane::Trap(amount) | Bane::Poison(amount) | Bane::Ambush(amount) => {
                player.take_damage(amount)
            }
            Bane::Curse(amount) => player.lose_gold(amount),
        }
    }
}
