//! Combat system

pub mod encounter;

pub use encounter::{fight, fight_monster, CombatOutcome, CombatReward, Monster};
