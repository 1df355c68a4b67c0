//! Monster encounters
//!
//! A fight is a strict exchange of blows: the player strikes first, then the
//! monster, until one side drops to zero health or below.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::entities::{Item, Player};
use crate::game::MessageCategory;
use crate::ui::Output;

/// Health range of a freshly spawned monster
pub const MONSTER_HEALTH: RangeInclusive<i32> = 20..=50;
/// Strength range of a freshly spawned monster
pub const MONSTER_STRENGTH: RangeInclusive<i32> = 5..=15;

/// Gold paid out by [`CombatReward::Gold`]
pub const REWARD_GOLD: i32 = 30;
/// Experience paid out by [`CombatReward::Experience`]
pub const REWARD_EXPERIENCE: i32 = 100;

/// The opponent in a fight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monster {
    pub health: i32,
    pub strength: i32,
}

impl Monster {
    /// Roll a new monster
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let health = rng.gen_range(MONSTER_HEALTH);
        let strength = rng.gen_range(MONSTER_STRENGTH);
        Self { health, strength }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Spoils of a won fight, exactly one per victory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatReward {
    Gold,
    Experience,
    Potion,
}

impl CombatReward {
    /// Pick a reward uniformly
    pub fn roll(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => CombatReward::Gold,
            1 => CombatReward::Experience,
            _ => CombatReward::Potion,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            CombatReward::Gold => "You gain 30 gold!",
            CombatReward::Experience => "You gain 100 experience!",
            CombatReward::Potion => "You find a potion!",
        }
    }

    pub fn apply(&self, player: &mut Player) {
        match self {
            CombatReward::Gold => player.add_gold(REWARD_GOLD),
            CombatReward::Experience => player.add_experience(REWARD_EXPERIENCE),
            CombatReward::Potion => player.pick_up(Item::HealingPotion),
        }
    }
}

/// How a fight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Won(CombatReward),
    Lost,
}

/// Fight a freshly spawned monster to the death
pub fn fight(player: &mut Player, rng: &mut impl Rng, out: &mut impl Output) -> CombatOutcome {
    let monster = Monster::spawn(rng);
    fight_monster(player, monster, rng, out)
}

/// Fight a given monster to the death
///
/// Every blow deals at least 1 damage, so the loop always terminates.
pub fn fight_monster(
    player: &mut Player,
    mut monster: Monster,
    rng: &mut impl Rng,
    out: &mut impl Output,
) -> CombatOutcome {
    out.emit(
        MessageCategory::Combat,
        &format!(
            "You enter combat! Monster has {} health and {} strength.",
            monster.health, monster.strength
        ),
    );
    log::debug!("combat start: player {} hp, monster {:?}", player.health, monster);

    loop {
        let damage = rng.gen_range(1..=player.strength.max(1));
        monster.health -= damage;
        out.emit(
            MessageCategory::Combat,
            &format!("You deal {} damage. Monster health: {}", damage, monster.health.max(0)),
        );

        if !monster.is_alive() {
            out.emit(MessageCategory::Combat, "You win the combat!");
            let reward = CombatReward::roll(rng);
            out.emit(MessageCategory::Item, reward.text());
            reward.apply(player);
            log::debug!("combat won, reward {:?}", reward);
            return CombatOutcome::Won(reward);
        }

        let damage = rng.gen_range(1..=monster.strength.max(1));
        player.take_damage(damage);
        out.emit(
            MessageCategory::Combat,
            &format!("Monster deals {} damage. Your health: {}", damage, player.health.max(0)),
        );

        if !player.is_alive() {
            out.emit(MessageCategory::Combat, "You lose the combat and die.");
            log::debug!("combat lost at {} hp", player.health);
            return CombatOutcome::Lost;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::ui::MessageLog;

    #[test]
    fn test_monster_stats_in_range() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..500 {
            let monster = Monster::spawn(&mut rng);
            assert!(MONSTER_HEALTH.contains(&monster.health));
            assert!(MONSTER_STRENGTH.contains(&monster.strength));
        }
    }

    #[test]
    fn test_combat_always_ends() {
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut player = Player::new();
            let mut log = MessageLog::new();
            match fight(&mut player, &mut rng, &mut log) {
                CombatOutcome::Won(_) => assert!(player.is_alive(), "seed {seed}"),
                CombatOutcome::Lost => assert!(!player.is_alive(), "seed {seed}"),
            }
        }
    }

    #[test]
    fn test_win_pays_exactly_one_reward() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut player = Player::new();
            let mut log = MessageLog::new();
            if let CombatOutcome::Won(reward) = fight(&mut player, &mut rng, &mut log) {
                let paid = [
                    player.gold == REWARD_GOLD,
                    player.experience == REWARD_EXPERIENCE,
                    player.inventory == vec![Item::HealingPotion],
                ];
                assert_eq!(paid.iter().filter(|p| **p).count(), 1, "seed {seed}");
                assert!(log.contains(reward.text()));
            }
        }
    }

    #[test]
    fn test_weak_monster_loses() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut player = Player::new();
        let mut log = MessageLog::new();
        let monster = Monster { health: 1, strength: 5 };
        let outcome = fight_monster(&mut player, monster, &mut rng, &mut log);
        assert!(matches!(outcome, CombatOutcome::Won(_)));
        assert_eq!(player.health, 100);
        assert!(log.contains("Monster health: 0"));
    }

    #[test]
    fn test_dying_player_loses() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut player = Player::new();
        player.health = 1;
        let mut log = MessageLog::new();
        let monster = Monster { health: 500, strength: 5 };
        assert_eq!(fight_monster(&mut player, monster, &mut rng, &mut log), CombatOutcome::Lost);
        assert!(!player.is_alive());
        assert!(log.contains("You lose the combat and die."));
        assert!(log.contains("Your health: 0"));
    }
}
