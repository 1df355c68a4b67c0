//! Room events
//!
//! What happens when the player accepts a room's choice, and the one-in-a-
//! hundred death rolls that shadow every risky decision.

pub mod outcomes;

pub use outcomes::{Bane, Boon, SWORD_STRENGTH};

use rand::Rng;

/// Sides of the death die; a roll of 1 kills
pub const DEATH_DIE: i32 = 100;

/// Upper bound of the ambush band of the event roll
pub const AMBUSH_BELOW: f64 = 0.10;
/// Upper bound of the boon band
pub const BOON_BELOW: f64 = 0.75;
/// Upper bound of the bane band; everything above is a quiet room
pub const BANE_BELOW: f64 = 0.95;

/// Roll the death die
pub fn deadly_roll(rng: &mut impl Rng) -> bool {
    rng.gen_range(1..=DEATH_DIE) == 1
}

/// Result of accepting a room's choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomEvent {
    /// A monster appears and offers a fight
    Ambush,
    Boon(Boon),
    Bane(Bane),
    Nothing,
}

impl RoomEvent {
    /// Draw an event: 10% ambush, 65% boon, 20% bane, 5% nothing
    pub fn roll(rng: &mut impl Rng) -> Self {
        let roll: f64 = rng.gen();
        if roll < AMBUSH_BELOW {
            RoomEvent::Ambush
        } else if roll < BOON_BELOW {
            RoomEvent::Boon(Boon::roll(rng))
        } else if roll < BANE_BELOW {
            RoomEvent::Bane(Bane::roll(rng))
        } else {
            RoomEvent::Nothing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_event_mix() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0usize; 4];
        for _ in 0..20_000 {
            let slot = match RoomEvent::roll(&mut rng) {
                RoomEvent::Ambush => 0,
                RoomEvent::Boon(_) => 1,
                RoomEvent::Bane(_) => 2,
                RoomEvent::Nothing => 3,
            };
            counts[slot] += 1;
        }
        // Loose bounds around 10/65/20/5 percent
        assert!((1_600..2_400).contains(&counts[0]), "{:?}", counts);
        assert!((12_400..13_600).contains(&counts[1]), "{:?}", counts);
        assert!((3_500..4_500).contains(&counts[2]), "{:?}", counts);
        assert!((700..1_300).contains(&counts[3]), "{:?}", counts);
    }

    #[test]
    fn test_deadly_roll_is_rare() {
        let mut rng = StdRng::seed_from_u64(8);
        let deaths = (0..10_000).filter(|_| deadly_roll(&mut rng)).count();
        assert!((40..200).contains(&deaths), "{deaths}");
    }
}
