//! Battle system constants - all tunable values in one place

// Hit resolution: roll a d100, hit when the roll is below the threshold
pub const HIT_ROLL_SIDES: u32 = 100;
pub const RIFLE_HIT_CHANCE: u32 = 10;
pub const SNIPER_HIT_CHANCE: u32 = 20;

// Setup
pub const DEFAULT_SOLDIERS_PER_ARMY: usize = 50;
pub const DEFAULT_ARMY_NAMES: [&str; 2] = ["Army 1", "Army 2"];
pub const DEFAULT_OBSERVER_NAME: &str = "Battle Manager";

// Pacing
pub const DEFAULT_ROUND_DELAY_MS: u64 = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_chances_fit_roll() {
        assert!(RIFLE_HIT_CHANCE < HIT_ROLL_SIDES);
        assert!(SNIPER_HIT_CHANCE < HIT_ROLL_SIDES);
    }

    #[test]
    fn test_sniper_outshoots_rifle() {
        assert!(SNIPER_HIT_CHANCE > RIFLE_HIT_CHANCE);
    }
}
