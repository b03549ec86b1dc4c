//! Shot resolution: target selection and the d100 hit roll

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::constants::HIT_ROLL_SIDES;
use crate::battle::soldier::{Soldier, SoldierKind};

/// Result of one soldier firing once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shot {
    pub attacker: Soldier,
    pub target: Soldier,
    pub roll: u32,
    pub killed: bool,
}

impl Shot {
    /// Console line for a kill; misses have none
    pub fn announcement(&self, army_name: &str) -> Option<String> {
        self.killed.then(|| {
            format!(
                "{} from {} kills {} from the enemy.",
                self.attacker.kind, army_name, self.target.kind
            )
        })
    }
}

/// Pick a uniformly random index into a live roster
///
/// Returns `None` for an empty roster; nothing is drawn in that case.
pub fn pick_target<R: Rng + ?Sized>(rng: &mut R, roster: &[Soldier]) -> Option<usize> {
    if roster.is_empty() {
        return None;
    }
    Some(rng.gen_range(0..roster.len()))
}

/// Roll a d100 for `kind`. Returns the roll and whether it hit.
pub fn roll_hit<R: Rng + ?Sized>(rng: &mut R, kind: SoldierKind) -> (u32, bool) {
    let roll = rng.gen_range(0..HIT_ROLL_SIDES);
    (roll, roll < kind.hit_chance())
}

/// Resolve one attacker firing at the soldier at `index` in `roster`
///
/// A hit removes the target from the roster.
pub fn resolve_shot<R: Rng + ?Sized>(
    rng: &mut R,
    attacker: Soldier,
    roster: &mut Vec<Soldier>,
    index: usize,
) -> Shot {
    let target = roster[index];
    let (roll, killed) = roll_hit(rng, attacker.kind);
    if killed {
        roster.remove(index);
    }
    Shot {
        attacker,
        target,
        roll,
        killed,
    }
}
