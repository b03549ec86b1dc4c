//! Soldier variants and the factory that recruits them
//!
//! A soldier has no mutable state. Its variant fixes the hit chance and the
//! name used in kill announcements.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::battle::constants::{RIFLE_HIT_CHANCE, SNIPER_HIT_CHANCE};
use crate::core::types::SoldierId;

/// Closed set of soldier variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoldierKind {
    Rifle,
    Sniper,
}

impl SoldierKind {
    pub const ALL: [SoldierKind; 2] = [SoldierKind::Sniper, SoldierKind::Rifle];

    /// Chance to hit out of 100
    pub const fn hit_chance(self) -> u32 {
        match self {
            Self::Rifle => RIFLE_HIT_CHANCE,
            Self::Sniper => SNIPER_HIT_CHANCE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rifle => "Rifle",
            Self::Sniper => "Sniper",
        }
    }

    /// How this variant describes firing at `target`
    pub fn attack_line(self, target: SoldierKind) -> String {
        match self {
            Self::Rifle => format!("Rifleman fires at {}", target),
            Self::Sniper => format!("Sniper shoots at {}", target),
        }
    }

    /// How this variant describes reacting to fire from `attacker`
    pub fn defend_line(self, attacker: SoldierKind) -> String {
        match self {
            Self::Rifle => format!("Rifleman braces for attack from {}", attacker),
            Self::Sniper => format!("Sniper takes cover from {}", attacker),
        }
    }
}

impl fmt::Display for SoldierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single soldier on an army roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Soldier {
    pub id: SoldierId,
    pub kind: SoldierKind,
}

impl Soldier {
    pub fn new(id: SoldierId, kind: SoldierKind) -> Self {
        Self { id, kind }
    }

    pub fn hit_chance(&self) -> u32 {
        self.kind.hit_chance()
    }
}

/// Issues soldiers with ids unique across every army it recruits for
#[derive(Debug, Clone, Default)]
pub struct SoldierFactory {
    next_id: u32,
}

impl SoldierFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a soldier of a specific variant
    pub fn create(&mut self, kind: SoldierKind) -> Soldier {
        let id = SoldierId(self.next_id);
        self.next_id += 1;
        Soldier::new(id, kind)
    }

    /// Create a soldier whose variant is picked uniformly at random
    pub fn create_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Soldier {
        let kind = SoldierKind::ALL[rng.gen_range(0..SoldierKind::ALL.len())];
        self.create(kind)
    }

    /// Number of soldiers issued so far
    pub fn issued(&self) -> u32 {
        self.next_id
    }
}
