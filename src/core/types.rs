//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for a soldier within one battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SoldierId(pub u32);

/// Battle round counter (simulation time unit)
pub type Round = u64;

/// Which of the two armies in a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmySide {
    First,
    Second,
}

impl ArmySide {
    pub const BOTH: [ArmySide; 2] = [ArmySide::First, ArmySide::Second];

    /// The opposing side
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Position of this side in a two-element array
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}
