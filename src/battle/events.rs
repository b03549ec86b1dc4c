//! Battle events and the ordered log a battle keeps of them

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::Round;

/// Announcement broadcast to observers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    AttackStarted { attacker: String, defender: String },
    Victory { winner: String },
    Stalemate { rounds: Round },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttackStarted { attacker, defender } => {
                write!(f, "{} is attacking {}!", attacker, defender)
            }
            Self::Victory { winner } => write!(f, "{} Won the Battle!!!", winner),
            Self::Stalemate { rounds } => write!(f, "No victor after {} rounds.", rounds),
        }
    }
}

/// Log entry for battle events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedEvent {
    pub round: Round,
    pub event: BattleEvent,
}

/// Every event a battle announced, in order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleEventLog {
    pub events: Vec<LoggedEvent>,
}

impl BattleEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, round: Round, event: BattleEvent) {
        self.events.push(LoggedEvent { round, event });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn for_round(&self, round: Round) -> impl Iterator<Item = &BattleEvent> {
        self.events
            .iter()
            .filter(move |e| e.round == round)
            .map(|e| &e.event)
    }

    pub fn victories(&self) -> impl Iterator<Item = &BattleEvent> {
        self.events
            .iter()
            .map(|e| &e.event)
            .filter(|e| matches!(e, BattleEvent::Victory { .. }))
    }
}
