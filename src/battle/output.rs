//! Battle report and serialization

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::battle::events::BattleEventLog;
use crate::battle::execution::{Battle, BattleOutcome, KillTally};
use crate::battle::soldier::SoldierKind;
use crate::core::error::Result;
use crate::core::types::{ArmySide, Round};

/// Final state of one army
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArmySummary {
    pub name: String,
    pub survivors: usize,
    pub rifles_left: usize,
    pub snipers_left: usize,
    pub kills: KillTally,
}

/// Complete battle report
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub winner: Option<String>,
    pub rounds: Round,
    pub seed: Option<u64>,
    pub elapsed_ms: u64,
    pub armies: Vec<ArmySummary>,
    pub history: BattleEventLog,
}

impl BattleReport {
    pub fn new<R: Rng>(battle: &Battle<R>, seed: Option<u64>, elapsed: Duration) -> Self {
        let armies = ArmySide::BOTH
            .iter()
            .map(|&side| {
                let army = battle.army(side);
                ArmySummary {
                    name: army.name().to_string(),
                    survivors: army.size(),
                    rifles_left: army.count_of(SoldierKind::Rifle),
                    snipers_left: army.count_of(SoldierKind::Sniper),
                    kills: battle.kills(side),
                }
            })
            .collect();

        Self {
            outcome: battle.outcome(),
            winner: battle
                .outcome()
                .winner()
                .map(|side| battle.army(side).name().to_string()),
            rounds: battle.round(),
            seed,
            elapsed_ms: elapsed.as_millis() as u64,
            armies,
            history: battle.log().clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let result = match &self.winner {
            Some(name) => format!("{} won", name),
            None => "No winner".to_string(),
        };
        let survivors: Vec<String> = self
            .armies
            .iter()
            .map(|a| format!("{}: {} left", a.name, a.survivors))
            .collect();
        format!(
            "{} after {} rounds ({})",
            result,
            self.rounds,
            survivors.join(", ")
        )
    }
}
