//! Battle execution loop
//!
//! Each round: pick attacker -> attack -> report sizes -> check for a winner

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use crate::battle::army::{Army, AttackReport};
use crate::battle::events::{BattleEvent, BattleEventLog};
use crate::battle::observer::BattleObserver;
use crate::battle::soldier::{SoldierFactory, SoldierKind};
use crate::core::config::BattleConfig;
use crate::core::error::Result;
use crate::core::types::{ArmySide, Round};

/// Battle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BattlePhase {
    #[default]
    Running,
    Finished,
}

/// Battle outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BattleOutcome {
    #[default]
    Undecided,
    Victory(ArmySide),
}

impl BattleOutcome {
    pub fn winner(self) -> Option<ArmySide> {
        match self {
            Self::Victory(side) => Some(side),
            Self::Undecided => None,
        }
    }
}

/// Kills scored by one side, split by the shooter's variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KillTally {
    pub rifle: usize,
    pub sniper: usize,
}

impl KillTally {
    pub fn record(&mut self, shooter: SoldierKind) {
        match shooter {
            SoldierKind::Rifle => self.rifle += 1,
            SoldierKind::Sniper => self.sniper += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.rifle + self.sniper
    }
}

/// What happened in one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub round: Round,
    pub attacker: ArmySide,
    pub attack: AttackReport,
    /// Roster sizes after the attack, first army first
    pub sizes: [usize; 2],
    /// Set when this round ended the battle
    pub outcome: Option<BattleOutcome>,
}

/// Two armies, the observer that announces the result, and the random
/// source every draw in the battle comes from
pub struct Battle<R: Rng> {
    armies: [Army; 2],
    manager: Rc<dyn BattleObserver>,
    rng: R,
    round: Round,
    phase: BattlePhase,
    outcome: BattleOutcome,
    max_rounds: Option<Round>,
    kills: [KillTally; 2],
    log: BattleEventLog,
}

impl<R: Rng> Battle<R> {
    /// Set up a battle between two existing armies
    ///
    /// The manager announces the final result. It is not attached to the
    /// armies; attach it yourself if it should also hear attack announcements.
    pub fn new(first: Army, second: Army, manager: Rc<dyn BattleObserver>, rng: R) -> Self {
        Self {
            armies: [first, second],
            manager,
            rng,
            round: 0,
            phase: BattlePhase::Running,
            outcome: BattleOutcome::Undecided,
            max_rounds: None,
            kills: [KillTally::default(); 2],
            log: BattleEventLog::new(),
        }
    }

    /// Recruit both armies from the config and attach the manager to each
    pub fn from_config(
        config: &BattleConfig,
        manager: Rc<dyn BattleObserver>,
        mut rng: R,
    ) -> Self {
        let mut factory = SoldierFactory::new();
        let [first_name, second_name] = &config.army_names;
        let mut first = Army::recruit(
            first_name.as_str(),
            config.soldiers_per_army,
            &mut factory,
            &mut rng,
        );
        let mut second = Army::recruit(
            second_name.as_str(),
            config.soldiers_per_army,
            &mut factory,
            &mut rng,
        );
        first.attach(Rc::clone(&manager));
        second.attach(Rc::clone(&manager));

        tracing::info!(
            "{} ({} rifles, {} snipers) faces {} ({} rifles, {} snipers)",
            first.name(),
            first.count_of(SoldierKind::Rifle),
            first.count_of(SoldierKind::Sniper),
            second.name(),
            second.count_of(SoldierKind::Rifle),
            second.count_of(SoldierKind::Sniper)
        );

        Self::new(first, second, manager, rng).with_max_rounds(config.max_rounds)
    }

    pub fn with_max_rounds(mut self, max_rounds: Option<Round>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn army(&self, side: ArmySide) -> &Army {
        &self.armies[side.index()]
    }

    pub fn sizes(&self) -> [usize; 2] {
        [self.armies[0].size(), self.armies[1].size()]
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    pub fn max_rounds(&self) -> Option<Round> {
        self.max_rounds
    }

    pub fn kills(&self, side: ArmySide) -> KillTally {
        self.kills[side.index()]
    }

    pub fn log(&self) -> &BattleEventLog {
        &self.log
    }

    /// Is the battle finished?
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, BattlePhase::Finished)
    }

    /// Pick a random attacker and let it fire on the other army
    ///
    /// Does not decide the battle; see `check_battle_end`. Returns `None`
    /// once the battle is finished.
    pub fn fight_round(&mut self) -> Option<RoundReport> {
        if self.is_finished() {
            return None;
        }

        self.round += 1;
        let attacker_side = ArmySide::BOTH[self.rng.gen_range(0..ArmySide::BOTH.len())];

        let [first, second] = &mut self.armies;
        let (attacker, defender) = match attacker_side {
            ArmySide::First => (&*first, second),
            ArmySide::Second => (&*second, first),
        };
        let attack = attacker.attack(defender, &mut self.rng);

        for shot in attack.kills() {
            self.kills[attacker_side.index()].record(shot.attacker.kind);
        }
        self.log.push(
            self.round,
            BattleEvent::AttackStarted {
                attacker: attack.attacker.clone(),
                defender: attack.defender.clone(),
            },
        );

        let sizes = self.sizes();
        tracing::debug!(
            "Round {}: {} killed {} ({} / {} remain)",
            self.round,
            attack.attacker,
            attack.kill_count(),
            sizes[0],
            sizes[1]
        );

        Some(RoundReport {
            round: self.round,
            attacker: attacker_side,
            attack,
            sizes,
            outcome: None,
        })
    }

    /// End the battle with an outcome and announce it
    pub fn end_battle(&mut self, outcome: BattleOutcome) {
        if self.is_finished() {
            return;
        }

        self.phase = BattlePhase::Finished;
        self.outcome = outcome;

        let event = match outcome {
            BattleOutcome::Victory(side) => BattleEvent::Victory {
                winner: self.army(side).name().to_string(),
            },
            BattleOutcome::Undecided => BattleEvent::Stalemate { rounds: self.round },
        };
        tracing::info!("Battle ended after {} rounds: {}", self.round, event);

        self.manager.update(&event);
        self.log.push(self.round, event);
    }

    /// Fight one round and end the battle if it was decisive
    pub fn run_round(&mut self) -> Option<RoundReport> {
        let mut report = self.fight_round()?;
        if let Some(outcome) = check_battle_end(self) {
            self.end_battle(outcome);
            report.outcome = Some(outcome);
        }
        Some(report)
    }

    /// Fight to the end, writing the round transcript to `out`
    ///
    /// Attack announcements reach observers directly. Kill lines and roster
    /// sizes go to `out`, followed by `delay` of idle time per round.
    pub fn run<W: Write>(&mut self, out: &mut W, delay: Duration) -> Result<BattleOutcome> {
        while let Some(report) = self.fight_round() {
            for line in report.attack.kill_announcements() {
                writeln!(out, "{}", line)?;
            }
            for (army, size) in self.armies.iter().zip(report.sizes) {
                writeln!(out, "{} have: {}", army.name(), size)?;
            }
            writeln!(out)?;
            out.flush()?;

            if !delay.is_zero() {
                thread::sleep(delay);
            }

            if let Some(outcome) = check_battle_end(self) {
                self.end_battle(outcome);
            }
        }
        Ok(self.outcome)
    }
}

/// Decide whether the battle is over
///
/// The first army is checked before the second, so if both rosters are
/// empty the second army is named the winner.
pub fn check_battle_end<R: Rng>(battle: &Battle<R>) -> Option<BattleOutcome> {
    if battle.army(ArmySide::First).is_empty() {
        return Some(BattleOutcome::Victory(ArmySide::Second));
    }
    if battle.army(ArmySide::Second).is_empty() {
        return Some(BattleOutcome::Victory(ArmySide::First));
    }
    if battle.max_rounds().is_some_and(|cap| battle.round() >= cap) {
        return Some(BattleOutcome::Undecided);
    }
    None
}
