//! Battle system - two armies trade volleys until one is gone
//!
//! No terrain, no movement, no formations: every round one army fires a
//! volley at the other and each shot either kills or misses.

pub mod army;
pub mod constants;
pub mod events;
pub mod execution;
pub mod observer;
pub mod output;
pub mod resolution;
pub mod soldier;

// Re-exports for convenient access
pub use army::{Army, AttackReport};
pub use constants::*;
pub use events::{BattleEvent, BattleEventLog, LoggedEvent};
pub use execution::{
    check_battle_end, Battle, BattleOutcome, BattlePhase, KillTally, RoundReport,
};
pub use observer::{BattleObserver, ConsoleObserver, ConsoleStream, EventRecorder, ObserverList};
pub use output::{ArmySummary, BattleReport};
pub use resolution::{pick_target, resolve_shot, roll_hit, Shot};
pub use soldier::{Soldier, SoldierFactory, SoldierKind};
