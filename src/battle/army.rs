//! Armies: a named roster of live soldiers plus the observers watching it
//!
//! The roster only shrinks once the battle starts. Soldiers leave it when
//! an enemy shot kills them and never come back.

use rand::Rng;
use std::rc::Rc;

use crate::battle::events::BattleEvent;
use crate::battle::observer::{BattleObserver, ObserverList};
use crate::battle::resolution::{pick_target, resolve_shot, Shot};
use crate::battle::soldier::{Soldier, SoldierFactory, SoldierKind};
use crate::core::types::SoldierId;

/// Everything that happened during one `Army::attack` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker: String,
    pub defender: String,
    pub shots: Vec<Shot>,
}

impl AttackReport {
    pub fn kills(&self) -> impl Iterator<Item = &Shot> {
        self.shots.iter().filter(|s| s.killed)
    }

    pub fn kill_count(&self) -> usize {
        self.kills().count()
    }

    /// Console lines for every kill, in firing order
    pub fn kill_announcements(&self) -> Vec<String> {
        self.shots
            .iter()
            .filter_map(|s| s.announcement(&self.attacker))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Army {
    name: String,
    soldiers: Vec<Soldier>,
    observers: ObserverList,
}

impl Army {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            soldiers: Vec::new(),
            observers: ObserverList::new(),
        }
    }

    pub fn with_soldiers(name: impl Into<String>, soldiers: Vec<Soldier>) -> Self {
        Self {
            soldiers,
            ..Self::new(name)
        }
    }

    /// Raise an army of `count` soldiers with randomly chosen variants
    pub fn recruit<R: Rng + ?Sized>(
        name: impl Into<String>,
        count: usize,
        factory: &mut SoldierFactory,
        rng: &mut R,
    ) -> Self {
        let soldiers = (0..count).map(|_| factory.create_random(rng)).collect();
        Self::with_soldiers(name, soldiers)
    }

    pub fn add_soldier(&mut self, soldier: Soldier) {
        self.soldiers.push(soldier);
    }

    pub fn attach(&mut self, observer: Rc<dyn BattleObserver>) {
        self.observers.attach(observer);
    }

    pub fn notify(&self, event: &BattleEvent) {
        self.observers.notify(event);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn soldiers(&self) -> &[Soldier] {
        &self.soldiers
    }

    pub fn size(&self) -> usize {
        self.soldiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.soldiers.is_empty()
    }

    pub fn contains(&self, id: SoldierId) -> bool {
        self.soldiers.iter().any(|s| s.id == id)
    }

    pub fn count_of(&self, kind: SoldierKind) -> usize {
        self.soldiers.iter().filter(|s| s.kind == kind).count()
    }

    /// Every soldier in this army fires once at a random enemy soldier
    ///
    /// The attack announcement goes out before any shot. Targets are drawn
    /// independently per shooter, so one enemy may be picked many times.
    /// Once the target roster is empty the remaining shooters hold fire.
    pub fn attack<R: Rng + ?Sized>(&self, target: &mut Army, rng: &mut R) -> AttackReport {
        self.notify(&BattleEvent::AttackStarted {
            attacker: self.name.clone(),
            defender: target.name.clone(),
        });

        let mut shots = Vec::new();
        for (fired, &attacker) in self.soldiers.iter().enumerate() {
            let Some(index) = pick_target(rng, &target.soldiers) else {
                tracing::trace!(
                    "{} has no targets left, {} shooters hold fire",
                    target.name,
                    self.soldiers.len() - fired
                );
                break;
            };

            let shot = resolve_shot(rng, attacker, &mut target.soldiers, index);
            if shot.killed {
                tracing::debug!(
                    "{}; {}",
                    shot.attacker.kind.attack_line(shot.target.kind),
                    shot.target.kind.defend_line(shot.attacker.kind)
                );
            } else {
                tracing::trace!(
                    "{} {:?} missed {:?} (rolled {})",
                    attacker.kind,
                    attacker.id,
                    shot.target.id,
                    shot.roll
                );
            }
            shots.push(shot);
        }

        AttackReport {
            attacker: self.name.clone(),
            defender: target.name.clone(),
            shots,
        }
    }
}
