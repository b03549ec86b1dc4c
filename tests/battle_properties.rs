//! Property tests for attack resolution and whole battles

use std::rc::Rc;

use army_clash::battle::*;
use army_clash::core::config::BattleConfig;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn army(name: &str, rifles: usize, snipers: usize, factory: &mut SoldierFactory) -> Army {
    let soldiers = std::iter::repeat(SoldierKind::Rifle)
        .take(rifles)
        .chain(std::iter::repeat(SoldierKind::Sniper).take(snipers))
        .map(|kind| factory.create(kind))
        .collect();
    Army::with_soldiers(name, soldiers)
}

proptest! {
    #[test]
    fn attack_never_samples_empty_roster(
        attack_rifles in 0usize..40,
        attack_snipers in 0usize..40,
        defend_rifles in 0usize..40,
        defend_snipers in 0usize..40,
        seed in any::<u64>(),
    ) {
        let mut factory = SoldierFactory::new();
        let attacker = army("A", attack_rifles, attack_snipers, &mut factory);
        let mut defender = army("B", defend_rifles, defend_snipers, &mut factory);
        let before = defender.size();

        let report = attacker.attack(&mut defender, &mut ChaCha8Rng::seed_from_u64(seed));

        prop_assert!(report.shots.len() <= attacker.size());
        prop_assert!(report.kill_count() <= before);
        prop_assert_eq!(defender.size(), before - report.kill_count());
        if before == 0 {
            prop_assert!(report.shots.is_empty());
        }
        if report.shots.len() < attacker.size() {
            prop_assert!(defender.is_empty());
        }
    }

    #[test]
    fn battles_only_shrink_and_end_with_one_winner(
        soldiers in 1usize..25,
        seed in any::<u64>(),
    ) {
        let config = BattleConfig {
            soldiers_per_army: soldiers,
            round_delay_ms: 0,
            ..BattleConfig::default()
        };
        let recorder = Rc::new(EventRecorder::new());
        let mut battle =
            Battle::from_config(&config, recorder.clone(), ChaCha8Rng::seed_from_u64(seed));

        let mut total = battle.sizes().iter().sum::<usize>();
        while let Some(report) = battle.run_round() {
            let now = report.sizes.iter().sum::<usize>();
            prop_assert!(now <= total);
            total = now;
        }

        let winner = battle.outcome().winner();
        prop_assert!(winner.is_some());
        prop_assert_eq!(battle.log().victories().count(), 1);
        prop_assert_eq!(
            recorder
                .events()
                .iter()
                .filter(|e| matches!(e, BattleEvent::Victory { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn replaying_a_seed_replays_the_kills(soldiers in 1usize..20, seed in any::<u64>()) {
        let config = BattleConfig {
            soldiers_per_army: soldiers,
            round_delay_ms: 0,
            ..BattleConfig::default()
        };
        let kills = |seed: u64| {
            let mut battle = Battle::from_config(
                &config,
                Rc::new(EventRecorder::new()),
                ChaCha8Rng::seed_from_u64(seed),
            );
            let mut kills = Vec::new();
            while let Some(report) = battle.run_round() {
                kills.extend(report.attack.kills().map(|s| (s.attacker.id, s.target.id)));
            }
            kills
        };

        prop_assert_eq!(kills(seed), kills(seed));
    }
}
