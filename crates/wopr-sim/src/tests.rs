//! Tests for the target database, strike model, schedule and escalation animator.

use std::sync::Arc;

use proptest::prelude::*;

use wopr_core::config::EscalationConfig;
use wopr_core::constants::*;
use wopr_core::enums::*;
use wopr_core::error::WoprError;

use crate::escalation::EscalationAnimator;
use crate::schedule::EscalationSchedule;
use crate::strike::StrikeSimulator;
use crate::targets::{Target, TargetDatabase};

fn db() -> Arc<TargetDatabase> {
    Arc::new(TargetDatabase::builtin())
}

// ---- Target database ----

#[test]
fn test_builtin_catalog_is_valid() {
    let db = TargetDatabase::builtin();
    assert!(TargetDatabase::validate(db.all()).is_ok());
    for side in Side::ALL {
        assert!(db.by_kind(TargetKind::City, Some(side)).len() >= 10);
    }
}

#[test]
fn test_city_populations_positive() {
    let db = TargetDatabase::builtin();
    for city in db.by_kind(TargetKind::City, None) {
        assert!(city.population > 0, "{} has no population", city.name);
    }
    assert!(db.all().iter().all(|t| t.strategic_value >= 1));
}

#[test]
fn test_side_and_kind_filters() {
    let db = TargetDatabase::builtin();
    for side in Side::ALL {
        assert!(db.for_side(side).iter().all(|t| t.side == side));
        for kind in TargetKind::ALL {
            let filtered = db.by_kind(kind, Some(side));
            assert!(!filtered.is_empty());
            assert!(filtered.iter().all(|t| t.kind == kind && t.side == side));
        }
    }
    let total: usize = Side::ALL.iter().map(|&s| db.for_side(s).len()).sum();
    assert_eq!(total, db.len());
}

#[test]
fn test_side_tokens_filter() {
    let db = TargetDatabase::builtin();
    assert_eq!(db.for_side_named("soviet union"), db.for_side(Side::Ussr));
    assert_eq!(db.for_side_named("us"), db.for_side(Side::Us));
    assert_eq!(db.for_side_named("2"), db.for_side(Side::Ussr));
    assert!(db.for_side_named("narnia").is_empty());
}

#[test]
fn test_find_is_case_insensitive_and_partial() {
    let db = TargetDatabase::builtin();
    assert_eq!(db.find("moscow", None).unwrap().name, "MOSCOW");
    assert_eq!(db.find("Mos", Some(Side::Ussr)).unwrap().name, "MOSCOW");
    assert_eq!(db.find("  new york ", Some(Side::Us)).unwrap().name, "NEW YORK");
    assert!(db.find("MOSCOW", Some(Side::Us)).is_none());
    assert!(db.find("ATLANTIS", None).is_none());
    assert!(db.find("", None).is_none());
}

#[test]
fn test_find_first_match_wins() {
    let db = TargetDatabase::builtin();
    // Both sides have a missile field; the US one is earlier in the catalog.
    let hit = db.find("MISSILE FIELD", None).unwrap();
    assert_eq!(hit.name, "MINOT MISSILE FIELD");
    let hit = db.find("MISSILE FIELD", Some(Side::Ussr)).unwrap();
    assert_eq!(hit.name, "KOZELSK MISSILE FIELD");
}

proptest! {
    #[test]
    fn prop_every_target_found_by_own_name(idx in 0usize..40) {
        let db = TargetDatabase::builtin();
        let target = &db.all()[idx % db.len()];
        let by_side = db.find(&target.name, Some(target.side)).unwrap();
        prop_assert_eq!(by_side, target);
        let lower = target.name.to_lowercase();
        let any_side = db.find(&lower, None).unwrap();
        prop_assert_eq!(any_side, target);
    }
}

#[test]
fn test_from_targets_validation() {
    let moscow = Target::new("Moscow", Side::Ussr, TargetKind::City, 55.75, 37.62, 8_400_000, 10);
    let nyc = Target::new("New York", Side::Us, TargetKind::City, 40.71, -74.0, 9_100_000, 10);

    assert!(matches!(
        TargetDatabase::from_targets(Vec::new()),
        Err(WoprError::EmptyCatalog)
    ));
    assert!(matches!(
        TargetDatabase::from_targets(vec![nyc.clone()]),
        Err(WoprError::MissingCity(Side::Ussr))
    ));

    let mut ghost = moscow.clone();
    ghost.population = 0;
    assert!(matches!(
        TargetDatabase::from_targets(vec![nyc.clone(), ghost]),
        Err(WoprError::InvalidPopulation(_))
    ));

    let mut worthless = moscow.clone();
    worthless.strategic_value = 0;
    assert!(matches!(
        TargetDatabase::from_targets(vec![nyc.clone(), worthless]),
        Err(WoprError::InvalidTarget(_))
    ));

    let db = TargetDatabase::from_targets(vec![nyc, moscow]).unwrap();
    assert_eq!(db.len(), 2);
    assert_eq!(db.all()[1].name, "MOSCOW");
}

// ---- Strike simulator ----

#[test]
fn test_strike_city_success_and_near_miss_bounds() {
    let db = TargetDatabase::builtin();
    let moscow = db.find("MOSCOW", None).unwrap();
    let mut sim = StrikeSimulator::new(7);
    for _ in 0..200 {
        let r = sim.calculate_strike(moscow, WarheadType::Standard);
        assert_eq!(r.destroyed, r.success);
        if r.success {
            // 1 Mt: 35% direct + 15% fallout.
            assert!(r.casualties > moscow.population * 49 / 100);
            assert!(r.casualties <= moscow.population / 2);
        } else {
            assert!((NEAR_MISS_CASUALTIES_MIN..=NEAR_MISS_CASUALTIES_MAX).contains(&r.casualties));
        }
        assert!((r.fallout_radius - 32.0).abs() < 1e-9);
    }
    assert_eq!(sim.strike_results().len(), 200);
}

#[test]
fn test_strike_city_fractions_are_capped() {
    let db = TargetDatabase::builtin();
    let nyc = db.find("NEW YORK", None).unwrap();
    let mut sim = StrikeSimulator::new(3);
    let successes: Vec<_> = (0..50)
        .map(|_| sim.calculate_strike(nyc, WarheadType::Strategic))
        .filter(|r| r.success)
        .collect();
    assert!(!successes.is_empty());
    for r in successes {
        // Caps: 60% direct + 30% fallout.
        assert!(r.casualties <= nyc.population * 90 / 100);
        assert!(r.casualties >= nyc.population * 89 / 100);
        assert!((r.fallout_radius - 160.0).abs() < 1e-9);
    }
}

#[test]
fn test_strike_non_city_bounds_and_both_outcomes() {
    let db = TargetDatabase::builtin();
    let base = db.find("PLESETSK", None).unwrap();
    assert_eq!(base.kind, TargetKind::Military);
    let mut sim = StrikeSimulator::new(99);
    let results: Vec<_> = (0..300)
        .map(|_| sim.calculate_strike(base, WarheadType::Tactical))
        .collect();
    assert!(results.iter().any(|r| r.success));
    assert!(results.iter().any(|r| !r.success));
    for r in &results {
        if r.success {
            assert!((NON_CITY_CASUALTIES_MIN..=NON_CITY_CASUALTIES_MAX).contains(&r.casualties));
        } else {
            assert!((NEAR_MISS_CASUALTIES_MIN..=NEAR_MISS_CASUALTIES_MAX).contains(&r.casualties));
        }
    }
}

#[test]
fn test_strike_history_copy_and_reset() {
    let db = TargetDatabase::builtin();
    let kiev = db.find("KIEV", None).unwrap();
    let mut sim = StrikeSimulator::new(1);
    sim.calculate_strike(kiev, WarheadType::Mirv);
    let mut copy = sim.strike_results();
    copy.clear();
    assert_eq!(sim.strike_results().len(), 1);
    sim.reset();
    assert!(sim.strike_results().is_empty());
}

#[test]
fn test_strike_determinism_same_seed() {
    let db = TargetDatabase::builtin();
    let targets = db.for_side(Side::Us);
    let mut a = StrikeSimulator::new(12345);
    let mut b = StrikeSimulator::new(12345);
    for t in &targets {
        assert_eq!(
            a.calculate_strike(t, WarheadType::Standard),
            b.calculate_strike(t, WarheadType::Standard)
        );
    }
}

#[test]
fn test_casualty_estimate() {
    let db = TargetDatabase::builtin();
    let moscow = db.find("MOSCOW", None).unwrap();
    let norad = db.find("CHEYENNE", None).unwrap();
    let est = StrikeSimulator::casualty_estimate(&[moscow]);
    assert!(est.abs_diff(3_360_000) <= 1);
    assert_eq!(StrikeSimulator::casualty_estimate(&[norad]), ESTIMATE_NON_CITY);
    assert_eq!(StrikeSimulator::casualty_estimate(&[]), 0);
    for t in db.all() {
        assert!(StrikeSimulator::casualty_estimate(&[t]) > 0);
    }
}

#[test]
fn test_casualty_estimate_tiny_city_is_positive() {
    for population in [1, 2] {
        let hamlet = Target::new("Hamlet", Side::Us, TargetKind::City, 40.0, -100.0, population, 1);
        let town = Target::new("Town", Side::Ussr, TargetKind::City, 55.0, 40.0, 10, 1);
        let db = TargetDatabase::from_targets(vec![hamlet, town]).unwrap();
        let hamlet = &db.all()[0];
        assert_eq!(StrikeSimulator::casualty_estimate(&[hamlet]), 1);
    }
}

#[test]
fn test_full_exchange_tallies_each_side() {
    let db = TargetDatabase::builtin();
    let us = db.for_side(Side::Us);
    let ussr = db.for_side(Side::Ussr);
    let mut sim = StrikeSimulator::new(2024);
    let outcome = sim.simulate_full_exchange(&us, &ussr, WarheadType::Standard);

    assert_eq!(outcome.winner, GameOutcome::None);
    let history = sim.strike_results();
    assert_eq!(history.len(), us.len() + ussr.len());
    let (first, second) = history.split_at(ussr.len());
    assert!(first.iter().all(|r| r.target.side == Side::Ussr), "attacker strikes first");
    assert!(second.iter().all(|r| r.target.side == Side::Us));

    let cities = |rs: &[crate::StrikeResult]| {
        rs.iter().filter(|r| r.destroyed && r.target.kind == TargetKind::City).count() as u32
    };
    let military = |rs: &[crate::StrikeResult]| {
        rs.iter().filter(|r| r.destroyed && r.target.kind == TargetKind::Military).count() as u32
    };
    assert_eq!(outcome.defender.cities_destroyed, cities(first));
    assert_eq!(outcome.attacker.cities_destroyed, cities(second));
    assert_eq!(outcome.defender.military_destroyed, military(first));
    assert_eq!(outcome.attacker.military_destroyed, military(second));
    assert_eq!(
        outcome.defender.casualties,
        first.iter().map(|r| r.casualties).sum::<u64>()
    );
    assert!(outcome.attacker.casualties > 0);

    let mut again = StrikeSimulator::new(2024);
    assert_eq!(again.simulate_full_exchange(&us, &ussr, WarheadType::Standard), outcome);
}

// ---- Schedule ----

#[test]
fn test_schedule_alternates_and_accelerates() {
    let schedule = EscalationSchedule::build(&EscalationConfig::default(), Side::Ussr);
    assert_eq!(schedule.len(), WAVE_SIZES.len());
    assert_eq!(schedule.total_missiles(), 21);
    for (i, wave) in schedule.iter().enumerate() {
        let expected = if i % 2 == 0 { Side::Ussr } else { Side::Us };
        assert_eq!(wave.side, expected);
        assert_eq!(wave.missiles, WAVE_SIZES[i]);
        assert!(wave.step <= MAX_PROGRESS_STEP);
    }
    for pair in schedule.waves.windows(2) {
        assert!(pair[1].delay < pair[0].delay);
        assert!(pair[1].step >= pair[0].step);
    }
}

#[test]
fn test_schedule_opening_wave_follows_player_plan() {
    let config = EscalationConfig::default();
    let schedule = EscalationSchedule::build(&config, Side::Us).with_opening_size(3);
    assert_eq!(schedule.waves[0].side, Side::Us);
    assert_eq!(schedule.waves[0].missiles, 3);
    assert_eq!(schedule.waves[1].side, Side::Ussr);
    assert_eq!(schedule.waves[1].missiles, 2);
    assert_eq!(schedule.total_missiles(), 3 + 20);

    // Every wave, the opening one included, runs at its own index's pace.
    for (i, wave) in schedule.iter().enumerate() {
        assert_eq!(wave.index, i);
        assert_eq!(wave.delay, config.delay_for_wave(i));
        assert_eq!(wave.step, config.step_for_wave(i));
    }
    assert!(schedule.waves[1].delay < schedule.waves[0].delay);

    let empty = EscalationSchedule::default().with_opening_size(3);
    assert!(empty.is_empty());
}

// ---- Escalation animator ----

#[test]
fn test_launch_wave_picks_in_catalog_order() {
    let db = db();
    let mut animator = EscalationAnimator::with_defaults(Arc::clone(&db));
    let hits = animator.launch_wave(Side::Us, 3);
    let names: Vec<&str> = hits.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["MOSCOW", "LENINGRAD", "KIEV"]);

    let tally = animator.casualties();
    assert_eq!(tally.us, 0);
    assert_eq!(tally.ussr, hits.iter().map(|(_, c)| c).sum::<u64>());
    assert_eq!(animator.world().len(), 3);
}

#[test]
fn test_launch_wave_never_repeats_until_exhausted() {
    let db = db();
    let ussr_count = db.for_side(Side::Ussr).len();
    let mut animator = EscalationAnimator::with_defaults(Arc::clone(&db));

    let mut seen = std::collections::HashSet::new();
    let mut launched = 0;
    while launched < ussr_count {
        for (name, _) in animator.launch_wave(Side::Us, 4) {
            assert!(seen.insert(name), "target repeated before exhaustion");
            launched += 1;
        }
    }
    assert_eq!(seen.len(), ussr_count);

    // Pool exhausted: resets to the full list, still no repeats within a call.
    let again = animator.launch_wave(Side::Us, ussr_count + 10);
    assert_eq!(again.len(), ussr_count);
    let unique: std::collections::HashSet<_> = again.iter().map(|(n, _)| n).collect();
    assert_eq!(unique.len(), ussr_count);
    assert_eq!(again[0].0, "MOSCOW");
}

#[test]
fn test_launch_strikes_charges_defender() {
    let db = db();
    let mut animator = EscalationAnimator::with_defaults(Arc::clone(&db));
    let nyc = db.find("NEW YORK", None).unwrap();
    let launched = animator.launch_strikes(Side::Ussr, &[(nyc, 1_234)]);
    assert_eq!(launched, 1);
    assert_eq!(animator.casualties().us, 1_234);
    assert!(animator.state().is_targeted(nyc));

    // Already struck, so the next wave starts at the second US target.
    let hits = animator.launch_wave(Side::Ussr, 1);
    assert_eq!(hits[0].0, "LOS ANGELES");
}

#[test]
fn test_wave_runs_to_completion() {
    let mut animator = EscalationAnimator::with_defaults(db());
    animator.launch_wave(Side::Ussr, 2);

    let mut detonations = 0;
    let mut frames = 0;
    loop {
        let report = animator.tick(0.25);
        detonations += report.detonations.len();
        frames += 1;
        if report.wave_complete() {
            break;
        }
        assert!(frames < 100, "wave never completed");
    }
    assert_eq!(detonations, 2);
    assert_eq!(animator.impact_sites().len(), 2);
    assert_eq!(animator.world().len(), 0);
    // Four frames of flight plus the explosion.
    assert_eq!(frames, 4 + EXPLOSION_FRAMES as usize);
}

#[test]
fn test_frames_show_heads_then_impacts() {
    let mut animator = EscalationAnimator::with_defaults(db());
    animator.launch_wave(Side::Us, 1);
    animator.tick(0.1);
    let frame = animator.render();
    // One head plus the legend entry.
    assert_eq!(frame.matches('@').count(), 2);

    while !animator.tick(0.25).wave_complete() {}
    let frame = animator.render();
    assert_eq!(frame.matches('@').count(), 1);
    assert!(frame.matches('X').count() >= 2, "impact mark plus legend");
}

#[test]
fn test_force_impact_safety_valve() {
    let mut animator = EscalationAnimator::with_defaults(db());
    animator.launch_wave(Side::Us, 3);
    for _ in 0..3 {
        let report = animator.tick(0.001);
        assert!(report.detonations.is_empty());
        assert_eq!(report.in_flight, 3);
    }
    let forced = animator.force_impact();
    assert_eq!(forced.detonations.len(), 3);
    assert_eq!(forced.in_flight, 0);
    assert_eq!(forced.active_explosions, 3);

    // Forcing again is a no-op.
    assert!(animator.force_impact().detonations.is_empty());

    let mut frames = 0;
    while !animator.tick(0.001).wave_complete() {
        frames += 1;
        assert!(frames <= EXPLOSION_FRAMES);
    }
    assert_eq!(animator.impact_sites().len(), 3);
}

#[test]
fn test_static_render_has_no_overlay() {
    let animator = EscalationAnimator::with_defaults(db());
    let out = animator.render_static();
    assert!(out.contains("GLOBAL THERMONUCLEAR WAR"));
    assert!(!out.contains('@'));
}

#[test]
fn test_escalation_state_serializes() {
    let mut animator = EscalationAnimator::with_defaults(db());
    animator.launch_wave(Side::Ussr, 2);
    let json = serde_json::to_value(animator.state()).unwrap();
    assert_eq!(json["missiles_launched"], 2);
    assert!(json["casualties"]["us"].as_u64().unwrap() > 0);
    assert_eq!(json["targeted"].as_array().unwrap().len(), 2);
}
