//! End-to-end GTW sessions driven by scripted input.

use std::cell::RefCell;
use std::rc::Rc;

use wopr_app::io::{RecordingSink, ScriptedInput, SoundTrigger, SpeechTrigger};
use wopr_app::GtwController;
use wopr_core::config::GameConfig;
use wopr_core::enums::{DisplaySurface, GameOutcome, GtwPhase, Side};
use wopr_core::events::SoundEvent;

#[derive(Clone, Default)]
struct SoundLog(Rc<RefCell<Vec<SoundEvent>>>);

impl SoundTrigger for SoundLog {
    fn play(&self, event: SoundEvent) {
        self.0.borrow_mut().push(event);
    }
}

impl SoundLog {
    fn count(&self, event: SoundEvent) -> usize {
        self.0.borrow().iter().filter(|&&e| e == event).count()
    }
}

#[derive(Clone, Default)]
struct SpeechLog(Rc<RefCell<Vec<String>>>);

impl SpeechTrigger for SpeechLog {
    fn speak(&self, text: &str) {
        self.0.borrow_mut().push(text.to_string());
    }
}

fn controller(lines: &[&str]) -> GtwController<RecordingSink, ScriptedInput> {
    GtwController::new(
        GameConfig::default().without_delays(),
        RecordingSink::default(),
        ScriptedInput::new(lines.iter().copied()),
    )
}

// ---- Scenario A: select side, target, status ----

#[test]
fn test_target_then_status() {
    for side_token in ["US", "1"] {
        let mut c = controller(&[side_token, "TARGET MOSCOW", "STATUS", "QUIT"]);
        c.play();
        let text = c.output().text();
        assert!(text.contains("TARGET ACQUIRED: MOSCOW"));
        assert!(text.contains("TARGETS SELECTED: 1"));
        assert!(text.contains("  - MOSCOW (CITY)"));
        assert_eq!(c.player(), Some(Side::Us));
        assert_eq!(c.selected().len(), 1);
    }
}

// ---- Scenario B: launch with nothing selected ----

#[test]
fn test_launch_without_targets_is_refused() {
    let sounds = SoundLog::default();
    let mut c = controller(&["2", "LAUNCH", "QUIT"]).with_sound(sounds.clone());
    let result = c.play();
    let text = c.output().text();
    assert!(text.contains("SELECT TARGETS FIRST"));
    assert!(!text.contains("CONFIRM LAUNCH"));
    assert!(!text.contains("LAUNCH SEQUENCE INITIATED"));
    assert_eq!(c.output().clears(), 0, "no animation frames");
    assert_eq!(sounds.count(SoundEvent::MissileLaunch), 0);
    assert_eq!(result.outcome, GameOutcome::Quit);
}

// ---- Scenario C: full exchange ----

#[test]
fn test_confirmed_launch_runs_full_exchange() {
    let sounds = SoundLog::default();
    let speech = SpeechLog::default();
    let mut c = controller(&["US", "TARGET MOSCOW", "LAUNCH", "Y"])
        .with_sound(sounds.clone())
        .with_speech(speech.clone());
    let result = c.play();

    assert_eq!(result.outcome, GameOutcome::None);
    assert!(result.trigger_follow_on);
    assert!(result.casualties.us > 0);
    assert!(result.casualties.ussr > 0);
    // Waves of 1..=6 missiles, the player's plan first.
    assert_eq!(result.waves, 6);
    assert_eq!(result.missiles, 21);
    assert_eq!(c.phase(), GtwPhase::Result);

    let text = c.output().text();
    assert!(text.contains("US LAUNCHES FIRST STRIKE"));
    assert!(text.contains("MOSCOW: DESTROYED") || text.contains("MOSCOW: NEAR MISS"));
    assert!(text.contains("USSR RETALIATION: 2 MISSILES"));
    assert!(text.contains("US COUNTER-STRIKE: 3 MISSILES"));
    assert!(text.contains("USSR RETALIATION: 6 MISSILES"));
    assert!(!text.contains("RETALIATION: 1 MISSILES"));
    let first = text.find("FIRST STRIKE").unwrap();
    assert!(first < text.find("RETALIATION").unwrap());
    assert!(text.contains("WINNER: NONE"));
    assert!(c.output().clears() > 0);

    // Every missile detonates exactly once, forced or not.
    assert_eq!(sounds.count(SoundEvent::Explosion), 21);
    assert_eq!(sounds.count(SoundEvent::MissileLaunch), 6);
    assert_eq!(sounds.count(SoundEvent::DefconChange), 1);
    assert_eq!(speech.0.borrow().as_slice(), ["Winner: None"]);
}

#[test]
fn test_yes_confirms_and_other_answers_cancel() {
    let mut c = controller(&["USSR", "TARGET NEW YORK", "LAUNCH", "maybe", "LAUNCH", "yes"]);
    let result = c.play();
    assert!(c.output().text().contains("LAUNCH CANCELLED"));
    assert!(result.trigger_follow_on);
}

#[test]
fn test_same_seed_same_exchange() {
    let script = ["1", "TARGET MOSCOW", "TARGET PLESETSK", "LAUNCH", "Y"];
    let a = controller(&script).play();
    let b = controller(&script).play();
    assert_eq!(a, b);
}

#[test]
fn test_safety_valve_bounds_slow_waves() {
    let mut config = GameConfig::default().without_delays();
    config.escalation.base_step = 0.001;
    config.escalation.max_step = 0.001;
    config.escalation.max_frames_per_wave = 5;
    let mut c = GtwController::new(
        config,
        RecordingSink::default(),
        ScriptedInput::new(["US", "TARGET KIEV", "LAUNCH", "Y"]),
    );
    let result = c.play();
    assert_eq!(result.missiles, 21);
    // Six waves, each capped at max frames plus the explosion.
    assert!(c.output().clears() <= 6 * (5 + 6 + 2));
}

#[test]
fn test_opening_wave_carries_whole_plan() {
    let mut c = controller(&["USSR", "TARGET NEW YORK", "TARGET CHICAGO", "TARGET DETROIT", "LAUNCH", "Y"]);
    let result = c.play();
    assert_eq!(result.waves, 6);
    assert_eq!(result.missiles, 3 + 20);
    let text = c.output().text();
    assert!(text.contains("USSR LAUNCHES FIRST STRIKE"));
    assert!(text.contains("US RETALIATION: 2 MISSILES"));
    assert!(text.contains("USSR COUNTER-STRIKE: 3 MISSILES"));
}

#[test]
fn test_list_either_side() {
    let mut c = controller(&["USSR", "LIST US", "LIST USSR MILITARY", "QUIT"]);
    c.play();
    let text = c.output().text();
    assert!(!text.contains("COMMAND NOT RECOGNIZED"));
    assert!(text.contains("UNITED STATES TARGETS:"));
    assert!(text.contains("NEW YORK (POP: "));
    assert!(text.contains("SOVIET UNION TARGETS:"));
    assert!(text.contains("PLESETSK"));
    assert!(text.contains("TOTAL TARGETS AVAILABLE: 20"));
    assert!(text.contains("TOTAL TARGETS AVAILABLE: 5"));
}

// ---- Scenario D: quit at side selection ----

#[test]
fn test_quit_at_side_selection() {
    let mut c = controller(&["QUIT"]);
    let result = c.play();
    assert_eq!(result.outcome, GameOutcome::Quit);
    assert!(!result.trigger_follow_on);
    assert_eq!(result.casualties.total(), 0);
    assert_eq!(result.missiles, 0);
    assert!(c.selected().is_empty());
    assert_eq!(c.player(), None);
}

#[test]
fn test_end_of_input_is_quit() {
    let mut c = controller(&["US", "TARGET MOSCOW"]);
    let result = c.play();
    assert_eq!(result.outcome, GameOutcome::Quit);
    assert!(!result.trigger_follow_on);
    assert_eq!(c.phase(), GtwPhase::Result);
}

#[test]
fn test_unrecognized_command_stays_in_loop() {
    let mut c = controller(&["US", "GREETINGS PROFESSOR FALKEN", "TARGET MOSCOW", "QUIT"]);
    c.play();
    assert!(c.output().text().contains("COMMAND NOT RECOGNIZED"));
    assert_eq!(c.selected().len(), 1);
}

#[test]
fn test_markup_surface_escapes_brackets() {
    let mut config = GameConfig::default().without_delays();
    config.display.surface = DisplaySurface::Markup;
    let mut c = GtwController::new(
        config,
        RecordingSink::default(),
        ScriptedInput::new(["US", "HELP", "MAP", "QUIT"]),
    );
    c.play();
    let text = c.output().text();
    assert!(text.contains("\\[CITIES|MILITARY|INDUSTRIAL\\]"));
    assert!(!text.contains(" [CITIES"));
}
