//! GTW game controller.
//!
//! Drives one play-through: side selection, the target-selection command
//! loop, launch confirmation and the escalating exchange. The player's side
//! fires wave 0 at the selected targets; later waves alternate.
//! Every player mistake is answered with a message and the controller stays
//! in the same phase; only end of input or QUIT leave early.

use std::sync::Arc;
use std::time::Duration;

use wopr_core::commands::{is_affirmative, GtwCommand};
use wopr_core::config::GameConfig;
use wopr_core::constants::{DEFCON_FREE_SELECTIONS, DEFCON_MIN, DEFCON_START};
use wopr_core::enums::{GtwPhase, Side, TargetKind};
use wopr_core::events::SoundEvent;
use wopr_core::state::GameResult;
use wopr_map::base_map::TITLE;
use wopr_map::escape::escape_text;
use wopr_map::WorldMap;
use wopr_sim::{EscalationAnimator, EscalationSchedule, StrikeSimulator, Target, TargetDatabase, TickReport};

use crate::io::{InputSource, NoPacer, OutputSink, Pacer, SoundTrigger, SpeechTrigger};

const RULE: &str = "============================================================";

const HELP_TEXT: &str = "\
AVAILABLE COMMANDS:
  LIST [US|USSR] [CITIES|MILITARY|INDUSTRIAL]  SHOW TARGETS (ENEMY BY DEFAULT)
  TARGET <NAME>                                ADD A TARGET TO THE STRIKE PLAN
  STATUS                                       SHOW DEFCON AND SELECTED TARGETS
  HINT                                         ESTIMATE CASUALTIES AND SUGGEST A TARGET
  MAP                                          SHOW THE WORLD MAP
  LAUNCH                                       EXECUTE THE STRIKE
  QUIT                                         ABORT THE MISSION
";

pub struct GtwController<O: OutputSink, I: InputSource> {
    config: GameConfig,
    db: Arc<TargetDatabase>,
    map: WorldMap,
    output: O,
    input: I,
    sound: Option<Box<dyn SoundTrigger>>,
    speech: Option<Box<dyn SpeechTrigger>>,
    pacer: Box<dyn Pacer>,
    phase: GtwPhase,
    player: Option<Side>,
    selected: Vec<Target>,
    defcon: u8,
}

impl<O: OutputSink, I: InputSource> GtwController<O, I> {
    pub fn new(config: GameConfig, output: O, input: I) -> Self {
        Self::with_database(config, Arc::new(TargetDatabase::builtin()), output, input)
    }

    pub fn with_database(config: GameConfig, db: Arc<TargetDatabase>, output: O, input: I) -> Self {
        let mut map = WorldMap::new(config.display.surface);
        for target in db.all() {
            map.register(&target.name, target.latitude, target.longitude);
        }
        Self {
            config,
            db,
            map,
            output,
            input,
            sound: None,
            speech: None,
            pacer: Box::new(NoPacer),
            phase: GtwPhase::SideSelect,
            player: None,
            selected: Vec::new(),
            defcon: DEFCON_START,
        }
    }

    pub fn with_sound(mut self, sound: impl SoundTrigger + 'static) -> Self {
        self.sound = Some(Box::new(sound));
        self
    }

    pub fn with_speech(mut self, speech: impl SpeechTrigger + 'static) -> Self {
        self.speech = Some(Box::new(speech));
        self
    }

    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    pub fn phase(&self) -> GtwPhase {
        self.phase
    }

    pub fn player(&self) -> Option<Side> {
        self.player
    }

    pub fn defcon(&self) -> u8 {
        self.defcon
    }

    pub fn selected(&self) -> &[Target] {
        &self.selected
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Play one session to completion.
    pub fn play(&mut self) -> GameResult {
        self.emit(&format!("\n{RULE}\n{:^60}\n{RULE}\n", TITLE));
        self.emit(HELP_TEXT);

        let Some(side) = self.select_side() else {
            return self.finish_quit();
        };
        self.player = Some(side);
        self.phase = GtwPhase::CommandLoop;
        tracing::info!(side = %side, "side selected");

        self.emit(&format!(
            "\nYOU ARE: {}\nENEMY: {}\n\n",
            side.display_name(),
            side.enemy().display_name()
        ));
        let map = self.map.render_static();
        self.output.emit(&map);

        self.command_loop(side)
    }

    fn select_side(&mut self) -> Option<Side> {
        self.emit("\nWHICH SIDE DO YOU WANT?\n\n    1. UNITED STATES\n    2. SOVIET UNION\n\n");
        loop {
            self.emit("SELECT (1/2): ");
            let line = self.input.read_line()?;
            if GtwCommand::parse(&line) == GtwCommand::Quit {
                return None;
            }
            match Side::parse_token(&line) {
                Some(side) => return Some(side),
                None => self.emit("INVALID SELECTION\n"),
            }
        }
    }

    fn command_loop(&mut self, side: Side) -> GameResult {
        loop {
            self.emit("\nCOMMAND: ");
            let Some(line) = self.input.read_line() else {
                tracing::info!("input closed, leaving game");
                return self.finish_quit();
            };

            match GtwCommand::parse(&line) {
                GtwCommand::List { side: listed, kind } => {
                    self.list_targets(listed.unwrap_or(side.enemy()), kind)
                }
                GtwCommand::Target { name } => self.select_target(side, &name),
                GtwCommand::Status => self.show_status(side),
                GtwCommand::Hint => self.show_hint(side),
                GtwCommand::Help => self.emit(HELP_TEXT),
                GtwCommand::Map => self.show_map(),
                GtwCommand::Launch => {
                    if self.selected.is_empty() {
                        self.emit("SELECT TARGETS FIRST\n");
                        continue;
                    }
                    self.emit("\nCONFIRM LAUNCH? (Y/N): ");
                    let answer = self.input.read_line().unwrap_or_default();
                    if is_affirmative(&answer) {
                        return self.execute_launch(side);
                    }
                    self.emit("LAUNCH CANCELLED\n");
                }
                GtwCommand::Quit => {
                    self.emit("MISSION ABORTED\n");
                    return self.finish_quit();
                }
                GtwCommand::Empty => {}
                GtwCommand::Unrecognized { input } => {
                    tracing::debug!(input = %input, "unrecognized command");
                    self.emit("COMMAND NOT RECOGNIZED\n(Type HELP for commands or HINT for suggestions)\n");
                }
            }
        }
    }

    fn finish_quit(&mut self) -> GameResult {
        self.phase = GtwPhase::Result;
        tracing::info!("session ended without launch");
        GameResult::quit()
    }

    // ---- command loop ----

    fn list_targets(&mut self, listed: Side, kind: Option<TargetKind>) {
        let mut text = format!("\n{} TARGETS:\n{}\n", listed.display_name(), "-".repeat(40));
        let mut shown = 0;
        for section in TargetKind::ALL {
            if kind.is_some_and(|k| k != section) {
                continue;
            }
            let targets = self.db.by_kind(section, Some(listed));
            if targets.is_empty() {
                continue;
            }
            text.push_str(&format!("\n{}:\n", section_title(section)));
            for target in targets {
                let mark = if self.is_selected(target) { " *" } else { "" };
                match section {
                    TargetKind::City => text.push_str(&format!(
                        "  {} (POP: {}){mark}\n",
                        target.name,
                        with_commas(target.population)
                    )),
                    _ => text.push_str(&format!("  {}{mark}\n", target.name)),
                }
                shown += 1;
            }
        }
        text.push_str(&format!("\nTOTAL TARGETS AVAILABLE: {shown}\n"));
        self.emit(&text);
    }

    fn select_target(&mut self, side: Side, name: &str) {
        if name.is_empty() {
            self.emit("USAGE: TARGET <NAME>\n");
            return;
        }
        let Some(target) = self.db.find(name, Some(side.enemy())).cloned() else {
            self.emit(&format!("TARGET NOT FOUND: {name}\n"));
            return;
        };
        if self.is_selected(&target) {
            self.emit(&format!("TARGET ALREADY SELECTED: {}\n", target.name));
            return;
        }

        self.emit(&format!("TARGET ACQUIRED: {}\n", target.name));
        tracing::info!(target = %target.name, "target selected");
        self.selected.push(target);

        if self.selected.len() > DEFCON_FREE_SELECTIONS && self.defcon > DEFCON_MIN {
            self.defcon -= 1;
            tracing::info!(defcon = self.defcon, "DEFCON lowered");
            self.play_sound(SoundEvent::DefconChange);
            self.emit(&format!("DEFCON LEVEL NOW: {}\n", self.defcon));
        }
    }

    fn show_status(&mut self, side: Side) {
        let mut text = format!(
            "\n{RULE}\nDEFCON LEVEL: {}\nYOUR SIDE: {}\nTARGETS SELECTED: {}\n",
            self.defcon,
            side.display_name(),
            self.selected.len()
        );
        if !self.selected.is_empty() {
            text.push_str("\nSELECTED TARGETS:\n");
            for t in &self.selected {
                text.push_str(&format!("  - {} ({})\n", t.name, t.kind.label()));
            }
        }
        text.push_str(RULE);
        text.push('\n');
        self.emit(&text);
    }

    fn show_hint(&mut self, side: Side) {
        let enemy = side.enemy();
        let mut text = String::from("\n=== HINT ===\n");
        if self.selected.is_empty() {
            text.push_str("1. Type LIST to see available enemy targets\n");
            text.push_str("2. Target cities by name, for example:\n");
            for t in self.db.by_kind(TargetKind::City, Some(enemy)).into_iter().take(3) {
                text.push_str(&format!("   TARGET {}\n", t.name));
            }
            text.push_str("3. When ready, type LAUNCH to execute strike\n");
        } else {
            let plan: Vec<&Target> = self.selected.iter().collect();
            text.push_str(&format!(
                "You have {} target(s) selected.\nESTIMATED CASUALTIES: {}\n",
                self.selected.len(),
                with_commas(StrikeSimulator::casualty_estimate(&plan))
            ));
            if let Some(next) = self.suggest_target(enemy) {
                text.push_str(&format!(
                    "SUGGESTED NEXT TARGET: {} (STRATEGIC VALUE {})\n",
                    next.name, next.strategic_value
                ));
            }
            text.push_str("Type LAUNCH to execute the strike\n");
        }
        text.push_str("============\n");
        self.emit(&text);
    }

    /// Highest strategic value among unselected enemy targets; earliest wins ties.
    fn suggest_target(&self, enemy: Side) -> Option<&Target> {
        self.db
            .for_side(enemy)
            .into_iter()
            .filter(|t| !self.is_selected(t))
            .fold(None::<&Target>, |best, t| match best {
                Some(b) if b.strategic_value >= t.strategic_value => Some(b),
                _ => Some(t),
            })
    }

    fn show_map(&mut self) {
        let points: Vec<_> = self
            .selected
            .iter()
            .filter_map(|t| self.map.location(&t.name))
            .collect();
        let map = self.map.render_markers(&points);
        self.output.emit(&map);
    }

    fn is_selected(&self, target: &Target) -> bool {
        self.selected
            .iter()
            .any(|t| t.name == target.name && t.side == target.side)
    }

    // ---- launch ----

    fn execute_launch(&mut self, side: Side) -> GameResult {
        self.phase = GtwPhase::Escalation;
        let enemy = side.enemy();
        tracing::info!(side = %side, targets = self.selected.len(), "launch confirmed");

        self.emit(&format!("\n{RULE}\n{:^60}\n{RULE}\n\n", "*** LAUNCH SEQUENCE INITIATED ***"));
        if self.defcon != DEFCON_MIN {
            self.defcon = DEFCON_MIN;
            self.play_sound(SoundEvent::DefconChange);
        }
        self.emit("DEFCON 1 - MAXIMUM READINESS\n\n");

        let mut animator = EscalationAnimator::from_config(Arc::clone(&self.db), &self.config);
        let mut simulator = StrikeSimulator::new(self.config.seed);
        let schedule = EscalationSchedule::build(&self.config.escalation, side)
            .with_opening_size(self.selected.len() as u32);

        for wave in schedule.iter() {
            self.play_sound(SoundEvent::MissileLaunch);
            tracing::debug!(wave = wave.index, side = %wave.side, "wave start");

            // Wave 0 is the player's own plan, resolved with strike rolls.
            let hits = if wave.index == 0 {
                self.emit(&format!("*** {side} LAUNCHES FIRST STRIKE ***\n\n"));
                self.first_strike(&mut animator, &mut simulator, side)
            } else {
                let verb = if wave.side == side { "COUNTER-STRIKE" } else { "RETALIATION" };
                self.emit(&format!("\n*** {} {verb}: {} MISSILES ***\n\n", wave.side, wave.missiles));
                animator
                    .launch_wave(wave.side, wave.missiles as usize)
                    .into_iter()
                    .map(|(name, casualties)| {
                        let line = format!("{name}: {} casualties", with_commas(casualties));
                        (name, line)
                    })
                    .collect()
            };

            let mut targeting = String::new();
            for (name, _) in &hits {
                targeting.push_str(&format!("  TARGETING: {name}\n"));
            }
            self.emit(&targeting);

            self.animate(&mut animator, wave.step, wave.delay, wave.max_frames);

            let mut impacts = String::from("\n*** IMPACTS ***\n");
            for (_, line) in &hits {
                impacts.push_str(&format!("  {line}\n"));
            }
            self.emit(&impacts);
            tracing::debug!(wave = wave.index, "wave complete");
        }

        let casualties = animator.casualties();
        let missiles = animator.state().missiles_launched;
        let waves = schedule.len() as u32;

        self.emit(&format!(
            "\n{RULE}\n{:^60}\n{RULE}\n\n  {} CASUALTIES: {}\n  {} CASUALTIES: {}\n\n  TOTAL DEATHS: {}\n\n",
            "*** FINAL ASSESSMENT ***",
            enemy,
            with_commas(casualties[enemy]),
            side,
            with_commas(casualties[side]),
            with_commas(casualties.total()),
        ));
        self.emit(concat!(
            "+---------------------------------------+\n",
            "|                                       |\n",
            "|           WINNER: NONE                |\n",
            "|                                       |\n",
            "+---------------------------------------+\n\n",
        ));
        self.speak("Winner: None");

        self.phase = GtwPhase::Result;
        tracing::info!(
            us = casualties.us,
            ussr = casualties.ussr,
            waves,
            missiles,
            "exchange complete"
        );
        GameResult::exchange(casualties, waves, missiles)
    }

    /// Strike every selected target with dice rolls and put the missiles in
    /// the air. Returns (target, impact line) pairs for narration.
    fn first_strike(
        &self,
        animator: &mut EscalationAnimator,
        simulator: &mut StrikeSimulator,
        side: Side,
    ) -> Vec<(String, String)> {
        let results: Vec<_> = self
            .selected
            .iter()
            .map(|t| simulator.calculate_strike(t, self.config.warhead))
            .collect();
        let strikes: Vec<(&Target, u64)> = results.iter().map(|r| (&r.target, r.casualties)).collect();
        animator.launch_strikes(side, &strikes);
        results
            .iter()
            .map(|r| {
                let outcome = if r.destroyed { "DESTROYED" } else { "NEAR MISS" };
                (
                    r.target.name.clone(),
                    format!("{}: {outcome} - {} casualties", r.target.name, with_commas(r.casualties)),
                )
            })
            .collect()
    }

    /// Run one wave's frames until every missile has landed and every
    /// explosion has burned out. Missiles still flying after `max_frames`
    /// are forced down.
    fn animate(&mut self, animator: &mut EscalationAnimator, step: f64, delay: Duration, max_frames: u32) {
        let hard_cap = max_frames
            .saturating_add(self.config.escalation.explosion_frames)
            .saturating_add(1);
        let mut frames = 0u32;
        loop {
            self.emit_frame(animator);
            self.pacer.pause(delay);

            let report = animator.tick(step);
            self.play_detonations(&report);
            frames += 1;

            if report.wave_complete() {
                break;
            }
            if frames == max_frames && report.in_flight > 0 {
                let forced = animator.force_impact();
                self.play_detonations(&forced);
            }
            if frames >= hard_cap {
                tracing::warn!(frames, "wave animation cut off");
                break;
            }
        }
        self.emit_frame(animator);
    }

    fn emit_frame(&mut self, animator: &EscalationAnimator) {
        self.output.clear();
        let frame = animator.render();
        self.output.emit(&frame);
    }

    fn play_detonations(&self, report: &TickReport) {
        for _ in &report.detonations {
            self.play_sound(SoundEvent::Explosion);
        }
    }

    // ---- collaborators ----

    /// Emit message text, escaped for the display surface. Map renders are
    /// escaped by the map and go to the sink directly.
    fn emit(&mut self, text: &str) {
        let text = escape_text(self.config.display.surface, text);
        self.output.emit(&text);
    }

    fn play_sound(&self, event: SoundEvent) {
        if let Some(sound) = &self.sound {
            sound.play(event);
        }
    }

    fn speak(&self, text: &str) {
        if let Some(speech) = &self.speech {
            speech.speak(text);
        }
    }
}

fn section_title(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::City => "CITIES",
        TargetKind::Military => "MILITARY INSTALLATIONS",
        TargetKind::Industrial => "INDUSTRIAL CENTERS",
    }
}

/// 1234567 -> "1,234,567"
fn with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
