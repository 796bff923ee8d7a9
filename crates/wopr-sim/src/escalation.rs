//! War escalation animator.
//!
//! Owns a hecs world of missiles and explosions, the world map they are drawn
//! on, and the running casualty tally. Each `tick` runs the systems in a
//! fixed order:
//!
//! 1. age explosions
//! 2. retire finished explosions to permanent impact sites
//! 3. advance missiles
//! 4. detonate missiles that impacted this frame

use std::collections::HashSet;
use std::sync::Arc;

use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use wopr_core::components::{Explosion, Missile};
use wopr_core::config::{DisplayConfig, GameConfig};
use wopr_core::constants::EXPLOSION_FRAMES;
use wopr_core::enums::Side;
use wopr_core::types::{CasualtyTally, Point};
use wopr_map::WorldMap;

use crate::strike::StrikeSimulator;
use crate::systems;
use crate::targets::{Target, TargetDatabase};

/// Cumulative state of one exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarEscalationState {
    pub casualties: CasualtyTally,
    /// Targets already struck, as (owning side, name).
    pub targeted: HashSet<(Side, String)>,
    pub missiles_launched: u32,
}

impl WarEscalationState {
    pub fn is_targeted(&self, target: &Target) -> bool {
        self.targeted
            .contains(&(target.side, target.name.clone()))
    }

    fn record(&mut self, target: &Target, casualties: u64) {
        self.targeted.insert((target.side, target.name.clone()));
        self.casualties.add(target.side, casualties);
        self.missiles_launched = self.missiles_launched.saturating_add(1);
    }
}

/// What happened during one animation frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Targets whose missile detonated this frame.
    pub detonations: Vec<String>,
    pub in_flight: usize,
    pub active_explosions: usize,
}

impl TickReport {
    /// No missile in the air and no explosion still animating.
    pub fn wave_complete(&self) -> bool {
        self.in_flight == 0 && self.active_explosions == 0
    }
}

pub struct EscalationAnimator {
    db: Arc<TargetDatabase>,
    map: WorldMap,
    world: World,
    impact_sites: Vec<Point>,
    state: WarEscalationState,
    arc_height: f64,
    explosion_frames: u32,
    impacted: Vec<Entity>,
    despawn_buffer: Vec<Entity>,
}

impl EscalationAnimator {
    /// Animator with every catalog target registered on a fresh map.
    pub fn new(db: Arc<TargetDatabase>, display: &DisplayConfig, explosion_frames: u32) -> Self {
        let mut map = WorldMap::new(display.surface);
        for target in db.all() {
            map.register(&target.name, target.latitude, target.longitude);
        }
        Self {
            db,
            map,
            world: World::new(),
            impact_sites: Vec::new(),
            state: WarEscalationState::default(),
            arc_height: display.arc_height,
            explosion_frames,
            impacted: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    pub fn from_config(db: Arc<TargetDatabase>, config: &GameConfig) -> Self {
        Self::new(db, &config.display, config.escalation.explosion_frames)
    }

    /// Default display and explosion length.
    pub fn with_defaults(db: Arc<TargetDatabase>) -> Self {
        Self::new(db, &DisplayConfig::default(), EXPLOSION_FRAMES)
    }

    /// Launch `count` missiles from `side` at enemy targets not yet struck.
    ///
    /// Targets are taken in catalog order. Once every enemy target has been
    /// struck the pool resets to the full enemy list. Each target's estimated
    /// casualties are charged to the defender. Returns `(name, casualties)`.
    pub fn launch_wave(&mut self, side: Side, count: usize) -> Vec<(String, u64)> {
        let db = Arc::clone(&self.db);
        let enemy_targets = db.for_side(side.enemy());

        let mut pool: Vec<&Target> = enemy_targets
            .iter()
            .copied()
            .filter(|t| !self.state.is_targeted(t))
            .collect();
        if pool.is_empty() {
            tracing::debug!(side = %side, "target pool exhausted, resetting");
            pool = enemy_targets;
        }

        let mut results = Vec::with_capacity(count.min(pool.len()));
        for target in pool.into_iter().take(count) {
            let casualties = StrikeSimulator::casualty_estimate(&[target]);
            self.spawn_missile(side, target);
            self.state.record(target, casualties);
            results.push((target.name.clone(), casualties));
        }
        tracing::info!(side = %side, missiles = results.len(), "wave launched");
        results
    }

    /// Launch one missile per given target with externally resolved casualties.
    pub fn launch_strikes(&mut self, side: Side, strikes: &[(&Target, u64)]) -> usize {
        for &(target, casualties) in strikes {
            self.spawn_missile(side, target);
            self.state.record(target, casualties);
        }
        strikes.len()
    }

    fn spawn_missile(&mut self, side: Side, target: &Target) {
        let origin = self.map.launch_anchor(side);
        let destination = self.map.location(&target.name).unwrap_or_else(|| {
            self.map
                .projection()
                .to_pixel(target.latitude, target.longitude)
        });
        let missile =
            Missile::with_arc_height(origin, destination, side, &target.name, self.arc_height);
        self.world.spawn((missile,));
    }

    /// Advance the animation by one frame.
    pub fn tick(&mut self, step: f64) -> TickReport {
        systems::detonation::age(&mut self.world);
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.impact_sites,
        );
        systems::flight::run(&mut self.world, step, &mut self.impacted);
        let detonations =
            systems::detonation::run(&mut self.world, &self.impacted, self.explosion_frames);
        self.report(detonations)
    }

    /// Bring every missile still in flight down immediately.
    pub fn force_impact(&mut self) -> TickReport {
        systems::flight::force_impact(&mut self.world, &mut self.impacted);
        let detonations =
            systems::detonation::run(&mut self.world, &self.impacted, self.explosion_frames);
        if !detonations.is_empty() {
            tracing::warn!(forced = detonations.len(), "frame limit reached, forcing impacts");
        }
        self.report(detonations)
    }

    fn report(&self, detonations: Vec<String>) -> TickReport {
        TickReport {
            detonations,
            in_flight: systems::flight::in_flight(&self.world),
            active_explosions: systems::detonation::active(&self.world),
        }
    }

    /// Current frame: all arcs, heads, explosions and impact marks.
    pub fn render(&self) -> String {
        let missiles: Vec<Missile> = self
            .world
            .query::<&Missile>()
            .iter()
            .map(|(_, m)| m.clone())
            .collect();
        let explosions: Vec<Explosion> = self
            .world
            .query::<&Explosion>()
            .iter()
            .map(|(_, e)| *e)
            .collect();
        self.map
            .render_frame(&missiles, &explosions, &self.impact_sites)
    }

    pub fn render_static(&self) -> String {
        self.map.render_static()
    }

    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn impact_sites(&self) -> &[Point] {
        &self.impact_sites
    }

    pub fn state(&self) -> &WarEscalationState {
        &self.state
    }

    pub fn casualties(&self) -> CasualtyTally {
        self.state.casualties
    }
}
