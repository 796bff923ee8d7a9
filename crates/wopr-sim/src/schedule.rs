//! Escalation wave schedule.
//!
//! Wave 0 belongs to the side that launched first; after that waves
//! alternate sides and accelerate. Each wave's frame delay shrinks by
//! `speed_decay` and its per-frame progress step grows by the inverse, up to
//! `max_step`.

use std::time::Duration;

use wopr_core::config::EscalationConfig;
use wopr_core::enums::Side;

/// A single wave.
#[derive(Debug, Clone, PartialEq)]
pub struct WavePlan {
    pub index: usize,
    /// Side launching this wave.
    pub side: Side,
    pub missiles: u32,
    /// Pause between animation frames.
    pub delay: Duration,
    /// Missile progress per frame.
    pub step: f64,
    /// Frames after which in-flight missiles are forced to impact.
    pub max_frames: u32,
}

/// The ordered list of waves for one exchange.
#[derive(Debug, Clone, Default)]
pub struct EscalationSchedule {
    pub waves: Vec<WavePlan>,
}

impl EscalationSchedule {
    /// Build the schedule, starting with `first_side` and alternating.
    pub fn build(config: &EscalationConfig, first_side: Side) -> Self {
        let waves = config
            .wave_sizes
            .iter()
            .enumerate()
            .map(|(index, &missiles)| WavePlan {
                index,
                side: if index % 2 == 0 {
                    first_side
                } else {
                    first_side.enemy()
                },
                missiles,
                delay: config.delay_for_wave(index),
                step: config.step_for_wave(index),
                max_frames: config.max_frames_per_wave,
            })
            .collect();
        Self { waves }
    }

    /// Replace the size of wave 0, e.g. with the number of targets in the
    /// player's strike plan. No-op on an empty schedule.
    pub fn with_opening_size(mut self, missiles: u32) -> Self {
        if let Some(first) = self.waves.first_mut() {
            first.missiles = missiles;
        }
        self
    }

    /// Total missiles across all waves.
    pub fn total_missiles(&self) -> u32 {
        self.waves.iter().map(|w| w.missiles).sum()
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WavePlan> {
        self.waves.iter()
    }
}
