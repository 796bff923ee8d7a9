//! Game configuration, loadable from TOML.
//!
//! Every field has a default from `constants`, so a config file only needs
//! the values it overrides.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{DisplaySurface, WarheadType};
use crate::error::{Result, WoprError};

/// Top-level configuration for one GTW session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. Same seed = same strike rolls.
    pub seed: u64,
    /// Warhead fitted to the player's opening strike.
    pub warhead: WarheadType,
    pub escalation: EscalationConfig,
    pub display: DisplayConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1983,
            warhead: WarheadType::Standard,
            escalation: EscalationConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Pacing of the escalation sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationConfig {
    /// Missiles per wave, in order. Wave 0 is the player's opening strike,
    /// whose size is replaced by the number of selected targets.
    pub wave_sizes: Vec<u32>,
    /// Frame delay of wave 0 in milliseconds.
    pub base_delay_ms: u64,
    /// Per-wave multiplicative speed factor, in (0, 1] to accelerate.
    pub speed_decay: f64,
    /// Progress step per frame in wave 0.
    pub base_step: f64,
    pub max_step: f64,
    /// Safety valve: frames after which in-flight missiles are forced down.
    pub max_frames_per_wave: u32,
    pub explosion_frames: u32,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            wave_sizes: WAVE_SIZES.to_vec(),
            base_delay_ms: BASE_FRAME_DELAY_MS,
            speed_decay: SPEED_DECAY,
            base_step: BASE_PROGRESS_STEP,
            max_step: MAX_PROGRESS_STEP,
            max_frames_per_wave: MAX_FRAMES_PER_WAVE,
            explosion_frames: EXPLOSION_FRAMES,
        }
    }
}

impl EscalationConfig {
    /// Frame delay of wave `index`: `base_delay × speed_decay^index`.
    pub fn delay_for_wave(&self, index: usize) -> Duration {
        let factor = self.speed_decay.powi(index as i32);
        Duration::from_secs_f64(self.base_delay_ms as f64 * factor / 1000.0)
    }

    /// Progress step of wave `index`: `min(max_step, base_step / speed_decay^index)`.
    pub fn step_for_wave(&self, index: usize) -> f64 {
        let factor = self.speed_decay.powi(index as i32);
        (self.base_step / factor).min(self.max_step)
    }
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub surface: DisplaySurface,
    /// Arc peak height as a fraction of flight distance.
    pub arc_height: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            surface: DisplaySurface::Plain,
            arc_height: DEFAULT_ARC_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Reject values that would stall or invert the escalation.
    pub fn validate(&self) -> Result<()> {
        let esc = &self.escalation;
        if esc.wave_sizes.is_empty() {
            return Err(WoprError::InvalidConfig("wave_sizes is empty".into()));
        }
        if esc.wave_sizes.contains(&0) {
            return Err(WoprError::InvalidConfig("wave_sizes contains 0".into()));
        }
        if !(esc.speed_decay > 0.0 && esc.speed_decay <= 1.0) {
            return Err(WoprError::InvalidConfig(format!(
                "speed_decay must be in (0, 1], got {}",
                esc.speed_decay
            )));
        }
        if !(esc.base_step > 0.0 && esc.max_step > 0.0) {
            return Err(WoprError::InvalidConfig(
                "base_step and max_step must be positive".into(),
            ));
        }
        if esc.max_frames_per_wave == 0 || esc.explosion_frames == 0 {
            return Err(WoprError::InvalidConfig(
                "max_frames_per_wave and explosion_frames must be non-zero".into(),
            ));
        }
        if !(0.0..=2.0).contains(&self.display.arc_height) {
            return Err(WoprError::InvalidConfig(format!(
                "arc_height out of range: {}",
                self.display.arc_height
            )));
        }
        Ok(())
    }

    /// Zero every frame delay. Used for `--fast` and tests.
    pub fn without_delays(mut self) -> Self {
        self.escalation.base_delay_ms = 0;
        self
    }
}
