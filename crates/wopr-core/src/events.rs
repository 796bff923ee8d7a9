//! Events emitted by the simulation for sound and narration feedback.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical sound events fired at narrative beats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundEvent {
    /// A wave leaves its silos.
    MissileLaunch,
    /// A warhead detonates.
    Explosion,
    /// DEFCON dropped.
    DefconChange,
}

impl SoundEvent {
    /// Event name handed to the sound backend.
    pub fn name(self) -> &'static str {
        match self {
            SoundEvent::MissileLaunch => "missile_launch",
            SoundEvent::Explosion => "explosion",
            SoundEvent::DefconChange => "defcon_change",
        }
    }
}

impl fmt::Display for SoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
