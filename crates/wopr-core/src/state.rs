//! Game result contract returned to the game-selection loop.

use serde::{Deserialize, Serialize};

use crate::enums::GameOutcome;
use crate::types::CasualtyTally;

/// Outcome of one GTW session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub outcome: GameOutcome,
    /// Whether the caller should chain into the reflection sequence.
    pub trigger_follow_on: bool,
    pub casualties: CasualtyTally,
    /// Waves fired, including the player's opening strike.
    pub waves: u32,
    pub missiles: u32,
}

impl GameResult {
    /// Result for a session abandoned before launch.
    pub fn quit() -> Self {
        Self {
            outcome: GameOutcome::Quit,
            ..Self::default()
        }
    }

    /// Result for a completed exchange. Nobody wins.
    pub fn exchange(casualties: CasualtyTally, waves: u32, missiles: u32) -> Self {
        Self {
            outcome: GameOutcome::None,
            trigger_follow_on: true,
            casualties,
            waves,
            missiles,
        }
    }
}
