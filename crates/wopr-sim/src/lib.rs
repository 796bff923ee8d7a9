//! War simulation engine for WOPR.
//!
//! Owns the target catalog, the strike simulator, the escalation schedule,
//! and the escalation animator whose hecs world holds every missile and
//! explosion of the current wave.

pub mod catalog;
pub mod escalation;
pub mod schedule;
pub mod strike;
pub mod systems;
pub mod targets;

pub use wopr_core as core;
pub use escalation::{EscalationAnimator, TickReport, WarEscalationState};
pub use schedule::{EscalationSchedule, WavePlan};
pub use strike::{ExchangeLosses, StrikeResult, StrikeSimulator, WarOutcome};
pub use targets::{Target, TargetDatabase};

#[cfg(test)]
mod tests;
