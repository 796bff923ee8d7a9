//! ECS systems run by the escalation animator each frame.
//!
//! Systems are pure functions over `&mut World`; all state lives in the
//! `Missile` and `Explosion` components.

pub mod cleanup;
pub mod detonation;
pub mod flight;
