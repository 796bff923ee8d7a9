//! WOPR Global Thermonuclear War terminal game.
//!
//! Wires the target database, strike simulator and escalation animator into
//! the interactive GTW controller. All terminal and audio access goes
//! through the collaborator traits in `io`.

pub mod controller;
pub mod io;

pub use wopr_core as core;
pub use controller::GtwController;
