//! World map rendering for WOPR.
//!
//! Geographic projection into fine pixel space, the braille overlay
//! canvas, and the world map renderer that merges the static ASCII map
//! with missile arcs, detonations and impact marks.

pub use wopr_core as core;

pub mod base_map;
pub mod canvas;
pub mod escape;
pub mod projection;
pub mod world_map;

// Re-export key types for convenience.
pub use canvas::{Layer, OverlayCanvas};
pub use projection::MapProjection;
pub use world_map::WorldMap;
