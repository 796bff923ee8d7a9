//! Flight system: advances every missile along its arc.

use hecs::{Entity, World};

use wopr_core::components::Missile;

/// Advance all missiles by `step` and collect the ones that impacted this frame.
///
/// `impacted` is cleared first; a missile appears in it only on the frame it
/// crosses progress 1.0.
pub fn run(world: &mut World, step: f64, impacted: &mut Vec<Entity>) {
    impacted.clear();
    for (entity, missile) in world.query_mut::<&mut Missile>() {
        if missile.advance(step) {
            impacted.push(entity);
        }
    }
}

/// Force every missile still in flight to impact. Collects the forced ones.
pub fn force_impact(world: &mut World, impacted: &mut Vec<Entity>) {
    impacted.clear();
    for (entity, missile) in world.query_mut::<&mut Missile>() {
        if missile.force_impact() {
            impacted.push(entity);
        }
    }
}

/// Number of missiles that have not yet reached their target.
pub fn in_flight(world: &World) -> usize {
    world
        .query::<&Missile>()
        .iter()
        .filter(|(_, m)| !m.is_impacted())
        .count()
}
