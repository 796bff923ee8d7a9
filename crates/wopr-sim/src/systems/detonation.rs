//! Detonation system: turns impacted missiles into explosions.

use hecs::{Entity, World};

use wopr_core::components::{Explosion, Missile};

/// Attach an `Explosion` at the destination of each impacted missile.
///
/// Returns the names of the targets hit, in the order given.
pub fn run(world: &mut World, impacted: &[Entity], explosion_frames: u32) -> Vec<String> {
    let mut hits = Vec::with_capacity(impacted.len());
    for &entity in impacted {
        let Ok(missile) = world.get::<&Missile>(entity) else {
            continue;
        };
        let explosion = Explosion::new(missile.destination, explosion_frames);
        let target = missile.target.clone();
        drop(missile);

        if world.insert_one(entity, explosion).is_ok() {
            tracing::trace!(target = %target, "detonation");
            hits.push(target);
        }
    }
    hits
}

/// Advance every explosion by one frame.
pub fn age(world: &mut World) {
    for (_entity, explosion) in world.query_mut::<&mut Explosion>() {
        explosion.tick();
    }
}

/// Number of explosions still animating.
pub fn active(world: &World) -> usize {
    world
        .query::<&Explosion>()
        .iter()
        .filter(|(_, e)| !e.is_finished())
        .count()
}
