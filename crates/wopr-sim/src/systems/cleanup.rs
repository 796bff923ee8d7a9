//! Cleanup system: retires finished explosions to permanent impact sites.

use hecs::{Entity, World};

use wopr_core::components::Explosion;
use wopr_core::types::Point;

/// Despawn every entity whose explosion has finished and record its location.
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, impact_sites: &mut Vec<Point>) {
    despawn_buffer.clear();

    for (entity, explosion) in world.query_mut::<&Explosion>() {
        if explosion.is_finished() {
            impact_sites.push(explosion.location);
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        // Collected from a live query above.
        let despawned = world.despawn(entity);
        debug_assert!(despawned.is_ok(), "entity despawned twice");
    }
}
