//! Two-phase move-and-slide resolution
//!
//! One resolution call performs at most two sweeps: the desired
//! displacement, then a single re-sweep of the slide vector the first
//! sweep produced. This bounds per-frame cost (no convergence loop);
//! the price is that a pathological double-corner trap can clip
//! slightly into a wall, which is accepted.

use glam::Vec2;
use log::trace;

use super::bounds::Aabb;
use super::sweep::{SweepResult, circle_vs_circle, circle_vs_segment};
use super::world::World;
use crate::consts::SLIDE_THRESHOLD;

/// Move a circle of `radius` from `position` by `displacement` through
/// the world, sliding along any obstacle hit on the way. Returns the
/// final position; nothing else about the mover is touched.
pub fn resolve(position: Vec2, radius: f32, displacement: Vec2, world: &World) -> Vec2 {
    let (position, slide) = sweep_once(position, radius, displacement, world);
    // Exactly one re-sweep handles sliding onto a second surface
    let (position, _) = sweep_once(position, radius, slide, world);
    position
}

/// One sweep pass: broad-phase rejection, globally earliest collision,
/// truncated advance. Returns the new position and the slide vector
/// for a follow-up pass (zero when nothing was hit).
fn sweep_once(position: Vec2, radius: f32, displacement: Vec2, world: &World) -> (Vec2, Vec2) {
    if displacement == Vec2::ZERO {
        return (position, Vec2::ZERO);
    }

    let movement_bounds = Aabb::sweep(position, position + displacement, radius);

    // Earliest collision across all obstacles; ties keep the first found
    let mut fraction = 1.0_f32;
    let mut slide = Vec2::ZERO;
    let mut consider = |hit: SweepResult, what: &str| {
        // Stop fractionally short of the surface so the same contact
        // does not re-trigger next frame on floating-point residue
        let backed_off = (hit.fraction - SLIDE_THRESHOLD).max(0.0);
        if backed_off < fraction {
            trace!("sweep hit {what} at fraction {:.4}", hit.fraction);
            fraction = backed_off;
            slide = hit.slide;
        }
    };

    for wall in &world.walls {
        if !wall.bounds.intersects(&movement_bounds) {
            continue;
        }
        for (p1, p2) in wall.edges() {
            if !Aabb::from_points(&[p1, p2]).intersects(&movement_bounds) {
                continue;
            }
            if let Some(hit) = circle_vs_segment(position, radius, displacement, p1, p2) {
                consider(hit, "wall edge");
            }
        }
    }

    for enemy in &world.enemies {
        if !enemy.bounds().intersects(&movement_bounds) {
            continue;
        }
        if let Some(hit) =
            circle_vs_circle(position, radius, displacement, enemy.position, enemy.radius)
        {
            consider(hit, "enemy");
        }
    }

    (position + displacement * fraction, slide)
}
