//! Swept collision solvers (time-of-impact)
//!
//! The tricky part of the movement core: instead of testing shapes at
//! their start and end positions, the moving circle's center is swept
//! along its full displacement over a time parameter `t` in `[0, 1]`,
//! and the solvers find the earliest `t` at which contact occurs. This
//! catches thin walls that a discrete test would tunnel straight
//! through.
//!
//! Both solvers also produce the slide displacement: the unconsumed
//! remainder of the motion with its into-surface component removed, so
//! the mover glides along the obstacle instead of stopping dead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SWEEP_EPSILON;

/// Outcome of a single sweep against one obstacle.
///
/// `None` at the call sites means the sweep completes unobstructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Portion of the displacement traveled before first contact, in `[0, 1]`.
    pub fraction: f32,
    /// Unconsumed remainder of the displacement, redirected to be
    /// tangential to the obstacle surface at the contact point.
    pub slide: Vec2,
}

/// Remove the component of `v` along `normal` (unit length), leaving
/// only motion tangential to the contacted surface.
#[inline]
pub fn slide_along(v: Vec2, normal: Vec2) -> Vec2 {
    v - normal * v.dot(normal)
}

/// Sweep a moving circle against a stationary wall edge.
///
/// The edge is the capsule of `radius` around the segment `(p1, p2)`:
/// contact happens at the smallest `t` where the distance from
/// `pos + t * displacement` to the segment equals `radius`. Face
/// contact against the edge interior reduces to a linear crossing of
/// the signed line distance; endpoint contact is a quadratic against a
/// point obstacle. The smaller valid root wins.
///
/// An already-interpenetrating start resolves to `fraction = 0` with
/// the tangential part of the full displacement, so a mover pressed
/// into a wall keeps moving along its free directions.
pub fn circle_vs_segment(
    pos: Vec2,
    radius: f32,
    displacement: Vec2,
    p1: Vec2,
    p2: Vec2,
) -> Option<SweepResult> {
    if displacement.length_squared() <= SWEEP_EPSILON * SWEEP_EPSILON {
        return None;
    }

    let edge = p2 - p1;
    let edge_len_sq = edge.length_squared();

    // A zero-length edge collapses to a point obstacle
    if edge_len_sq <= SWEEP_EPSILON * SWEEP_EPSILON {
        return circle_vs_circle(pos, radius, displacement, p1, 0.0);
    }

    // Interpenetrating start: stop immediately, keep tangential motion.
    // Only motion pushing further into the surface counts; tangential
    // or receding motion passes unobstructed, otherwise the follow-up
    // slide sweep would re-collide here and stall the mover.
    let along = ((pos - p1).dot(edge) / edge_len_sq).clamp(0.0, 1.0);
    let offset = pos - (p1 + edge * along);
    let dist_sq = offset.length_squared();
    if dist_sq < radius * radius {
        let normal = if dist_sq > SWEEP_EPSILON * SWEEP_EPSILON {
            offset / dist_sq.sqrt()
        } else {
            // Center sits on the segment itself: oppose the motion
            let perp = edge.perp() / edge_len_sq.sqrt();
            if perp.dot(displacement) > 0.0 { -perp } else { perp }
        };
        if displacement.dot(normal) < -SWEEP_EPSILON {
            return Some(SweepResult {
                fraction: 0.0,
                slide: slide_along(displacement, normal),
            });
        }
        return None;
    }

    let mut best: Option<(f32, Vec2)> = None;

    // Face contact against the edge interior: the signed distance to
    // the supporting line is linear in t, so first contact with
    // |s| = radius is a single root.
    let line_normal = edge.perp() / edge_len_sq.sqrt();
    let s0 = (pos - p1).dot(line_normal);
    let sd = displacement.dot(line_normal);
    if sd.abs() > SWEEP_EPSILON {
        let side = if s0 >= 0.0 { 1.0 } else { -1.0 };
        // Only a crossing toward the line counts
        if side * sd < 0.0 {
            let t = (side * radius - s0) / sd;
            if (-SWEEP_EPSILON..=1.0).contains(&t) {
                // The contact point must project onto the edge interior;
                // otherwise an endpoint governs the contact.
                let center = pos + displacement * t;
                let u = (center - p1).dot(edge) / edge_len_sq;
                if (0.0..=1.0).contains(&u) {
                    best = Some((t.max(0.0), line_normal * side));
                }
            }
        }
    }

    // Endpoint contacts: each corner acts as a point obstacle
    for p in [p1, p2] {
        if let Some((t, normal)) = sweep_vs_point(pos, radius, displacement, p) {
            if best.is_none_or(|(bt, _)| t < bt) {
                best = Some((t, normal));
            }
        }
    }

    best.map(|(t, normal)| SweepResult {
        fraction: t,
        slide: slide_along(displacement * (1.0 - t), normal),
    })
}

/// Sweep a moving circle against a stationary circle.
///
/// Contact happens at the smallest `t` where the center distance equals
/// the sum of the radii. An overlapping start resolves to
/// `fraction = 0` with the tangential component of the full
/// displacement; receding motion and never-reached approaches return
/// `None`.
pub fn circle_vs_circle(
    pos: Vec2,
    radius: f32,
    displacement: Vec2,
    other_pos: Vec2,
    other_radius: f32,
) -> Option<SweepResult> {
    if displacement.length_squared() <= SWEEP_EPSILON * SWEEP_EPSILON {
        return None;
    }

    let combined = radius + other_radius;
    let offset = pos - other_pos;
    if offset.length_squared() < combined * combined {
        let normal = offset.normalize_or_zero();
        if normal == Vec2::ZERO {
            // Concentric centers leave no usable contact normal;
            // let the mover walk out unobstructed
            return None;
        }
        // Same rule as the segment case: only into-surface motion
        // collides, so a pressed-in mover keeps its free directions
        if displacement.dot(normal) < -SWEEP_EPSILON {
            return Some(SweepResult {
                fraction: 0.0,
                slide: slide_along(displacement, normal),
            });
        }
        return None;
    }

    let (t, normal) = sweep_vs_point(pos, combined, displacement, other_pos)?;
    Some(SweepResult {
        fraction: t,
        slide: slide_along(displacement * (1.0 - t), normal),
    })
}

/// Earliest `t` at which the swept center comes within `radius` of
/// `point`, with the contact normal (from the point toward the center
/// at impact). Returns `None` for receding motion, a negative
/// discriminant (nearest approach never reaches contact distance), or
/// roots outside `[0, 1]`. Assumes a non-degenerate displacement and a
/// non-overlapping start.
fn sweep_vs_point(pos: Vec2, radius: f32, displacement: Vec2, point: Vec2) -> Option<(f32, Vec2)> {
    let m = pos - point;
    let a = displacement.length_squared();
    let b = 2.0 * m.dot(displacement);
    let c = m.length_squared() - radius * radius;

    if c < 0.0 {
        // Overlapping start is the caller's case to handle
        return None;
    }
    if b >= 0.0 {
        // Moving away, or grazing tangentially
        return None;
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let t = (-b - disc.sqrt()) / (2.0 * a);
    if !(-SWEEP_EPSILON..=1.0).contains(&t) {
        return None;
    }
    let t = t.max(0.0);
    let normal = (pos + displacement * t - point).normalize_or_zero();
    Some((t, normal))
}
