//! Axis-aligned bounding boxes for broad-phase rejection
//!
//! Exact swept-collision math is comparatively expensive, so every wall,
//! edge and obstacle is first tested against a conservative box around
//! the mover's path. A box that rejects here is never handed to the
//! narrow-phase solvers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box accumulated from points.
///
/// The empty box (no points added yet) is a distinguished state that
/// intersects nothing. It is represented with inverted infinities so
/// that `add_point` needs no special casing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// The empty box: contains no points, intersects nothing.
    pub const EMPTY: Self = Self {
        min: Vec2::INFINITY,
        max: Vec2::NEG_INFINITY,
    };

    /// Tight box around a set of points.
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut bounds = Self::EMPTY;
        for p in points {
            bounds.add_point(*p);
        }
        bounds
    }

    /// Tight box around a circle.
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    /// Conservative box around a circle swept from `start` to `end`.
    pub fn sweep(start: Vec2, end: Vec2, radius: f32) -> Self {
        let mut bounds = Self::EMPTY;
        bounds.add_point(start);
        bounds.add_point(end);
        bounds.inflate(radius);
        bounds
    }

    /// Extend the box to include a point. The first point added to an
    /// empty box sets `min == max == point`.
    pub fn add_point(&mut self, point: Vec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Expand both min and max outward by `margin` (must be >= 0).
    /// An empty box stays empty.
    pub fn inflate(&mut self, margin: f32) {
        if self.is_empty() {
            return;
        }
        self.min -= Vec2::splat(margin);
        self.max += Vec2::splat(margin);
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Overlap test on both axes. Touching edges count as overlap: a
    /// false negative here would let a fast mover skip a collision
    /// check entirely. An empty box intersects nothing.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}
