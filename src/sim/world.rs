//! Static obstacle model: polygonal walls and circle obstacles
//!
//! Walls are closed polygons treated edge-by-edge; each carries a tight
//! bounding box computed once at construction (walls never move).
//! Enemies present themselves to the resolver as circle obstacles.
//!
//! Geometry is validated here, at construction time, so the solvers can
//! assume finite inputs (see `GeometryError`).

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bounds::Aabb;

/// Invalid geometry rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("coordinate is not finite")]
    NonFiniteCoordinate,
    #[error("radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),
    #[error("speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),
    #[error("a wall needs at least 3 corners, got {0}")]
    TooFewCorners(usize),
}

/// A static wall: an ordered, implicitly closed sequence of corners.
///
/// Edges are the consecutive corner pairs, wrapping from the last
/// corner back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    corners: Vec<Vec2>,
    /// Tight box around all corners, for broad-phase rejection.
    pub bounds: Aabb,
}

impl Wall {
    /// Build a wall from at least 3 finite corners.
    pub fn new(corners: Vec<Vec2>) -> Result<Self, GeometryError> {
        if corners.len() < 3 {
            return Err(GeometryError::TooFewCorners(corners.len()));
        }
        if corners.iter().any(|c| !c.is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate);
        }
        let bounds = Aabb::from_points(&corners);
        Ok(Self { corners, bounds })
    }

    #[inline]
    pub fn corners(&self) -> &[Vec2] {
        &self.corners
    }

    /// Iterate the polygon's edges `(corners[i], corners[(i + 1) % n])`.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.corners.len();
        (0..n).map(move |i| (self.corners[i], self.corners[(i + 1) % n]))
    }
}

/// A stationary circle the mover can collide with (an enemy's
/// collision footprint).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleObstacle {
    pub position: Vec2,
    pub radius: f32,
}

impl CircleObstacle {
    /// Build a circle obstacle with a finite center and radius >= 0.
    /// A zero radius is legal and collides as a point.
    pub fn new(position: Vec2, radius: f32) -> Result<Self, GeometryError> {
        if !position.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate);
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { position, radius })
    }

    /// Tight box around the circle.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::around_circle(self.position, self.radius)
    }
}

/// Everything a mover can collide with during one resolution call.
///
/// The gameplay layer owns entity lifetimes; the resolver only reads
/// positions and radii for the duration of one call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    pub walls: Vec<Wall>,
    pub enemies: Vec<CircleObstacle>,
}

impl World {
    pub fn new(walls: Vec<Wall>, enemies: Vec<CircleObstacle>) -> Self {
        Self { walls, enemies }
    }
}
