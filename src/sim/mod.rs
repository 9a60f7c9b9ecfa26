//! Deterministic movement simulation
//!
//! Everything here is pure, synchronous and frame-driven: one
//! resolution call runs start to finish before the next entity's tick.
//! Walls are read-only shared state; no rendering or platform
//! dependencies.

pub mod bounds;
pub mod entity;
pub mod resolve;
pub mod sweep;
pub mod world;

pub use bounds::Aabb;
pub use entity::{Bullet, Movable, Player, PlayerConfig};
pub use resolve::resolve;
pub use sweep::{SweepResult, circle_vs_circle, circle_vs_segment};
pub use world::{CircleObstacle, GeometryError, Wall, World};
