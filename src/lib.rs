//! Arena Rush - movement core for a top-down arena shooter
//!
//! Mobile entities (the player, enemies, bullets) move through a world
//! bounded by polygonal walls. The heart of the crate is continuous
//! (swept) collision detection: a desired per-frame displacement is
//! truncated at the earliest obstruction and the remainder is deflected
//! so entities glide along obstacles instead of sticking to them or
//! tunneling through them at high speed.
//!
//! Core modules:
//! - `sim::bounds`: axis-aligned boxes for broad-phase rejection
//! - `sim::world`: walls, circle obstacles, geometry validation
//! - `sim::sweep`: time-of-impact solvers (circle vs segment, circle vs circle)
//! - `sim::resolve`: the two-pass move-and-slide loop
//! - `sim::entity`: player and bullet entities driving the resolver
//!
//! Rendering, networking, input and world loading are external
//! collaborators; this crate is a pure, synchronous simulation core.

pub mod sim;

pub use sim::bounds::Aabb;
pub use sim::entity::{Bullet, Movable, Player, PlayerConfig};
pub use sim::resolve::resolve;
pub use sim::sweep::{SweepResult, circle_vs_circle, circle_vs_segment};
pub use sim::world::{CircleObstacle, GeometryError, Wall, World};

/// Game configuration constants
pub mod consts {
    /// Player walking speed (m/s)
    pub const PLAYER_SPEED: f32 = 12.0;
    /// Player bounding-circle radius (m)
    pub const PLAYER_RADIUS: f32 = 0.5;

    /// Bullet travel speed (m/s)
    pub const BULLET_SPEED: f32 = 45.0;
    /// Bullet lifetime after launch (s)
    pub const BULLET_LIFETIME: f64 = 2.0;

    /// Fraction backed off a winning collision so the mover stops just
    /// short of the surface instead of exactly touching it.
    pub const SLIDE_THRESHOLD: f32 = 0.01;

    /// Tolerance for root acceptance and degeneracy checks in the
    /// swept solvers (world units).
    pub const SWEEP_EPSILON: f32 = 1e-6;
}
