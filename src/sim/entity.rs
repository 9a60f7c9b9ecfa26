//! Mobile entities: the player and its bullets
//!
//! Entities own their position and per-tick desired displacement and
//! delegate actual movement to the resolver. The gameplay layer owns
//! their lifetimes and drops whatever reports `expired`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::resolve::resolve;
use super::world::{GeometryError, World};
use crate::consts::{BULLET_LIFETIME, BULLET_SPEED, PLAYER_RADIUS, PLAYER_SPEED};

/// Common capability of everything that moves through the world.
pub trait Movable {
    fn position(&self) -> Vec2;

    /// Advance by `delta` seconds. `now` is absolute time in seconds,
    /// used by entities with a finite lifetime.
    fn update(&mut self, delta: f32, now: f64, world: &World);

    /// Whether the gameplay layer should drop this entity.
    fn expired(&self) -> bool;
}

/// Explicit player construction options. Every recognized option and
/// its default lives here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Spawn position
    pub position: Vec2,
    /// Walking speed (m/s)
    pub speed: f32,
    /// Bounding-circle radius for collision (m)
    pub bounding_radius: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            speed: PLAYER_SPEED,
            bounding_radius: PLAYER_RADIUS,
        }
    }
}

/// The controlled player: a bounding circle that walks through the
/// world with move-and-slide collision response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    /// Walking speed (m/s)
    pub speed: f32,
    /// Direction the player is walking toward; normalized on use, zero
    /// means standing still
    pub walk_dir: Vec2,
    /// Direction the player is facing; independent of movement and
    /// never subject to collision
    pub look_dir: Vec2,
    pub bounding_radius: f32,
}

impl Player {
    pub fn new(config: PlayerConfig) -> Result<Self, GeometryError> {
        if !config.position.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate);
        }
        if !config.bounding_radius.is_finite() || config.bounding_radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(config.bounding_radius));
        }
        if !config.speed.is_finite() || config.speed < 0.0 {
            return Err(GeometryError::InvalidSpeed(config.speed));
        }
        Ok(Self {
            position: config.position,
            speed: config.speed,
            walk_dir: Vec2::ZERO,
            look_dir: Vec2::X,
            bounding_radius: config.bounding_radius,
        })
    }

    /// Face toward a world-space point (no-op if it coincides with the
    /// player).
    pub fn look_at(&mut self, target: Vec2) {
        let dir = (target - self.position).normalize_or_zero();
        if dir != Vec2::ZERO {
            self.look_dir = dir;
        }
    }

    /// Spawn a bullet from the player's position along its look
    /// direction. The caller owns the bullet from here on.
    pub fn shoot(&self) -> Bullet {
        Bullet::new(self.position, self.look_dir)
    }
}

impl Movable for Player {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn update(&mut self, delta: f32, _now: f64, world: &World) {
        if delta <= 0.0 {
            return;
        }
        let displacement = self.walk_dir.normalize_or_zero() * self.speed * delta;
        self.position = resolve(self.position, self.bounding_radius, displacement, world);
    }

    fn expired(&self) -> bool {
        false
    }
}

/// A bullet: travels in a straight line and expires after a fixed
/// lifetime. Bullets do not collide with world geometry; hit detection
/// against entities is the gameplay layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub position: Vec2,
    /// Travel direction; normalized on use
    pub direction: Vec2,
    /// Travel speed (m/s)
    pub speed: f32,
    /// Absolute expiry time, armed on the first update
    expires_at: Option<f64>,
    expired: bool,
}

impl Bullet {
    pub fn new(position: Vec2, direction: Vec2) -> Self {
        Self {
            position,
            direction,
            speed: BULLET_SPEED,
            expires_at: None,
            expired: false,
        }
    }
}

impl Movable for Bullet {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn update(&mut self, delta: f32, now: f64, _world: &World) {
        match self.expires_at {
            None => self.expires_at = Some(now + BULLET_LIFETIME),
            Some(expires_at) if now > expires_at => self.expired = true,
            Some(_) => {}
        }
        self.position += self.direction.normalize_or_zero() * self.speed * delta.max(0.0);
    }

    fn expired(&self) -> bool {
        self.expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::world::Wall;
    use approx::assert_relative_eq;

    fn empty_world() -> World {
        World::default()
    }

    #[test]
    fn test_player_config_defaults() {
        let config = PlayerConfig::default();
        assert_eq!(config.position, Vec2::ZERO);
        assert_eq!(config.speed, PLAYER_SPEED);
        assert_eq!(config.bounding_radius, PLAYER_RADIUS);
    }

    #[test]
    fn test_player_rejects_invalid_config() {
        let bad_radius = PlayerConfig {
            bounding_radius: 0.0,
            ..Default::default()
        };
        assert!(Player::new(bad_radius).is_err());

        let bad_position = PlayerConfig {
            position: Vec2::new(f32::NAN, 0.0),
            ..Default::default()
        };
        assert!(Player::new(bad_position).is_err());
    }

    #[test]
    fn test_player_walks_at_speed() {
        let mut player = Player::new(PlayerConfig::default()).unwrap();
        player.walk_dir = Vec2::new(3.0, 0.0); // normalized on use
        player.update(0.1, 0.0, &empty_world());
        assert_relative_eq!(player.position.x, PLAYER_SPEED * 0.1, epsilon = 1e-5);
        assert_relative_eq!(player.position.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_player_standing_still() {
        let mut player = Player::new(PlayerConfig::default()).unwrap();
        player.update(0.1, 0.0, &empty_world());
        assert_eq!(player.position, Vec2::ZERO);
    }

    #[test]
    fn test_player_blocked_by_wall() {
        let world = World::new(
            vec![Wall::new(vec![
                Vec2::new(1.0, -2.0),
                Vec2::new(1.2, -2.0),
                Vec2::new(1.2, 2.0),
                Vec2::new(1.0, 2.0),
            ])
            .unwrap()],
            Vec::new(),
        );
        let mut player = Player::new(PlayerConfig::default()).unwrap();
        player.walk_dir = Vec2::X;
        player.update(1.0, 0.0, &world);
        // Wall face at x = 1, radius 0.5: the player stops short of 0.5
        // (the slide threshold backs off a fraction of the full step)
        assert!(player.position.x < 0.5);
        assert!(player.position.x > 0.3);
    }

    #[test]
    fn test_player_look_independent_of_walls() {
        let mut player = Player::new(PlayerConfig::default()).unwrap();
        player.look_at(Vec2::new(0.0, 7.0));
        assert_relative_eq!(player.look_dir.y, 1.0, epsilon = 1e-6);
        // Looking at the current position keeps the old direction
        player.look_at(player.position);
        assert_relative_eq!(player.look_dir.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_delta_is_a_no_op() {
        let mut player = Player::new(PlayerConfig::default()).unwrap();
        player.walk_dir = Vec2::X;
        player.update(-0.1, 0.0, &empty_world());
        assert_eq!(player.position, Vec2::ZERO);
    }

    #[test]
    fn test_shoot_spawns_bullet_along_look_dir() {
        let mut player = Player::new(PlayerConfig::default()).unwrap();
        player.look_at(Vec2::new(5.0, 5.0));
        let bullet = player.shoot();
        assert_eq!(bullet.position, player.position);
        assert_eq!(bullet.direction, player.look_dir);
        assert!(!bullet.expired());
    }

    #[test]
    fn test_bullet_travels_straight() {
        let world = empty_world();
        let mut bullet = Bullet::new(Vec2::ZERO, Vec2::new(2.0, 0.0));
        bullet.update(0.1, 0.0, &world);
        assert_relative_eq!(bullet.position.x, BULLET_SPEED * 0.1, epsilon = 1e-4);
    }

    #[test]
    fn test_bullet_expires_after_lifetime() {
        let world = empty_world();
        let mut bullet = Bullet::new(Vec2::ZERO, Vec2::X);

        // First update arms the expiry clock
        bullet.update(0.016, 10.0, &world);
        assert!(!bullet.expired());

        bullet.update(0.016, 10.0 + BULLET_LIFETIME / 2.0, &world);
        assert!(!bullet.expired());

        bullet.update(0.016, 10.0 + BULLET_LIFETIME + 0.1, &world);
        assert!(bullet.expired());
    }

    #[test]
    fn test_bullet_ignores_walls() {
        // A wall across the path does not stop a bullet
        let world = World::new(
            vec![Wall::new(vec![
                Vec2::new(1.0, -2.0),
                Vec2::new(1.2, -2.0),
                Vec2::new(1.2, 2.0),
                Vec2::new(1.0, 2.0),
            ])
            .unwrap()],
            Vec::new(),
        );
        let mut bullet = Bullet::new(Vec2::ZERO, Vec2::X);
        bullet.update(0.1, 0.0, &world);
        assert!(bullet.position.x > 1.2);
    }
}
