//! Tears (projectiles)
//!
//! Fired in one of the four cardinal directions on a cooldown. A tear
//! flies straight, dies when it hits a wall body or an enemy, and expires
//! on its own after a short lifetime. All tears are transient: room
//! transitions clear them wholesale.

use macroquad::math::{Rect, Vec2};

use super::collision::{hits_any, CollisionBody};

/// Flight speed, pixels per second
pub const TEAR_SPEED: f32 = 600.0;
/// Lifetime in seconds before a tear fizzles
pub const TEAR_LIFETIME: f64 = 1.2;
/// Minimum time between shots, seconds
pub const SHOOT_COOLDOWN: f64 = 0.7;
/// Spawn offset from the player center toward the firing direction
pub const MUZZLE_OFFSET: f32 = 30.0;

const TEAR_SIZE: f32 = 24.0;

pub struct Tear {
    pub rect: Rect,
    pos: Vec2,
    pub direction: Vec2,
    spawned: f64,
}

impl Tear {
    pub fn new(center: Vec2, direction: Vec2, now: f64) -> Self {
        Self {
            rect: Rect::new(
                center.x - TEAR_SIZE / 2.0,
                center.y - TEAR_SIZE / 2.0,
                TEAR_SIZE,
                TEAR_SIZE,
            ),
            pos: center,
            direction: direction.normalize_or_zero(),
            spawned: now,
        }
    }

    /// Advance one frame. Returns false when the tear is spent (expired
    /// or hit a wall) and should be removed.
    pub fn update(&mut self, dt: f32, now: f64, bodies: &[CollisionBody]) -> bool {
        self.pos += self.direction * TEAR_SPEED * dt;
        self.rect.x = self.pos.x - self.rect.w / 2.0;
        self.rect.y = self.pos.y - self.rect.h / 2.0;

        if now - self.spawned >= TEAR_LIFETIME {
            return false;
        }
        !hits_any(&self.rect, bodies)
    }
}

/// Shot-rate limiter. Reset on room transitions so the player can fire
/// immediately after entering a room.
#[derive(Debug, Clone, Copy)]
pub struct ShotTimer {
    last_shot: f64,
    ready: bool,
}

impl ShotTimer {
    pub fn new() -> Self {
        Self {
            last_shot: 0.0,
            ready: true,
        }
    }

    pub fn can_shoot(&self) -> bool {
        self.ready
    }

    pub fn mark_shot(&mut self, now: f64) {
        self.ready = false;
        self.last_shot = now;
    }

    pub fn update(&mut self, now: f64) {
        if !self.ready && now - self.last_shot >= SHOOT_COOLDOWN {
            self.ready = true;
        }
    }

    pub fn reset(&mut self) {
        self.ready = true;
    }
}

impl Default for ShotTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tear_flies_straight() {
        let mut tear = Tear::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 0.0);
        assert!(tear.update(0.1, 0.1, &[]));
        let expected = Vec2::new(TEAR_SPEED * 0.1, 0.0);
        assert!((tear.rect.center() - expected).length() < 0.01);
    }

    #[test]
    fn test_tear_expires() {
        let mut tear = Tear::new(Vec2::ZERO, Vec2::new(0.0, 1.0), 0.0);
        assert!(tear.update(0.016, 0.5, &[]));
        assert!(!tear.update(0.016, TEAR_LIFETIME + 0.01, &[]));
    }

    #[test]
    fn test_tear_dies_on_wall() {
        let wall = CollisionBody::new(Rect::new(50.0, -50.0, 20.0, 100.0));
        let mut tear = Tear::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 0.0);
        // First step stays clear, second step lands inside the wall.
        assert!(tear.update(0.05, 0.05, &[wall]));
        assert!(!tear.update(0.05, 0.1, &[wall]));
    }

    #[test]
    fn test_shot_cooldown() {
        let mut timer = ShotTimer::new();
        assert!(timer.can_shoot());
        timer.mark_shot(1.0);
        timer.update(1.0 + SHOOT_COOLDOWN / 2.0);
        assert!(!timer.can_shoot());
        timer.update(1.0 + SHOOT_COOLDOWN);
        assert!(timer.can_shoot());
    }

    #[test]
    fn test_reset_rearms_immediately() {
        let mut timer = ShotTimer::new();
        timer.mark_shot(1.0);
        timer.reset();
        assert!(timer.can_shoot());
    }
}
