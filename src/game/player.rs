//! Player entity
//!
//! A sprite rect for drawing and a smaller hitbox for collision. Movement
//! input arrives as a direction vector (normalized here so diagonals are
//! not faster) and resolves against the active room's wall bodies.

use macroquad::math::{Rect, Vec2};

use super::collision::{move_and_slide, CollisionBody};

/// Sprite dimensions in pixels
pub const PLAYER_WIDTH: f32 = 73.0;
pub const PLAYER_HEIGHT: f32 = 86.0;
/// Hitbox inset from the sprite rect (total, split across both sides)
const HITBOX_SHRINK_X: f32 = 20.0;
const HITBOX_SHRINK_Y: f32 = 30.0;
/// Movement speed, pixels per second
pub const PLAYER_SPEED: f32 = 250.0;

pub struct Player {
    /// Sprite rect, for drawing
    pub rect: Rect,
    /// Collision hitbox, kept centered on the sprite
    pub hitbox: Rect,
    /// Last movement direction (unit length or zero)
    pub direction: Vec2,
    pub speed: f32,
}

impl Player {
    pub fn new(center: Vec2) -> Self {
        let rect = Rect::new(
            center.x - PLAYER_WIDTH / 2.0,
            center.y - PLAYER_HEIGHT / 2.0,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        );
        let hitbox = Rect::new(
            center.x - (PLAYER_WIDTH - HITBOX_SHRINK_X) / 2.0,
            center.y - (PLAYER_HEIGHT - HITBOX_SHRINK_Y) / 2.0,
            PLAYER_WIDTH - HITBOX_SHRINK_X,
            PLAYER_HEIGHT - HITBOX_SHRINK_Y,
        );
        Self {
            rect,
            hitbox,
            direction: Vec2::ZERO,
            speed: PLAYER_SPEED,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.hitbox.center()
    }

    /// Apply one frame of movement against the active collision set.
    pub fn update(&mut self, input_dir: Vec2, dt: f32, bodies: &[CollisionBody]) {
        self.direction = input_dir.normalize_or_zero();
        move_and_slide(&mut self.hitbox, self.direction * self.speed * dt, bodies);
        self.sync_rect();
    }

    /// Teleport so the hitbox is centered at `center` (room entry).
    pub fn set_center(&mut self, center: Vec2) {
        self.hitbox.x = center.x - self.hitbox.w / 2.0;
        self.hitbox.y = center.y - self.hitbox.h / 2.0;
        self.sync_rect();
    }

    fn sync_rect(&mut self) {
        let center = self.hitbox.center();
        self.rect.x = center.x - self.rect.w / 2.0;
        self.rect.y = center.y - self.rect.h / 2.0;
    }
}
