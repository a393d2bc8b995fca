//! Enemies
//!
//! Two kinds, both transient room occupants cleared on transition:
//! - Greed: walks straight at the player, relentless.
//! - Spider: move/stop bursts, each burst either a fast lunge at the
//!   player or a slow random wander.
//!
//! Both collide axis-separated against the active wall bodies, the same
//! resolution the player uses.

use macroquad::math::{Rect, Vec2};
use rand::Rng;

use super::collision::{move_and_slide, CollisionBody};

const GREED_SIZE: f32 = 57.0;
const GREED_SPEED: f32 = 200.0;
const GREED_HP: i32 = 7;

const SPIDER_SIZE: f32 = 46.0;
const SPIDER_WANDER_SPEED: f32 = 120.0;
const SPIDER_LUNGE_SPEED: f32 = 320.0;
const SPIDER_HP: i32 = 5;
/// Seconds a spider keeps moving before it pauses
const SPIDER_MOVE_DURATION: f64 = 1.0;
/// Seconds a spider stays put between bursts
const SPIDER_STOP_DURATION: f64 = 0.5;
/// Chance that a burst targets the player instead of wandering
const SPIDER_LUNGE_CHANCE: f64 = 2.0 / 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Greed,
    Spider,
}

/// Spider burst cycle. Greed ignores this and just chases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpiderState {
    Idle,
    Moving,
    Stopping,
}

pub struct Enemy {
    pub kind: EnemyKind,
    pub rect: Rect,
    pub hitbox: Rect,
    pub hp: i32,
    pub max_hp: i32,
    direction: Vec2,
    // Spider-only burst bookkeeping
    state: SpiderState,
    lunging: bool,
    last_state_change: f64,
}

impl Enemy {
    pub fn new(kind: EnemyKind, center: Vec2) -> Self {
        let (size, hp) = match kind {
            EnemyKind::Greed => (GREED_SIZE, GREED_HP),
            EnemyKind::Spider => (SPIDER_SIZE, SPIDER_HP),
        };
        let rect = Rect::new(center.x - size / 2.0, center.y - size / 2.0, size, size);
        Self {
            kind,
            rect,
            // Slightly smaller than the sprite, like the player's
            hitbox: Rect::new(rect.x + 5.0, rect.y + 5.0, size - 10.0, size - 10.0),
            hp,
            max_hp: hp,
            direction: Vec2::ZERO,
            state: SpiderState::Idle,
            lunging: false,
            last_state_change: 0.0,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.hitbox.center()
    }

    /// Advance one frame of AI and movement.
    pub fn update<R: Rng>(
        &mut self,
        player_center: Vec2,
        bodies: &[CollisionBody],
        dt: f32,
        now: f64,
        rng: &mut R,
    ) {
        match self.kind {
            EnemyKind::Greed => self.update_greed(player_center, bodies, dt),
            EnemyKind::Spider => self.update_spider(player_center, bodies, dt, now, rng),
        }
    }

    fn update_greed(&mut self, player_center: Vec2, bodies: &[CollisionBody], dt: f32) {
        self.direction = (player_center - self.center()).normalize_or_zero();
        self.step(GREED_SPEED, bodies, dt);
    }

    fn update_spider<R: Rng>(
        &mut self,
        player_center: Vec2,
        bodies: &[CollisionBody],
        dt: f32,
        now: f64,
        rng: &mut R,
    ) {
        let since_change = now - self.last_state_change;
        match self.state {
            SpiderState::Idle => {
                self.pick_burst(player_center, rng);
                self.state = SpiderState::Moving;
                self.last_state_change = now;
                self.step_burst(bodies, dt);
            }
            SpiderState::Moving => {
                if since_change >= SPIDER_MOVE_DURATION {
                    self.state = SpiderState::Stopping;
                    self.direction = Vec2::ZERO;
                    self.last_state_change = now;
                } else {
                    self.step_burst(bodies, dt);
                }
            }
            SpiderState::Stopping => {
                if since_change >= SPIDER_STOP_DURATION {
                    self.state = SpiderState::Idle;
                    self.last_state_change = now;
                }
            }
        }
    }

    fn pick_burst<R: Rng>(&mut self, player_center: Vec2, rng: &mut R) {
        if rng.gen_bool(SPIDER_LUNGE_CHANCE) {
            self.lunging = true;
            self.direction = (player_center - self.center()).normalize_or_zero();
        } else {
            self.lunging = false;
            let wander = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
            self.direction = if wander.length() > 0.0 {
                wander.normalize()
            } else {
                Vec2::new(1.0, 0.0)
            };
        }
    }

    fn step_burst(&mut self, bodies: &[CollisionBody], dt: f32) {
        let speed = if self.lunging {
            SPIDER_LUNGE_SPEED
        } else {
            SPIDER_WANDER_SPEED
        };
        self.step(speed, bodies, dt);
    }

    fn step(&mut self, speed: f32, bodies: &[CollisionBody], dt: f32) {
        if self.direction == Vec2::ZERO {
            return;
        }
        move_and_slide(&mut self.hitbox, self.direction * speed * dt, bodies);
        let center = self.hitbox.center();
        self.rect.x = center.x - self.rect.w / 2.0;
        self.rect.y = center.y - self.rect.h / 2.0;
    }

    /// Apply damage. Returns true when this kills the enemy.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp -= amount;
        log::debug!("{:?} took {} damage, hp {}/{}", self.kind, amount, self.hp, self.max_hp);
        self.hp <= 0
    }
}
