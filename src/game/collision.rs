//! Collision system
//!
//! Axis-aligned rectangle collision against a room's wall bodies.
//! Movement resolves one axis at a time: move on x, push out of any
//! overlap, then the same on y. Resolving per-axis is what lets entities
//! slide along a wall instead of sticking to it.

use macroquad::math::{Rect, Vec2};

/// An axis-aligned blocking rectangle. Not necessarily visible: perimeter
/// walls, door-flanking segments, and placed rocks all use the same body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionBody {
    pub rect: Rect,
}

impl CollisionBody {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Build from a center point and a size, the way wall segments are laid out.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            rect: Rect::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y),
        }
    }
}

/// Strict intersection test. `Rect::overlaps` counts touching edges as a
/// hit, which makes an entity pushed flush against a wall collide again on
/// the other axis; zero-area contact must not block.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Move a hitbox by `delta`, sliding along any bodies it runs into.
/// Returns true if either axis was blocked.
pub fn move_and_slide(hitbox: &mut Rect, delta: Vec2, bodies: &[CollisionBody]) -> bool {
    let mut blocked = false;

    hitbox.x += delta.x;
    for body in bodies {
        if intersects(hitbox, &body.rect) {
            if delta.x > 0.0 {
                hitbox.x = body.rect.x - hitbox.w;
            } else if delta.x < 0.0 {
                hitbox.x = body.rect.x + body.rect.w;
            }
            blocked = true;
        }
    }

    hitbox.y += delta.y;
    for body in bodies {
        if intersects(hitbox, &body.rect) {
            if delta.y > 0.0 {
                hitbox.y = body.rect.y - hitbox.h;
            } else if delta.y < 0.0 {
                hitbox.y = body.rect.y + body.rect.h;
            }
            blocked = true;
        }
    }

    blocked
}

/// Does the rect overlap any body in the set?
pub fn hits_any(rect: &Rect, bodies: &[CollisionBody]) -> bool {
    bodies.iter().any(|b| intersects(rect, &b.rect))
}
