//! Camera
//!
//! Follows the player and clamps to the current room's bounds. Rooms are
//! exactly one viewport in size by default, which makes the clamp range
//! degenerate and pins the view to the room - the classic one-screen-per-
//! room look. Larger rooms scroll within their bounds.

use macroquad::math::{Rect, Vec2};

/// Viewport offset into world space. World position minus the offset
/// gives the screen position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    pub offset: Vec2,
}

impl Camera {
    pub fn new() -> Self {
        Self { offset: Vec2::ZERO }
    }

    /// Center on `target`, clamped to `[room origin, room end - viewport]`
    /// per axis. When the room is no larger than the viewport the range
    /// collapses to the room origin.
    pub fn follow(&mut self, target: Vec2, room: Rect, viewport: Vec2) {
        self.offset = Vec2::new(
            clamp_axis(target.x - viewport.x / 2.0, room.x, room.x + room.w - viewport.x),
            clamp_axis(target.y - viewport.y / 2.0, room.y, room.y + room.h - viewport.y),
        );
    }

    /// World position to screen position.
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset
    }
}

fn clamp_axis(value: f32, lo: f32, hi: f32) -> f32 {
    // A room smaller than the viewport gives hi < lo; pin to the room
    // origin instead of panicking in f32::clamp.
    value.clamp(lo, hi.max(lo))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Vec2 = Vec2::new(1400.0, 800.0);

    #[test]
    fn test_viewport_sized_room_pins_camera() {
        let room = Rect::new(2800.0, 1600.0, 1400.0, 800.0);
        let mut camera = Camera::new();
        // Wherever the player stands, the camera stays on the room origin.
        camera.follow(Vec2::new(2850.0, 1650.0), room, VIEW);
        assert_eq!(camera.offset, Vec2::new(2800.0, 1600.0));
        camera.follow(Vec2::new(4100.0, 2350.0), room, VIEW);
        assert_eq!(camera.offset, Vec2::new(2800.0, 1600.0));
    }

    #[test]
    fn test_large_room_scrolls_and_clamps() {
        let room = Rect::new(0.0, 0.0, 2800.0, 1600.0);
        let mut camera = Camera::new();

        // Center of the room: camera centers on the player.
        camera.follow(Vec2::new(1400.0, 800.0), room, VIEW);
        assert_eq!(camera.offset, Vec2::new(700.0, 400.0));

        // Near the far corner: clamped to room end minus viewport.
        camera.follow(Vec2::new(2790.0, 1590.0), room, VIEW);
        assert_eq!(camera.offset, Vec2::new(1400.0, 800.0));

        // Near the origin: clamped to the room origin.
        camera.follow(Vec2::new(10.0, 10.0), room, VIEW);
        assert_eq!(camera.offset, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_room_smaller_than_viewport() {
        let room = Rect::new(100.0, 100.0, 700.0, 400.0);
        let mut camera = Camera::new();
        camera.follow(Vec2::new(450.0, 300.0), room, VIEW);
        assert_eq!(camera.offset, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_to_screen() {
        let camera = Camera {
            offset: Vec2::new(100.0, 50.0),
        };
        assert_eq!(camera.to_screen(Vec2::new(150.0, 50.0)), Vec2::new(50.0, 0.0));
    }
}
