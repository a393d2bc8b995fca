//! Room lifecycle
//!
//! Materializes and dematerializes room geometry as the player moves.
//! A materialized room has a surface description (floor background plus
//! door decals), a world-space rect, and its wall collision bodies; an
//! unloaded room keeps only its identity and flags. The policy is
//! "current room plus 4-neighborhood": those get built on every
//! transition, everything further out may be torn down.

use std::f32::consts::FRAC_PI_2;

use macroquad::math::{Rect, Vec2};

use crate::config::RoomGeometry;
use crate::dungeon::{room_at, Direction, Room};

use super::collision::CollisionBody;

/// How far the left/right door decal sits from the room edge.
const DOOR_INSET: f32 = 15.0;

/// One door image placement inside a room surface. Positions are
/// room-local; the renderer adds the room's world origin.
#[derive(Debug, Clone, Copy)]
pub struct DoorDecal {
    pub side: Direction,
    /// Center of the drawn door, room-local
    pub center: Vec2,
    /// Rotation in radians around the center
    pub rotation: f32,
    pub flip_x: bool,
    pub flip_y: bool,
}

/// Renderable description of a materialized room: a floor background
/// stretched to the room size, with one decal per open door. Kept as
/// data rather than a GPU surface so the core stays testable headless.
#[derive(Debug, Clone)]
pub struct RoomSurface {
    pub size: Vec2,
    pub decals: Vec<DoorDecal>,
}

/// Build a room's surface, rect, and wall bodies. No-op if already loaded.
pub fn materialize(room: &mut Room, geom: &RoomGeometry) {
    if room.loaded {
        return;
    }

    room.surface = Some(build_surface(room, geom));
    room.rect = Some(Rect::new(
        room.world_x,
        room.world_y,
        geom.room_width,
        geom.room_height,
    ));
    room.bodies = build_wall_bodies(room, geom);
    room.loaded = true;
}

/// Tear down derived geometry. Identity, flags, and door layout survive;
/// only the surface, rect, and bodies are freed. No-op if not loaded.
pub fn dematerialize(room: &mut Room) {
    if !room.loaded {
        return;
    }
    room.surface = None;
    room.rect = None;
    room.bodies.clear();
    room.loaded = false;
}

/// Ensure the current room and its four grid-neighbors are materialized.
pub fn load_adjacent_rooms(rooms: &mut [Room], current: usize, geom: &RoomGeometry) {
    materialize(&mut rooms[current], geom);
    let (cx, cy) = (rooms[current].grid_x, rooms[current].grid_y);
    for dir in Direction::ALL {
        let (dx, dy) = dir.delta();
        if let Some(idx) = room_at(rooms, cx + dx, cy + dy) {
            materialize(&mut rooms[idx], geom);
        }
    }
}

/// Unload every loaded room outside the current 4-neighborhood. Purely a
/// memory optimization; callers may skip it and keep rooms warm.
pub fn unload_distant_rooms(rooms: &mut [Room], current: usize) {
    let (cx, cy) = (rooms[current].grid_x, rooms[current].grid_y);
    for room in rooms.iter_mut() {
        let (dx, dy) = (room.grid_x - cx, room.grid_y - cy);
        let nearby = (dx == 0 && dy.abs() <= 1) || (dy == 0 && dx.abs() <= 1);
        if !nearby {
            dematerialize(room);
        }
    }
}

fn build_surface(room: &Room, geom: &RoomGeometry) -> RoomSurface {
    let (w, h) = (geom.room_width, geom.room_height);
    let (dw, dh) = (geom.door_width, geom.door_height);
    let t = geom.wall_thickness;
    let mut decals = Vec::new();

    if room.door_up {
        decals.push(DoorDecal {
            side: Direction::Up,
            center: Vec2::new(w / 2.0, dh / 2.0),
            rotation: 0.0,
            flip_x: false,
            flip_y: false,
        });
    }
    if room.door_down {
        decals.push(DoorDecal {
            side: Direction::Down,
            center: Vec2::new(w / 2.0, h - dh / 2.0),
            rotation: 0.0,
            flip_x: false,
            flip_y: true,
        });
    }
    if room.door_left {
        decals.push(DoorDecal {
            side: Direction::Left,
            center: Vec2::new(DOOR_INSET + t / 2.0, h / 2.0),
            rotation: FRAC_PI_2,
            flip_x: false,
            flip_y: false,
        });
    }
    if room.door_right {
        decals.push(DoorDecal {
            side: Direction::Right,
            center: Vec2::new(w - DOOR_INSET - t / 2.0, h / 2.0),
            rotation: FRAC_PI_2,
            flip_x: true,
            flip_y: false,
        });
    }

    RoomSurface {
        size: Vec2::new(w, h),
        decals,
    }
}

/// Lay out the perimeter wall bodies from the door flags.
///
/// A doorless side gets one full-length body. A side with a door gets two
/// flanking segments leaving the gap passable: exactly door-width on
/// top/bottom, door-height plus extra clearance on left/right.
fn build_wall_bodies(room: &Room, geom: &RoomGeometry) -> Vec<CollisionBody> {
    let (w, h) = (geom.room_width, geom.room_height);
    let t = geom.wall_thickness;
    let gap_x = geom.door_gap_x();
    let gap_y = geom.door_gap_y();
    let origin = Vec2::new(room.world_x, room.world_y);
    let mut bodies = Vec::new();

    let mut body = |center: Vec2, size: Vec2| {
        bodies.push(CollisionBody::from_center(origin + center, size));
    };

    // Top wall
    if !room.door_up {
        body(Vec2::new(w / 2.0, t / 2.0), Vec2::new(w, t));
    } else {
        let right_w = w - (gap_x + geom.door_width);
        body(Vec2::new(gap_x / 2.0, t / 2.0), Vec2::new(gap_x, t));
        body(
            Vec2::new(gap_x + geom.door_width + right_w / 2.0, t / 2.0),
            Vec2::new(right_w, t),
        );
    }

    // Bottom wall
    if !room.door_down {
        body(Vec2::new(w / 2.0, h - t / 2.0), Vec2::new(w, t));
    } else {
        let right_w = w - (gap_x + geom.door_width);
        body(Vec2::new(gap_x / 2.0, h - t / 2.0), Vec2::new(gap_x, t));
        body(
            Vec2::new(gap_x + geom.door_width + right_w / 2.0, h - t / 2.0),
            Vec2::new(right_w, t),
        );
    }

    // Left wall
    if !room.door_left {
        body(Vec2::new(t / 2.0, h / 2.0), Vec2::new(t, h));
    } else {
        let below_y = gap_y + geom.door_height + geom.door_clearance;
        let below_h = h - below_y;
        body(Vec2::new(t / 2.0, gap_y / 2.0), Vec2::new(t, gap_y));
        body(
            Vec2::new(t / 2.0, below_y + below_h / 2.0),
            Vec2::new(t, below_h),
        );
    }

    // Right wall
    if !room.door_right {
        body(Vec2::new(w - t / 2.0, h / 2.0), Vec2::new(t, h));
    } else {
        let below_y = gap_y + geom.door_height + geom.door_clearance;
        let below_h = h - below_y;
        body(Vec2::new(w - t / 2.0, gap_y / 2.0), Vec2::new(t, gap_y));
        body(
            Vec2::new(w - t / 2.0, below_y + below_h / 2.0),
            Vec2::new(t, below_h),
        );
    }

    bodies
}
