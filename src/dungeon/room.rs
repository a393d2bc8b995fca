//! Room entity
//!
//! One cell of the dungeon. Identity (grid coordinates) and classification
//! flags are fixed at generation time; door flags are derived from final
//! occupancy and never set independently. Geometry (surface, rect, wall
//! bodies) is built lazily by the lifecycle manager and torn down again
//! when the room leaves the active neighborhood - the entity itself lives
//! for the whole session so the minimap and backtracking keep working.

use macroquad::math::Rect;

use crate::game::collision::CollisionBody;
use crate::game::lifecycle::RoomSurface;

/// The four cardinal directions on the room grid.
/// Grid y grows downward, matching screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid-coordinate delta for one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// One dungeon room.
pub struct Room {
    // Identity, fixed for life
    pub grid_x: i32,
    pub grid_y: i32,

    // Classification flags
    pub start: bool,
    pub boss: bool,
    pub shop: bool,

    // Door flags, derived from final grid occupancy. A door toward a
    // neighbor implies the neighbor exists and has the mirrored flag.
    pub door_up: bool,
    pub door_down: bool,
    pub door_left: bool,
    pub door_right: bool,

    /// World-space pixel origin (top-left corner)
    pub world_x: f32,
    pub world_y: f32,

    // Materialized geometry, present only while loaded
    pub surface: Option<RoomSurface>,
    pub rect: Option<Rect>,
    /// Wall and flanking-segment bodies. Owned exclusively by this room;
    /// only the lifecycle manager mutates the collection.
    pub bodies: Vec<CollisionBody>,
    pub loaded: bool,
}

impl Room {
    pub fn new(grid_x: i32, grid_y: i32) -> Self {
        Self {
            grid_x,
            grid_y,
            start: false,
            boss: false,
            shop: false,
            door_up: false,
            door_down: false,
            door_left: false,
            door_right: false,
            world_x: 0.0,
            world_y: 0.0,
            surface: None,
            rect: None,
            bodies: Vec::new(),
            loaded: false,
        }
    }

    pub fn has_door(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.door_up,
            Direction::Down => self.door_down,
            Direction::Left => self.door_left,
            Direction::Right => self.door_right,
        }
    }

    pub(crate) fn set_door(&mut self, dir: Direction, open: bool) {
        match dir {
            Direction::Up => self.door_up = open,
            Direction::Down => self.door_down = open,
            Direction::Left => self.door_left = open,
            Direction::Right => self.door_right = open,
        }
    }

    /// Number of open doors, for the minimap and sanity checks.
    pub fn door_count(&self) -> usize {
        [self.door_up, self.door_down, self.door_left, self.door_right]
            .iter()
            .filter(|&&d| d)
            .count()
    }
}

/// Find the room at the given grid coordinates.
pub fn room_at(rooms: &[Room], grid_x: i32, grid_y: i32) -> Option<usize> {
    rooms
        .iter()
        .position(|r| r.grid_x == grid_x && r.grid_y == grid_y)
}
