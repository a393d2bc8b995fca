//! Dungeon layout generation
//!
//! Randomized adjacency growth: start from the center cell, then keep
//! attaching rooms to uniformly-chosen already-placed rooms until the
//! requested count is reached. Every room is placed adjacent to an
//! existing one, so the final graph is connected by construction. Door
//! flags are derived from the finished occupancy in a single pass.

use rand::Rng;

use super::grid::Grid;
use super::room::{Direction, Room};

/// Parameters for one generation run.
#[derive(Debug, Clone, Copy)]
pub struct DungeonParams {
    /// Total rooms, start room included. Must be >= 1.
    pub room_count: usize,
    /// Side length of the square placement grid.
    pub grid_size: usize,
}

/// Attempts per growth iteration before abandoning the anchor and
/// drawing a fresh one. Exhaustion is not an error: the outer loop just
/// tries again, so generation always settles for reasonable densities.
const PLACEMENT_ATTEMPTS: usize = 10;

/// Generate a dungeon layout.
///
/// Returns the occupancy grid and the rooms in insertion order: the start
/// room is first, flagged `start`, at the exact center of the grid. The
/// flag is the authoritative marker, not the index.
pub fn generate<R: Rng>(params: &DungeonParams, rng: &mut R) -> (Grid, Vec<Room>) {
    let mut grid = Grid::new(params.grid_size);
    let mut rooms: Vec<Room> = Vec::with_capacity(params.room_count);
    let mut placed: Vec<(i32, i32)> = Vec::with_capacity(params.room_count);

    let (cx, cy) = grid.center();
    let mut start_room = Room::new(cx, cy);
    start_room.start = true;
    grid.occupy(cx, cy);
    placed.push((cx, cy));
    rooms.push(start_room);

    let mut rooms_to_place = params.room_count.saturating_sub(1);
    while rooms_to_place > 0 {
        let (anchor_x, anchor_y) = placed[rng.gen_range(0..placed.len())];

        for _ in 0..PLACEMENT_ATTEMPTS {
            let dir = Direction::ALL[rng.gen_range(0..4)];
            let (dx, dy) = dir.delta();
            let (new_x, new_y) = (anchor_x + dx, anchor_y + dy);

            if grid.is_valid_placement(new_x, new_y) {
                grid.occupy(new_x, new_y);
                placed.push((new_x, new_y));
                rooms.push(Room::new(new_x, new_y));
                rooms_to_place -= 1;
                break;
            }
        }
    }

    set_room_doors(&grid, &mut rooms);
    (grid, rooms)
}

/// Derive door flags from final occupancy: a door opens toward every
/// occupied orthogonal neighbor. Symmetry falls out of adjacency being
/// symmetric, so no per-pair bookkeeping is needed.
fn set_room_doors(grid: &Grid, rooms: &mut [Room]) {
    for room in rooms.iter_mut() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            if grid.in_grid_and_occupied(room.grid_x + dx, room.grid_y + dy) {
                room.set_door(dir, true);
            }
        }
    }
}
