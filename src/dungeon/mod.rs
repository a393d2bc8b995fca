//! Dungeon core
//!
//! Pure-logic layer: occupancy grid, randomized layout growth, boss
//! placement, and the room entities themselves. Nothing in here touches
//! the window or the GPU, so the whole module runs headless in tests.

pub mod boss;
pub mod generator;
pub mod grid;
pub mod room;

pub use generator::DungeonParams;
pub use grid::Grid;
pub use room::{room_at, Direction, Room};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{GameConfig, RoomGeometry};

/// A fully generated dungeon: the occupancy grid plus every room entity.
///
/// Built once at startup by [`GameWorld::initialize`]; rooms are never
/// removed afterwards, only their derived geometry comes and goes.
pub struct GameWorld {
    pub grid: Grid,
    pub rooms: Vec<Room>,
    /// Seed the layout was generated from, for reproducing a run.
    pub seed: u64,
}

impl GameWorld {
    /// Generate a dungeon from explicit parameters. No process-wide state:
    /// everything the generator needs comes in, everything it produces
    /// goes out.
    pub fn initialize(config: &GameConfig) -> GameWorld {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = SmallRng::seed_from_u64(seed);

        let params = DungeonParams {
            room_count: config.room_count,
            grid_size: config.grid_size,
        };
        let (grid, mut rooms) = generator::generate(&params, &mut rng);
        assign_world_positions(&mut rooms, &config.geometry);
        boss::place_boss(&grid, &mut rooms, config.boss_search_cap);

        log::info!(
            "generated dungeon: {} rooms on a {}x{} grid (seed {})",
            rooms.len(),
            grid.size(),
            grid.size(),
            seed
        );
        GameWorld { grid, rooms, seed }
    }

    pub fn start_room(&self) -> Option<usize> {
        self.rooms.iter().position(|r| r.start)
    }
}

/// Give every room a world-space origin from its grid cell, so rooms tile
/// the plane without overlapping and the camera can clamp to real bounds.
fn assign_world_positions(rooms: &mut [Room], geometry: &RoomGeometry) {
    for room in rooms.iter_mut() {
        room.world_x = room.grid_x as f32 * geometry.room_width;
        room.world_y = room.grid_y as f32 * geometry.room_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_reference_dungeon() {
        let config = GameConfig {
            seed: Some(9),
            ..Default::default()
        };
        let world = GameWorld::initialize(&config);
        assert_eq!(world.rooms.len(), 10);
        assert_eq!(world.grid.occupied_count(), 10);
        assert_eq!(world.seed, 9);

        let start = world.start_room().expect("start room exists");
        assert_eq!(
            (world.rooms[start].grid_x, world.rooms[start].grid_y),
            (3, 3)
        );
        assert_eq!(world.rooms.iter().filter(|r| r.boss).count(), 1);
    }

    #[test]
    fn test_world_positions_tile_the_plane() {
        let config = GameConfig {
            seed: Some(2),
            ..Default::default()
        };
        let world = GameWorld::initialize(&config);
        let geom = config.geometry;
        for room in &world.rooms {
            assert_eq!(room.world_x, room.grid_x as f32 * geom.room_width);
            assert_eq!(room.world_y, room.grid_y as f32 * geom.room_height);
        }
    }

    #[test]
    fn test_same_seed_reproduces_boss() {
        let config = GameConfig {
            seed: Some(77),
            room_count: 20,
            grid_size: 9,
            ..Default::default()
        };
        let a = GameWorld::initialize(&config);
        let b = GameWorld::initialize(&config);
        let boss = |w: &GameWorld| {
            w.rooms
                .iter()
                .find(|r| r.boss)
                .map(|r| (r.grid_x, r.grid_y))
        };
        assert_eq!(boss(&a), boss(&b));
        assert!(boss(&a).is_some());
    }
}
