//! Boss room placement
//!
//! Breadth-first search over the adjacency graph from the start room,
//! recording the distance of every reached cell. The room at maximum
//! recorded distance is tagged boss; ties go to the cell reached first,
//! which keeps the result deterministic for a given layout.

use std::collections::{HashSet, VecDeque};

use super::grid::Grid;
use super::room::Room;

/// Tag the most distant reachable room as the boss room.
///
/// `cap` bounds how many rooms the search may reach before it stops
/// expanding; with a cap, "most distant" means most distant among the
/// first-reached set, not globally. `None` searches the whole graph.
///
/// A dungeon with no start room is reported and left untouched - the
/// caller must tolerate a graph with no boss.
pub fn place_boss(grid: &Grid, rooms: &mut [Room], cap: Option<usize>) {
    let start = match rooms.iter().find(|r| r.start) {
        Some(room) => (room.grid_x, room.grid_y),
        None => {
            log::warn!("no start room found, boss not placed");
            return;
        }
    };

    let mut reached: HashSet<(i32, i32)> = HashSet::new();
    let mut queue: VecDeque<(i32, i32, u32)> = VecDeque::new();
    reached.insert(start);
    queue.push_back((start.0, start.1, 0));

    // Track the running maximum in reach order instead of scanning a map
    // afterwards, so ties break on the first-reached cell.
    let mut furthest = start;
    let mut max_distance = 0u32;

    while let Some((x, y, distance)) = queue.pop_front() {
        if cap.is_some_and(|cap| reached.len() >= cap) {
            break;
        }
        for (dx, dy) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
            let neighbor = (x + dx, y + dy);
            if grid.in_grid_and_occupied(neighbor.0, neighbor.1) && reached.insert(neighbor) {
                let neighbor_distance = distance + 1;
                if neighbor_distance > max_distance {
                    max_distance = neighbor_distance;
                    furthest = neighbor;
                }
                queue.push_back((neighbor.0, neighbor.1, neighbor_distance));
            }
        }
    }

    match rooms
        .iter_mut()
        .find(|r| (r.grid_x, r.grid_y) == furthest)
    {
        Some(room) => {
            room.boss = true;
            log::debug!(
                "boss room at ({}, {}), distance {} from start",
                furthest.0,
                furthest.1,
                max_distance
            );
        }
        None => log::warn!(
            "furthest cell ({}, {}) has no room entry, boss not placed",
            furthest.0,
            furthest.1
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a grid and room list from a corridor of coordinates.
    fn corridor(coords: &[(i32, i32)], size: usize) -> (Grid, Vec<Room>) {
        let mut grid = Grid::new(size);
        let mut rooms = Vec::new();
        for (i, &(x, y)) in coords.iter().enumerate() {
            grid.occupy(x, y);
            let mut room = Room::new(x, y);
            room.start = i == 0;
            rooms.push(room);
        }
        (grid, rooms)
    }

    #[test]
    fn test_boss_at_end_of_corridor() {
        let (grid, mut rooms) = corridor(&[(3, 3), (4, 3), (5, 3), (6, 3)], 7);
        place_boss(&grid, &mut rooms, None);
        assert!(rooms[3].boss);
        assert_eq!(rooms.iter().filter(|r| r.boss).count(), 1);
    }

    #[test]
    fn test_start_room_is_boss_when_alone() {
        let (grid, mut rooms) = corridor(&[(3, 3)], 7);
        place_boss(&grid, &mut rooms, None);
        assert!(rooms[0].boss);
    }

    #[test]
    fn test_no_start_room_places_no_boss() {
        let (grid, mut rooms) = corridor(&[(3, 3), (4, 3)], 7);
        rooms[0].start = false;
        place_boss(&grid, &mut rooms, None);
        assert!(rooms.iter().all(|r| !r.boss));
    }

    #[test]
    fn test_cap_limits_search_depth() {
        // Long corridor, cap of 3: only the first three cells are reached
        // before expansion stops, so the boss lands within that set.
        let coords: Vec<(i32, i32)> = (0..9).map(|x| (x, 4)).collect();
        let (grid, mut rooms) = corridor(&coords, 9);
        rooms[0].start = false;
        rooms[4].start = true; // start mid-corridor at (4, 4)
        place_boss(&grid, &mut rooms, Some(3));
        let boss = rooms.iter().find(|r| r.boss).expect("boss placed");
        // With the cap the search never reaches the corridor ends.
        assert!((boss.grid_x - 4).abs() <= 2);
        assert!(boss.grid_x != 4, "boss should not stay on the start room");
    }

    #[test]
    fn test_boss_distance_is_maximal() {
        // T shape: long arm right, short arm up. Boss must take the long arm.
        let (grid, mut rooms) = corridor(
            &[(3, 3), (4, 3), (5, 3), (6, 3), (7, 3), (3, 2)],
            9,
        );
        place_boss(&grid, &mut rooms, None);
        let boss = rooms.iter().find(|r| r.boss).unwrap();
        assert_eq!((boss.grid_x, boss.grid_y), (7, 3));
    }

    #[test]
    fn test_boss_never_isolated_cell() {
        // An occupied cell not reachable from start (no adjacency path)
        // must not receive the boss flag.
        let (grid, mut rooms) = corridor(&[(3, 3), (4, 3), (0, 0)], 7);
        place_boss(&grid, &mut rooms, None);
        let boss = rooms.iter().find(|r| r.boss).unwrap();
        assert_eq!((boss.grid_x, boss.grid_y), (4, 3));
    }
}
