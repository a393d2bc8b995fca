//! Room layout templates
//!
//! The level editor's persisted format: a JSON document with an
//! `"objects"` list, one record per placed object, positioned in grid
//! cells relative to the owning room's origin. The interactive editor
//! itself is a separate tool; this module only speaks its format and
//! converts records into world coordinates for spawning.
//!
//! Placeable kinds are a closed enum so loading can never produce an
//! object the game does not know how to spawn, and walls and rocks stay
//! distinct kinds instead of sharing one ambiguous class.

use std::fs;
use std::path::Path;

use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::dungeon::Room;

/// Error type for layout loading and saving
#[derive(Debug)]
pub enum LayoutError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
}

impl From<std::io::Error> for LayoutError {
    fn from(e: std::io::Error) -> Self {
        LayoutError::IoError(e)
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(e: serde_json::Error) -> Self {
        LayoutError::ParseError(e)
    }
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::IoError(e) => write!(f, "IO error: {}", e),
            LayoutError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

/// Every kind of object a layout may place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceableKind {
    Wall,
    Rock,
    Coin,
    EnemyGreed,
    Spider,
}

impl PlaceableKind {
    /// Kinds that block movement get a collision body on spawn.
    pub fn is_collidable(&self) -> bool {
        matches!(self, PlaceableKind::Wall | PlaceableKind::Rock)
    }
}

/// One placed object, in grid cells relative to the room origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    #[serde(rename = "type")]
    pub kind: PlaceableKind,
    pub grid_x: i32,
    pub grid_y: i32,
}

impl ObjectRecord {
    /// World-space center of this object's cell inside `room`.
    pub fn world_center(&self, room: &Room, tile_size: f32) -> Vec2 {
        Vec2::new(
            room.world_x + self.grid_x as f32 * tile_size + tile_size / 2.0,
            room.world_y + self.grid_y as f32 * tile_size + tile_size / 2.0,
        )
    }
}

/// A full room template: everything under the `"objects"` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomLayout {
    pub objects: Vec<ObjectRecord>,
}

/// Load a layout template from a JSON file.
pub fn load_layout<P: AsRef<Path>>(path: P) -> Result<RoomLayout, LayoutError> {
    let contents = fs::read_to_string(path)?;
    let layout = serde_json::from_str(&contents)?;
    Ok(layout)
}

/// Save a layout template as pretty-printed JSON.
pub fn save_layout<P: AsRef<Path>>(layout: &RoomLayout, path: P) -> Result<(), LayoutError> {
    let json = serde_json::to_string_pretty(layout)?;
    fs::write(path, json)?;
    Ok(())
}
