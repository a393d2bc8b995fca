//! Game configuration
//!
//! Uses RON (Rusty Object Notation) for a human-readable config file.
//! Every field has a default so a missing or partial file still produces
//! a playable setup. Loaded once at startup; validated against hard
//! limits before use.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Validation limits for generation parameters
pub mod limits {
    /// Maximum number of rooms in a dungeon
    pub const MAX_ROOMS: usize = 256;
    /// Minimum grid dimension (a 3x3 board is the smallest with a real center)
    pub const MIN_GRID_SIZE: usize = 3;
    /// Maximum grid dimension
    pub const MAX_GRID_SIZE: usize = 64;
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// Pixel dimensions of one room and its wall/door geometry.
///
/// A room fills exactly one viewport, so the camera clamp range per room
/// is degenerate and the view snaps from room to room.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomGeometry {
    /// Room width in pixels (also the viewport width)
    pub room_width: f32,
    /// Room height in pixels (also the viewport height)
    pub room_height: f32,
    /// Thickness of the perimeter wall bodies
    pub wall_thickness: f32,
    /// Door opening width (along the wall, for top/bottom doors)
    pub door_width: f32,
    /// Door opening height (along the wall, for left/right doors)
    pub door_height: f32,
    /// Extra passable clearance below left/right door gaps
    pub door_clearance: f32,
    /// Grid snap size for placed objects (rocks, coins, enemies)
    pub tile_size: f32,
}

impl Default for RoomGeometry {
    fn default() -> Self {
        Self {
            room_width: 1400.0,
            room_height: 800.0,
            wall_thickness: 50.0,
            door_width: 161.0,
            door_height: 86.0,
            door_clearance: 80.0,
            tile_size: 57.0,
        }
    }
}

impl RoomGeometry {
    /// X of the door gap on top/bottom walls (room-local)
    pub fn door_gap_x(&self) -> f32 {
        self.room_width / 2.0 - self.door_width / 2.0
    }

    /// Y of the door gap on left/right walls (room-local)
    pub fn door_gap_y(&self) -> f32 {
        self.room_height / 2.0 - self.door_height / 2.0
    }
}

/// Top-level game configuration, read from `catacomb.ron` when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for dungeon generation. None picks a fresh seed each run
    /// (the chosen seed is logged so a layout can be reproduced).
    pub seed: Option<u64>,
    /// Total rooms to place, start room included
    pub room_count: usize,
    /// Side length of the square placement grid (odd sizes have a true center)
    pub grid_size: usize,
    /// Reached-room cap for the boss-placement BFS. None searches the whole
    /// graph; Some(n) stops expanding once n rooms have been reached, which
    /// places the boss at the furthest room among the first n.
    pub boss_search_cap: Option<usize>,
    /// Unload rooms that fall outside the current 4-neighborhood on every
    /// transition. Off by default: unloading is a memory optimization, and
    /// re-materializing on backtrack costs more than keeping rooms warm.
    pub unload_far_rooms: bool,
    /// Room/wall/door pixel dimensions
    pub geometry: RoomGeometry,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            room_count: 10,
            grid_size: 7,
            boss_search_cap: None,
            unload_far_rooms: false,
            geometry: RoomGeometry::default(),
        }
    }
}

impl GameConfig {
    /// Load config from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: GameConfig = ron::from_str(&contents)?;
        config.validate().map_err(ConfigError::ValidationError)?;
        Ok(config)
    }

    /// Load config, falling back to defaults if the file is missing or bad.
    /// A missing file is expected on first run and logged at debug only.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> GameConfig {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                GameConfig::default()
            }
            Err(e) => {
                log::warn!("config {} rejected ({}), using defaults", path.display(), e);
                GameConfig::default()
            }
        }
    }

    /// Check generation parameters against hard limits.
    pub fn validate(&self) -> Result<(), String> {
        if self.room_count == 0 {
            return Err("room_count must be at least 1".to_string());
        }
        if self.room_count > limits::MAX_ROOMS {
            return Err(format!(
                "room_count too large ({} > {})",
                self.room_count,
                limits::MAX_ROOMS
            ));
        }
        if self.grid_size < limits::MIN_GRID_SIZE {
            return Err(format!(
                "grid_size too small ({} < {})",
                self.grid_size,
                limits::MIN_GRID_SIZE
            ));
        }
        if self.grid_size > limits::MAX_GRID_SIZE {
            return Err(format!(
                "grid_size too large ({} > {})",
                self.grid_size,
                limits::MAX_GRID_SIZE
            ));
        }
        if self.geometry.room_width <= 0.0 || self.geometry.room_height <= 0.0 {
            return Err("room dimensions must be positive".to_string());
        }
        // The anti-square rule caps usable density around half the board;
        // denser requests can spin for a long time before settling.
        if self.room_count > self.grid_size * self.grid_size / 2 {
            log::warn!(
                "room_count {} is dense for a {}x{} grid, generation may be slow",
                self.room_count,
                self.grid_size,
                self.grid_size
            );
        }
        if self.grid_size % 2 == 0 {
            log::warn!("grid_size {} is even, the start room sits off-center", self.grid_size);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_rooms() {
        let config = GameConfig {
            room_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let config = GameConfig {
            grid_size: 2,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(room_count: 12, seed: Some(7))").unwrap();
        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.room_count, 12);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.grid_size, 7);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = GameConfig::load_or_default("does/not/exist.ron");
        assert_eq!(config.room_count, GameConfig::default().room_count);
    }

    #[test]
    fn test_door_gap_is_centered() {
        let geom = RoomGeometry::default();
        assert_eq!(geom.door_gap_x(), (1400.0 - 161.0) / 2.0);
        assert_eq!(geom.door_gap_y(), (800.0 - 86.0) / 2.0);
    }
}
