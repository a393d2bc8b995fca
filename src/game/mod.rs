//! Game state and per-frame simulation
//!
//! The `Game` struct owns the generated dungeon, the player, and all
//! transient room content (tears, enemies, placed objects), and steps
//! everything once per rendered frame. Input and the clock come in as
//! plain values so the whole simulation runs headless in tests.

pub mod camera;
pub mod collision;
pub mod enemies;
pub mod lifecycle;
pub mod player;
pub mod tears;
pub mod transition;

pub use camera::Camera;
pub use collision::CollisionBody;
pub use enemies::{Enemy, EnemyKind};
pub use player::Player;
pub use tears::{ShotTimer, Tear};
pub use transition::TransitionState;

use macroquad::math::{Rect, Vec2};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::{GameConfig, RoomGeometry};
use crate::dungeon::{room_at, Direction, GameWorld};
use crate::layout::{ObjectRecord, PlaceableKind, RoomLayout};

/// Distance from the room edge at which a door triggers a transition.
const DOOR_THRESHOLD_LR: f32 = 15.0;
const DOOR_THRESHOLD_UD: f32 = 10.0;
/// How far inside the entered side the player reappears.
const ENTRY_MARGIN: f32 = 50.0;

/// One frame of player intent, polled by the platform layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Movement direction, unnormalized (-1..1 per axis)
    pub move_dir: Vec2,
    /// Cardinal shoot direction, if a fire key is held
    pub shoot_dir: Option<Vec2>,
}

/// A collectible coin.
pub struct Coin {
    pub rect: Rect,
}

/// A placed object with a physical footprint (wall or rock).
pub struct Prop {
    pub kind: PlaceableKind,
    pub rect: Rect,
}

pub struct Game {
    pub world: GameWorld,
    pub geometry: RoomGeometry,
    pub current_room: usize,

    pub player: Player,
    pub tears: Vec<Tear>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub props: Vec<Prop>,
    pub coins_collected: u32,

    pub camera: Camera,
    pub transition: TransitionState,
    pub shot_timer: ShotTimer,

    /// Flattened collision set for the current room: its wall bodies plus
    /// any collidable props. Rebuilt atomically on transition and on
    /// object placement, never mutated mid-query.
    active_bodies: Vec<CollisionBody>,
    /// Records behind the currently placed objects, for template saving.
    placed: Vec<ObjectRecord>,

    unload_far_rooms: bool,
    rng: SmallRng,
}

impl Game {
    /// Generate a dungeon and drop the player into the start room.
    pub fn new(config: &GameConfig) -> Self {
        let mut world = GameWorld::initialize(config);
        let current_room = world.start_room().unwrap_or(0);
        lifecycle::materialize(&mut world.rooms[current_room], &config.geometry);

        let room = &world.rooms[current_room];
        let start_center = Vec2::new(
            room.world_x + config.geometry.room_width / 2.0,
            room.world_y + config.geometry.room_height / 2.0,
        );
        let rng = SmallRng::seed_from_u64(world.seed);

        let mut game = Self {
            world,
            geometry: config.geometry,
            current_room,
            player: Player::new(start_center),
            tears: Vec::new(),
            enemies: Vec::new(),
            coins: Vec::new(),
            props: Vec::new(),
            coins_collected: 0,
            camera: Camera::new(),
            transition: TransitionState::new(),
            shot_timer: ShotTimer::new(),
            active_bodies: Vec::new(),
            placed: Vec::new(),
            unload_far_rooms: config.unload_far_rooms,
            rng,
        };
        game.refresh_active_bodies();
        game.update_camera();
        game
    }

    pub fn current_room(&self) -> &crate::dungeon::Room {
        &self.world.rooms[self.current_room]
    }

    /// Read-only view of the collision set physics queries run against.
    pub fn active_collision_bodies(&self) -> &[CollisionBody] {
        &self.active_bodies
    }

    /// Step one frame. While a transition is running, gameplay is
    /// suspended: only the timer advances and transient tears are culled.
    pub fn tick(&mut self, input: &FrameInput, dt: f32, now: f64) {
        if self.transition.is_transitioning() {
            self.transition.update(now);
            self.tears.clear();
            self.shot_timer.reset();
            return;
        }

        self.player
            .update(input.move_dir, dt, &self.active_bodies);

        self.shot_timer.update(now);
        if let Some(dir) = input.shoot_dir {
            if self.shot_timer.can_shoot() {
                let muzzle = self.player.center() + dir * tears::MUZZLE_OFFSET;
                self.tears.push(Tear::new(muzzle, dir, now));
                self.shot_timer.mark_shot(now);
            }
        }

        // Tears: fly, expire, hit walls and enemies
        let mut tears = std::mem::take(&mut self.tears);
        tears.retain_mut(|tear| {
            if !tear.update(dt, now, &self.active_bodies) {
                return false;
            }
            for enemy in self.enemies.iter_mut() {
                if collision::intersects(&tear.rect, &enemy.hitbox) {
                    enemy.take_damage(1);
                    return false;
                }
            }
            true
        });
        self.tears = tears;
        self.enemies.retain(|e| e.hp > 0);

        for enemy in self.enemies.iter_mut() {
            enemy.update(
                self.player.center(),
                &self.active_bodies,
                dt,
                now,
                &mut self.rng,
            );
        }

        // Coin pickup
        let player_hitbox = self.player.hitbox;
        let collected = &mut self.coins_collected;
        self.coins.retain(|coin| {
            if collision::intersects(&coin.rect, &player_hitbox) {
                *collected += 1;
                false
            } else {
                true
            }
        });

        self.update_camera();
        self.check_room_transition(now);
    }

    /// World-space rect of the current room. Falls back to coordinates if
    /// the room is somehow unloaded, so the camera never loses its frame.
    pub fn current_room_rect(&self) -> Rect {
        let room = self.current_room();
        room.rect.unwrap_or(Rect::new(
            room.world_x,
            room.world_y,
            self.geometry.room_width,
            self.geometry.room_height,
        ))
    }

    fn update_camera(&mut self) {
        let viewport = Vec2::new(self.geometry.room_width, self.geometry.room_height);
        self.camera
            .follow(self.player.center(), self.current_room_rect(), viewport);
    }

    /// Fire a transition if the player is pressing against a door side.
    fn check_room_transition(&mut self, now: f64) {
        let rect = self.current_room_rect();
        let hitbox = self.player.hitbox;
        let room = self.current_room();

        if hitbox.x < rect.x + DOOR_THRESHOLD_LR && room.door_left {
            self.change_room(Direction::Left, now);
        } else if hitbox.x + hitbox.w > rect.x + rect.w - DOOR_THRESHOLD_LR && room.door_right {
            self.change_room(Direction::Right, now);
        } else if hitbox.y < rect.y + DOOR_THRESHOLD_UD && room.door_up {
            self.change_room(Direction::Up, now);
        } else if hitbox.y + hitbox.h > rect.y + rect.h - DOOR_THRESHOLD_UD && room.door_down {
            self.change_room(Direction::Down, now);
        }
    }

    /// Move to the neighbor room in `dir`. Debounced by the transition
    /// state; a missing neighbor is a logged no-op, checked before any
    /// state changes.
    fn change_room(&mut self, dir: Direction, now: f64) {
        if self.transition.is_transitioning() {
            return;
        }

        let (dx, dy) = dir.delta();
        let room = self.current_room();
        let target = match room_at(&self.world.rooms, room.grid_x + dx, room.grid_y + dy) {
            Some(idx) => idx,
            None => {
                log::warn!(
                    "door {:?} from ({}, {}) leads to a missing room",
                    dir,
                    room.grid_x,
                    room.grid_y
                );
                return;
            }
        };

        self.transition.begin(now);

        // Old room's transient content does not follow the player
        self.enemies.clear();
        self.tears.clear();
        self.coins.clear();
        self.props.clear();
        self.placed.clear();

        self.current_room = target;
        lifecycle::load_adjacent_rooms(&mut self.world.rooms, target, &self.geometry);
        if self.unload_far_rooms {
            lifecycle::unload_distant_rooms(&mut self.world.rooms, target);
        }
        self.refresh_active_bodies();

        // Reappear just inside the entered side, opposite the travel
        // direction, keeping the perpendicular coordinate.
        let rect = self.current_room_rect();
        let hitbox = self.player.hitbox;
        let center = match dir {
            Direction::Right => Vec2::new(rect.x + ENTRY_MARGIN + hitbox.w / 2.0, hitbox.y + hitbox.h / 2.0),
            Direction::Left => Vec2::new(rect.x + rect.w - ENTRY_MARGIN - hitbox.w / 2.0, hitbox.y + hitbox.h / 2.0),
            Direction::Down => Vec2::new(hitbox.x + hitbox.w / 2.0, rect.y + ENTRY_MARGIN + hitbox.h / 2.0),
            Direction::Up => Vec2::new(hitbox.x + hitbox.w / 2.0, rect.y + rect.h - ENTRY_MARGIN - hitbox.h / 2.0),
        };
        self.player.set_center(center);
        self.shot_timer.reset();
        self.update_camera();
    }

    /// Spawn a room template's objects into the current room.
    pub fn apply_layout(&mut self, layout: &RoomLayout) {
        for record in &layout.objects {
            let center = record.world_center(self.current_room(), self.geometry.tile_size);
            let tile = self.geometry.tile_size;
            match record.kind {
                PlaceableKind::EnemyGreed => {
                    self.enemies.push(Enemy::new(EnemyKind::Greed, center));
                }
                PlaceableKind::Spider => {
                    self.enemies.push(Enemy::new(EnemyKind::Spider, center));
                }
                PlaceableKind::Coin => {
                    let size = tile / 2.0;
                    self.coins.push(Coin {
                        rect: Rect::new(center.x - size / 2.0, center.y - size / 2.0, size, size),
                    });
                }
                PlaceableKind::Wall | PlaceableKind::Rock => {
                    self.props.push(Prop {
                        kind: record.kind,
                        rect: Rect::new(center.x - tile / 2.0, center.y - tile / 2.0, tile, tile),
                    });
                }
            }
        }
        self.placed.extend(layout.objects.iter().copied());
        self.refresh_active_bodies();
    }

    /// The current room's placed objects as a saveable template.
    pub fn layout_snapshot(&self) -> RoomLayout {
        RoomLayout {
            objects: self.placed.clone(),
        }
    }

    /// Rebuild the flattened collision set from the current room's walls
    /// plus collidable props. Called at the points where the set legally
    /// changes; queries in between see a stable slice.
    fn refresh_active_bodies(&mut self) {
        self.active_bodies.clear();
        self.active_bodies
            .extend_from_slice(&self.world.rooms[self.current_room].bodies);
        self.active_bodies.extend(
            self.props
                .iter()
                .filter(|p| p.kind.is_collidable())
                .map(|p| CollisionBody::new(p.rect)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::transition::TRANSITION_DURATION;

    fn test_config() -> GameConfig {
        GameConfig {
            seed: Some(11),
            ..Default::default()
        }
    }

    fn idle_input() -> FrameInput {
        FrameInput::default()
    }

    /// Pick a door direction the start room actually has.
    fn some_door(game: &Game) -> Direction {
        Direction::ALL
            .into_iter()
            .find(|&d| game.current_room().has_door(d))
            .expect("start room has at least one door")
    }

    /// Park the player hitbox just past the trigger threshold on `dir`.
    fn stand_at_door(game: &mut Game, dir: Direction) {
        let rect = game.current_room_rect();
        let hb = game.player.hitbox;
        let center = match dir {
            Direction::Left => Vec2::new(rect.x + 10.0 + hb.w / 2.0, rect.y + rect.h / 2.0),
            Direction::Right => Vec2::new(rect.x + rect.w - 10.0 - hb.w / 2.0, rect.y + rect.h / 2.0),
            Direction::Up => Vec2::new(rect.x + rect.w / 2.0, rect.y + 5.0 + hb.h / 2.0),
            Direction::Down => Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h - 5.0 - hb.h / 2.0),
        };
        game.player.set_center(center);
    }

    #[test]
    fn test_new_game_starts_in_start_room() {
        let game = Game::new(&test_config());
        assert!(game.current_room().start);
        assert!(game.current_room().loaded);
        assert!(!game.active_collision_bodies().is_empty());

        let rect = game.current_room_rect();
        assert!(rect.contains(game.player.center()));
        // Camera pinned to the room origin (room == viewport)
        assert_eq!(game.camera.offset, Vec2::new(rect.x, rect.y));
    }

    #[test]
    fn test_door_crossing_changes_room() {
        let mut game = Game::new(&test_config());
        let dir = some_door(&game);
        let before = game.current_room;
        let (dx, dy) = dir.delta();
        let expected = (
            game.current_room().grid_x + dx,
            game.current_room().grid_y + dy,
        );

        stand_at_door(&mut game, dir);
        game.tick(&idle_input(), 0.016, 1.0);

        assert_ne!(game.current_room, before);
        assert!(game.transition.is_transitioning());
        let room = game.current_room();
        assert_eq!((room.grid_x, room.grid_y), expected);
        assert!(room.loaded);
        // Player re-enters on the opposite side, inside the new room
        assert!(game.current_room_rect().contains(game.player.center()));
    }

    #[test]
    fn test_transition_loads_neighborhood() {
        let mut game = Game::new(&test_config());
        let dir = some_door(&game);
        stand_at_door(&mut game, dir);
        game.tick(&idle_input(), 0.016, 1.0);

        let room = game.current_room();
        let (cx, cy) = (room.grid_x, room.grid_y);
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            if let Some(idx) = room_at(&game.world.rooms, cx + dx, cy + dy) {
                assert!(game.world.rooms[idx].loaded);
            }
        }
    }

    #[test]
    fn test_gameplay_suspended_while_transitioning() {
        let mut game = Game::new(&test_config());
        let dir = some_door(&game);
        stand_at_door(&mut game, dir);
        game.tick(&idle_input(), 0.016, 1.0);
        assert!(game.transition.is_transitioning());

        // Movement input is ignored until the timer runs out.
        let pos = game.player.center();
        let push = FrameInput {
            move_dir: Vec2::new(1.0, 0.0),
            shoot_dir: None,
        };
        game.tick(&push, 0.016, 1.0 + TRANSITION_DURATION / 2.0);
        assert_eq!(game.player.center(), pos);
        assert!(game.transition.is_transitioning());

        game.tick(&push, 0.016, 1.0 + TRANSITION_DURATION + 0.01);
        assert!(!game.transition.is_transitioning());
    }

    #[test]
    fn test_transition_debounce() {
        let mut game = Game::new(&test_config());
        let dir = some_door(&game);
        stand_at_door(&mut game, dir);
        game.tick(&idle_input(), 0.016, 1.0);
        let after_first = game.current_room;

        // Still parked on a door edge mid-transition: no second hop.
        game.tick(&idle_input(), 0.016, 1.01);
        assert_eq!(game.current_room, after_first);
    }

    #[test]
    fn test_transition_clears_transient_content(){
        let mut game = Game::new(&test_config());
        let layout = RoomLayout {
            objects: vec![
                ObjectRecord { kind: PlaceableKind::Spider, grid_x: 5, grid_y: 5 },
                ObjectRecord { kind: PlaceableKind::Coin, grid_x: 6, grid_y: 5 },
            ],
        };
        game.apply_layout(&layout);
        assert_eq!(game.enemies.len(), 1);
        assert_eq!(game.coins.len(), 1);

        let dir = some_door(&game);
        stand_at_door(&mut game, dir);
        game.tick(&idle_input(), 0.016, 1.0);
        assert!(game.enemies.is_empty());
        assert!(game.coins.is_empty());
        assert!(game.tears.is_empty());
    }

    #[test]
    fn test_shooting_respects_cooldown() {
        let mut game = Game::new(&test_config());
        let shoot = FrameInput {
            move_dir: Vec2::ZERO,
            shoot_dir: Some(Vec2::new(0.0, -1.0)),
        };
        game.tick(&shoot, 0.016, 1.0);
        assert_eq!(game.tears.len(), 1);
        game.tick(&shoot, 0.016, 1.1);
        assert_eq!(game.tears.len(), 1);
        game.tick(&shoot, 0.016, 1.0 + tears::SHOOT_COOLDOWN + 0.05);
        assert_eq!(game.tears.len(), 2);
    }

    #[test]
    fn test_placed_rock_blocks_movement() {
        let mut game = Game::new(&test_config());
        let walls_only = game.active_collision_bodies().len();
        let layout = RoomLayout {
            objects: vec![ObjectRecord {
                kind: PlaceableKind::Rock,
                grid_x: 4,
                grid_y: 4,
            }],
        };
        game.apply_layout(&layout);
        assert_eq!(game.active_collision_bodies().len(), walls_only + 1);
        assert_eq!(game.layout_snapshot().objects.len(), 1);
    }

    #[test]
    fn test_coin_pickup() {
        let mut game = Game::new(&test_config());
        let center = game.player.center();
        game.coins.push(Coin {
            rect: Rect::new(center.x - 10.0, center.y - 10.0, 20.0, 20.0),
        });
        game.tick(&idle_input(), 0.016, 1.0);
        assert!(game.coins.is_empty());
        assert_eq!(game.coins_collected, 1);
    }
}
