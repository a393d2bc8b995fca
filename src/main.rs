//! CATACOMB: a procedural dungeon crawler
//!
//! Rooms grow outward from a center start room on a square grid, doors
//! are derived from adjacency, and the boss lives in the furthest
//! reachable room. Rooms materialize around the player and melt away
//! behind them.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod config;
mod dungeon;
mod game;
mod layout;
mod render;

use macroquad::prelude::*;

use assets::Assets;
use config::GameConfig;
use game::{FrameInput, Game};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("CATACOMB v{}", VERSION),
        window_width: 1400,
        window_height: 800,
        window_resizable: false,
        ..Default::default()
    }
}

/// WASD moves, arrow keys shoot. Opposing movement keys cancel out.
fn gather_input() -> FrameInput {
    let mut move_dir = Vec2::ZERO;
    if is_key_down(KeyCode::W) {
        move_dir.y -= 1.0;
    }
    if is_key_down(KeyCode::S) {
        move_dir.y += 1.0;
    }
    if is_key_down(KeyCode::A) {
        move_dir.x -= 1.0;
    }
    if is_key_down(KeyCode::D) {
        move_dir.x += 1.0;
    }

    let shoot_dir = if is_key_down(KeyCode::Up) {
        Some(Vec2::new(0.0, -1.0))
    } else if is_key_down(KeyCode::Down) {
        Some(Vec2::new(0.0, 1.0))
    } else if is_key_down(KeyCode::Left) {
        Some(Vec2::new(-1.0, 0.0))
    } else if is_key_down(KeyCode::Right) {
        Some(Vec2::new(1.0, 0.0))
    } else {
        None
    };

    FrameInput {
        move_dir,
        shoot_dir,
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = GameConfig::load_or_default("catacomb.ron");
    let mut game = Game::new(&config);
    let assets = Assets::load().await;

    // Optional start-room template; a bare checkout just gets an empty room
    match layout::load_layout("layouts/start_room.json") {
        Ok(template) => game.apply_layout(&template),
        Err(e) => log::debug!("no start room template: {}", e),
    }

    loop {
        let dt = get_frame_time();
        let now = get_time();

        game.tick(&gather_input(), dt, now);
        render::draw_game(&game, &assets);

        next_frame().await
    }
}
