//! Frame drawing
//!
//! Pure read side: takes the game state plus loaded textures and issues
//! macroquad draw calls. World-space positions go through the camera
//! offset; the minimap draws in screen space on top.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::dungeon::{Direction, Room};
use crate::game::{Enemy, Game};

const MINIMAP_CELL: f32 = 26.0;
const MINIMAP_GAP: f32 = 4.0;
const MINIMAP_MARGIN: f32 = 16.0;
const HEALTH_BAR_HEIGHT: f32 = 5.0;

pub fn draw_game(game: &Game, assets: &Assets) {
    clear_background(Color::from_rgba(20, 12, 12, 255));

    for room in &game.world.rooms {
        draw_room(room, game, assets);
    }

    for prop in &game.props {
        // Walls and rocks share the obstacle sprite for now
        draw_world_texture(game, &assets.rock, prop.rect, WHITE);
    }
    for coin in &game.coins {
        draw_world_texture(game, &assets.coin, coin.rect, WHITE);
    }
    for enemy in &game.enemies {
        draw_enemy(game, enemy, assets);
    }
    for tear in &game.tears {
        draw_world_texture(game, &assets.tear, tear.rect, WHITE);
    }
    draw_world_texture(game, &assets.player, game.player.rect, WHITE);

    draw_minimap(game);
    draw_hud(game);
}

fn draw_room(room: &Room, game: &Game, assets: &Assets) {
    let Some(surface) = &room.surface else {
        return;
    };
    let origin = game.camera.to_screen(Vec2::new(room.world_x, room.world_y));

    draw_texture_ex(
        &assets.floor,
        origin.x,
        origin.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(surface.size),
            ..Default::default()
        },
    );

    let geom = &game.geometry;
    for decal in &surface.decals {
        // Left/right doors are the top/bottom art rotated a quarter turn;
        // rotation happens around the dest rect center.
        let (w, h) = (geom.door_width, geom.door_height);
        let pos = origin + decal.center - Vec2::new(w / 2.0, h / 2.0);
        draw_texture_ex(
            &assets.door,
            pos.x,
            pos.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(Vec2::new(w, h)),
                rotation: decal.rotation,
                flip_x: decal.flip_x,
                flip_y: decal.flip_y,
                ..Default::default()
            },
        );
    }
}

fn draw_enemy(game: &Game, enemy: &Enemy, assets: &Assets) {
    let tex = match enemy.kind {
        crate::game::EnemyKind::Greed => &assets.greed,
        crate::game::EnemyKind::Spider => &assets.spider,
    };
    draw_world_texture(game, tex, enemy.rect, WHITE);

    // Health bar above the sprite
    let top_left = game.camera.to_screen(Vec2::new(enemy.rect.x, enemy.rect.y));
    let frac = enemy.hp as f32 / enemy.max_hp as f32;
    let y = top_left.y - HEALTH_BAR_HEIGHT - 2.0;
    draw_rectangle(top_left.x, y, enemy.rect.w, HEALTH_BAR_HEIGHT, DARKGRAY);
    draw_rectangle(top_left.x, y, enemy.rect.w * frac, HEALTH_BAR_HEIGHT, RED);
}

fn draw_world_texture(game: &Game, tex: &Texture2D, rect: Rect, tint: Color) {
    let pos = game.camera.to_screen(Vec2::new(rect.x, rect.y));
    draw_texture_ex(
        tex,
        pos.x,
        pos.y,
        tint,
        DrawTextureParams {
            dest_size: Some(Vec2::new(rect.w, rect.h)),
            ..Default::default()
        },
    );
}

/// Room boxes in the top-left corner: current room highlighted, start
/// and boss rooms lettered, open doors drawn as ticks between cells.
fn draw_minimap(game: &Game) {
    let rooms = &game.world.rooms;
    let min_x = rooms.iter().map(|r| r.grid_x).min().unwrap_or(0);
    let min_y = rooms.iter().map(|r| r.grid_y).min().unwrap_or(0);
    let step = MINIMAP_CELL + MINIMAP_GAP;

    for (idx, room) in rooms.iter().enumerate() {
        let x = MINIMAP_MARGIN + (room.grid_x - min_x) as f32 * step;
        let y = MINIMAP_MARGIN + (room.grid_y - min_y) as f32 * step;

        let fill = if idx == game.current_room {
            Color::from_rgba(230, 230, 230, 230)
        } else if room.loaded {
            Color::from_rgba(120, 120, 120, 200)
        } else {
            Color::from_rgba(70, 70, 70, 170)
        };
        draw_rectangle(x, y, MINIMAP_CELL, MINIMAP_CELL, fill);

        for dir in Direction::ALL {
            if room.has_door(dir) {
                draw_door_tick(x, y, dir);
            }
        }

        let letter = if room.start {
            Some("S")
        } else if room.boss {
            Some("B")
        } else if room.shop {
            Some("$")
        } else {
            None
        };
        if let Some(letter) = letter {
            let color = if idx == game.current_room { BLACK } else { WHITE };
            draw_text(letter, x + 8.0, y + MINIMAP_CELL - 7.0, 18.0, color);
        }
    }
}

fn draw_door_tick(x: f32, y: f32, dir: Direction) {
    let c = MINIMAP_CELL;
    let (tx, ty, tw, th) = match dir {
        Direction::Up => (x + c / 2.0 - 3.0, y - MINIMAP_GAP, 6.0, MINIMAP_GAP),
        Direction::Down => (x + c / 2.0 - 3.0, y + c, 6.0, MINIMAP_GAP),
        Direction::Left => (x - MINIMAP_GAP, y + c / 2.0 - 3.0, MINIMAP_GAP, 6.0),
        Direction::Right => (x + c, y + c / 2.0 - 3.0, MINIMAP_GAP, 6.0),
    };
    draw_rectangle(tx, ty, tw, th, Color::from_rgba(180, 180, 180, 200));
}

fn draw_hud(game: &Game) {
    let text = format!("coins: {}", game.coins_collected);
    draw_text(&text, MINIMAP_MARGIN, screen_height() - 20.0, 24.0, GOLD);

    let room = game.current_room();
    if room.boss {
        draw_text(
            "BOSS",
            screen_width() / 2.0 - 30.0,
            40.0,
            32.0,
            RED,
        );
    }
}
