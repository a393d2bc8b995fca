//! Sprite loading with flat-color fallbacks
//!
//! Every texture loads from `assets/`; a missing file falls back to a
//! generated flat-color placeholder so the game always comes up, even
//! from a bare checkout.

use macroquad::prelude::*;

pub struct Assets {
    pub floor: Texture2D,
    pub door: Texture2D,
    pub player: Texture2D,
    pub tear: Texture2D,
    pub greed: Texture2D,
    pub spider: Texture2D,
    pub rock: Texture2D,
    pub coin: Texture2D,
}

impl Assets {
    pub async fn load() -> Self {
        Self {
            floor: texture_or_placeholder("assets/floor.png", DARKBROWN).await,
            door: texture_or_placeholder("assets/door.png", BROWN).await,
            player: texture_or_placeholder("assets/player.png", BEIGE).await,
            tear: texture_or_placeholder("assets/tear.png", SKYBLUE).await,
            greed: texture_or_placeholder("assets/greed.png", GRAY).await,
            spider: texture_or_placeholder("assets/spider.png", DARKPURPLE).await,
            rock: texture_or_placeholder("assets/rock.png", LIGHTGRAY).await,
            coin: texture_or_placeholder("assets/coin.png", GOLD).await,
        }
    }
}

async fn texture_or_placeholder(path: &str, fill: Color) -> Texture2D {
    match load_texture(path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Nearest);
            tex
        }
        Err(e) => {
            log::warn!("failed to load {}: {}, using placeholder", path, e);
            let image = Image::gen_image_color(16, 16, fill);
            let tex = Texture2D::from_image(&image);
            tex.set_filter(FilterMode::Nearest);
            tex
        }
    }
}
