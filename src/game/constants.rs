//! Game constants for board size, colors, timing, assets, and rendering layers.

use bevy::prelude::*;

use crate::engine::{BACKGROUND_RGB, BOARD_SIZE, CELL_SIZE, Rgb};

// Board dimensions, in pixels
pub const CELL_PIXELS: f32 = CELL_SIZE as f32;
pub const BOARD_PIXELS: f32 = BOARD_SIZE as f32;

// Visual settings
pub const CORNER_RADIUS: f32 = 3.0;
pub const WINDOW_TITLE: &str = "Snake";

// Colors
pub const BACKGROUND_COLOR: Color = rgb_color(BACKGROUND_RGB);
pub const FLASH_COLOR: Color = Color::srgba(0.44, 0.79, 0.51, 0.8);
pub const BUTTON_COLOR: Color = Color::srgb(0.42, 0.78, 0.42);
pub const TEXT_COLOR: Color = Color::WHITE;
pub const DIM_TEXT_COLOR: Color = Color::srgba(0.8, 0.8, 0.8, 1.0);

// Assets
pub const FONT_PATH: &str = "fonts/FiraSans-Bold.ttf";
pub const EAT_SOUND_PATH: &str = "sounds/eating.wav";
pub const COLLISION_SOUND_PATH: &str = "sounds/thud.wav";
pub const EAT_VOLUME: f32 = 0.05;
pub const COLLISION_VOLUME: f32 = 0.5;

// Persistence
pub const DEFAULT_HIGH_SCORE_PATH: &str = "data/highscores.txt";
pub const HIGH_SCORE_PATH_ENV: &str = "SNAKE_HIGHSCORES";

// Z-index constants for rendering layers
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_SNAKE_HEAD: f32 = 2.0;

pub const fn rgb_color(rgb: Rgb) -> Color {
    Color::srgb(
        rgb.0 as f32 / 255.0,
        rgb.1 as f32 / 255.0,
        rgb.2 as f32 / 255.0,
    )
}
