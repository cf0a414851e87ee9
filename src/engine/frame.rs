//! What the renderer needs to draw one tick.

use super::Point;

/// An sRGB color with 8-bit channels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const SNAKE_RGB: Rgb = Rgb(255, 255, 255);
pub const FOOD_RGB: Rgb = Rgb(111, 201, 129);
pub const BACKGROUND_RGB: Rgb = Rgb(47, 48, 47);

/// A colored cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tile {
    pub position: Point,
    pub color: Rgb,
}

/// Snapshot of a session after a tick: the chain head first, the food, and the score.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Frame {
    pub segments: Vec<Tile>,
    pub food: Tile,
    pub score: u32,
}
