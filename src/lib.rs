//! Single-player Snake on a wrapping 30x30 board.
//!
//! [`engine`] holds the simulation and knows nothing about bevy's renderer or audio; the
//! remaining modules are bevy plugins that feed it input and carry out its requests.

pub mod audio;
pub mod engine;
pub mod food;
pub mod game;
pub mod rendering;
pub mod scores;
pub mod snake;
pub mod ui;
