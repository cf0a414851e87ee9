//! Game events (messages).

use bevy::prelude::*;

use crate::engine::{AudioCue, Difficulty, Frame, Point};

/// Message carrying the state the renderer should show.
#[derive(Message)]
pub struct RenderFrame {
    pub frame: Frame,
}

/// Message asking the audio plugin to play a cue.
#[derive(Message)]
pub struct PlayCue {
    pub cue: AudioCue,
}

/// Message triggered when food is eaten (for visual effects).
#[derive(Message)]
pub struct FoodEatenEvent {
    pub position: Point,
}

/// Message triggered when a session beats its stored high score.
#[derive(Message)]
pub struct NewHighScore {
    pub difficulty: Difficulty,
    pub score: u32,
}

/// Message triggered when the session ends.
#[derive(Message)]
pub struct SessionEnded {
    pub score: u32,
}
