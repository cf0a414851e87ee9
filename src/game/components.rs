//! ECS components for the snake game.

use bevy::prelude::*;

/// Shape drawing the chain segment at `index` (0 is the head).
#[derive(Component)]
pub struct SegmentSprite {
    pub index: usize,
}

/// Component to mark the food shape.
#[derive(Component)]
pub struct FoodSprite;

/// Component for food pulsing animation.
#[derive(Component)]
pub struct FoodPulse {
    pub timer: Timer,
}

/// Component for entities that should flash/pulse.
#[derive(Component)]
pub struct PulseEffect {
    pub timer: Timer,
    pub start_scale: f32,
    pub end_scale: f32,
}

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;

/// Component to mark the start menu UI.
#[derive(Component)]
pub struct MenuUI;

/// Component to mark the help screen UI.
#[derive(Component)]
pub struct HelpUI;

/// Component to mark the high score screen UI.
#[derive(Component)]
pub struct HighScoreUI;

/// Text line on the high score screen showing one tier.
#[derive(Component)]
pub struct HighScoreLine {
    pub index: usize,
}
