//! Game resources (singleton state).

use bevy::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

use super::{DEFAULT_HIGH_SCORE_PATH, HIGH_SCORE_PATH_ENV};
use crate::engine::{Difficulty, Direction, Frame, Grid, Point, START_POSITION, Session};
use crate::scores::HighScoreStore;

/// Game phase enum to track which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    Help,
    HighScores,
    Playing,
    GameOver,
}

/// Main game state resource.
#[derive(Resource, Default)]
pub struct GameState {
    pub phase: GamePhase,
    pub new_high_score: bool,
}

impl GameState {
    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}

/// Startup configuration.
#[derive(Resource, Clone, Debug)]
pub struct GameConfig {
    pub grid: Grid,
    pub start: Point,
    pub high_score_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid: Grid::default(),
            start: START_POSITION,
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
        }
    }
}

impl GameConfig {
    /// Defaults, with the high score path taken from the environment when set.
    pub fn from_env() -> Self {
        let mut config = GameConfig::default();
        if let Some(path) = std::env::var_os(HIGH_SCORE_PATH_ENV) {
            config.high_score_path = PathBuf::from(path);
        }
        config
    }
}

/// The session being played, present from the first start until returning to the menu.
#[derive(Resource)]
pub struct ActiveSession(pub Session);

/// Persisted high scores.
#[derive(Resource)]
pub struct HighScoreBoard(pub HighScoreStore);

/// Most recent frame emitted by the engine.
#[derive(Resource, Default)]
pub struct LastFrame(pub Option<Frame>);

/// Input buffer to queue direction changes.
#[derive(Resource, Default)]
pub struct InputBuffer {
    queued_directions: Vec<Direction>,
}

impl InputBuffer {
    /// Queue a direction change (max 2 buffered inputs).
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.queued_directions.len() < 2 {
            self.queued_directions.push(direction);
        }
    }

    /// Pop the next queued direction.
    pub fn pop_direction(&mut self) -> Option<Direction> {
        if !self.queued_directions.is_empty() {
            Some(self.queued_directions.remove(0))
        } else {
            None
        }
    }

    /// Get the last queued direction without removing it.
    pub fn last_direction(&self) -> Option<Direction> {
        self.queued_directions.last().copied()
    }

    /// Clear all queued directions.
    pub fn clear(&mut self) {
        self.queued_directions.clear();
    }
}

/// Paces simulation ticks at the session's difficulty.
#[derive(Resource)]
pub struct TickTimer {
    pub timer: Timer,
}

impl Default for TickTimer {
    fn default() -> Self {
        TickTimer::for_difficulty(Difficulty::default())
    }
}

impl TickTimer {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        TickTimer {
            timer: Timer::new(difficulty.tick_interval(), TimerMode::Repeating),
        }
    }
}

/// Resource for camera shake effect.
#[derive(Resource)]
pub struct CameraShake {
    pub timer: Timer,
    pub intensity: f32,
}

impl Default for CameraShake {
    fn default() -> Self {
        CameraShake {
            timer: Timer::new(Duration::ZERO, TimerMode::Once),
            intensity: 0.0,
        }
    }
}
