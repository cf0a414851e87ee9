//! Snake plugin - reads directional input and drives the engine one tick at a time.

use bevy::prelude::*;

use crate::engine::{Direction, Request, TickEvent};
use crate::game::{
    ActiveSession, FoodEatenEvent, GamePhase, GameState, InputBuffer, NewHighScore, PlayCue,
    RenderFrame, SessionEnded, TickTimer,
};

/// Plugin for input and simulation systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (snake_movement_input, advance_session).chain());
    }
}

/// Maps a held key to a direction. Arrow keys and WASD both steer.
fn direction_from_input(keyboard_input: &ButtonInput<KeyCode>) -> Option<Direction> {
    if keyboard_input.pressed(KeyCode::ArrowUp) || keyboard_input.pressed(KeyCode::KeyW) {
        Some(Direction::Up)
    } else if keyboard_input.pressed(KeyCode::ArrowLeft) || keyboard_input.pressed(KeyCode::KeyA)
    {
        Some(Direction::Left)
    } else if keyboard_input.pressed(KeyCode::ArrowDown) || keyboard_input.pressed(KeyCode::KeyS)
    {
        Some(Direction::Down)
    } else if keyboard_input.pressed(KeyCode::ArrowRight)
        || keyboard_input.pressed(KeyCode::KeyD)
    {
        Some(Direction::Right)
    } else {
        None
    }
}

/// System to read keyboard input and queue direction changes.
///
/// Reversals are queued like any other turn.
fn snake_movement_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut input_buffer: ResMut<InputBuffer>,
    session: Option<Res<ActiveSession>>,
    game_state: Res<GameState>,
) {
    if game_state.phase != GamePhase::Playing {
        return;
    }
    let Some(session) = session else {
        return;
    };

    let last_direction = input_buffer
        .last_direction()
        .unwrap_or(session.0.chain().head().facing);

    if let Some(new_direction) = direction_from_input(&keyboard_input)
        && new_direction != last_direction
    {
        input_buffer.queue_direction(new_direction);
    }
}

/// System to run one engine tick per elapsed timer interval and dispatch its requests.
#[allow(clippy::too_many_arguments)]
fn advance_session(
    time: Res<Time>,
    mut tick_timer: ResMut<TickTimer>,
    mut game_state: ResMut<GameState>,
    mut input_buffer: ResMut<InputBuffer>,
    session: Option<ResMut<ActiveSession>>,
    mut frame_writer: MessageWriter<RenderFrame>,
    mut cue_writer: MessageWriter<PlayCue>,
    mut food_eaten_writer: MessageWriter<FoodEatenEvent>,
    mut high_score_writer: MessageWriter<NewHighScore>,
    mut ended_writer: MessageWriter<SessionEnded>,
) {
    if game_state.phase != GamePhase::Playing {
        return;
    }
    let Some(mut session) = session else {
        return;
    };

    tick_timer.timer.tick(time.delta());

    // A long frame can cover several intervals; run each of them.
    let mut rng = rand::rng();
    for _ in 0..tick_timer.timer.times_finished_this_tick() {
        let food_before = session.0.food();
        let report = session.0.tick(input_buffer.pop_direction(), &mut rng);

        for request in report.requests {
            match request {
                Request::RenderFrame => {
                    frame_writer.write(RenderFrame {
                        frame: session.0.frame(),
                    });
                }
                Request::PlayCue(cue) => {
                    cue_writer.write(PlayCue { cue });
                }
                Request::PersistHighScore { difficulty, score } => {
                    high_score_writer.write(NewHighScore { difficulty, score });
                }
            }
        }

        match report.event {
            TickEvent::Grew => {
                food_eaten_writer.write(FoodEatenEvent {
                    position: food_before,
                });
            }
            TickEvent::Ended => {
                input_buffer.clear();
                ended_writer.write(SessionEnded {
                    score: session.0.score(),
                });
                game_state.set_phase(GamePhase::GameOver);
                break;
            }
            TickEvent::Moved => {}
        }
    }
}
