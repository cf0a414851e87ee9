//! UI plugin - handles menus, help and high score screens, score display, and game flow.

use bevy::post_process::bloom::Bloom;
use bevy::prelude::*;
use bevy::render::view::Hdr;

use bevy_vector_shapes::prelude::*;

use crate::engine::{Difficulty, Session};
use crate::game::{
    ActiveSession, BACKGROUND_COLOR, BOARD_PIXELS, BUTTON_COLOR, DIM_TEXT_COLOR, FONT_PATH,
    GameConfig, GameOverUI, GamePhase, GameState, HelpUI, HighScoreBoard, HighScoreLine,
    HighScoreUI, InputBuffer, LastFrame, MenuUI, NewHighScore, RenderFrame, ScoreText,
    TEXT_COLOR, TickTimer,
};

/// Plugin for UI and game flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system).add_systems(
            Update,
            (
                menu_input,
                help_input,
                high_scores_input,
                game_over_input,
                persist_high_score,
                sync_screens,
                refresh_high_score_lines,
                update_score_text,
            )
                .chain(),
        );
    }
}

// Type alias for querying every overlay screen
type OverlayQuery<'w, 's> = Query<
    'w,
    's,
    Entity,
    Or<(
        With<MenuUI>,
        With<HelpUI>,
        With<HighScoreUI>,
        With<GameOverUI>,
    )>,
>;

/// Initial setup system - camera, board, score text.
fn setup_system(mut commands: Commands, asset_server: Res<AssetServer>) {
    // Setup camera with HDR and bloom for glowing effects
    commands.spawn((
        Camera2d,
        Hdr,
        Bloom {
            intensity: 0.15,
            low_frequency_boost: 0.6,
            low_frequency_boost_curvature: 0.5,
            high_pass_frequency: 0.8,
            ..default()
        },
    ));

    // Board background
    commands.spawn((
        Sprite {
            color: BACKGROUND_COLOR,
            custom_size: Some(Vec2::splat(BOARD_PIXELS)),
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));

    // Thin border so the wraparound edge is visible
    commands.spawn(ShapeBundle::rect(
        &ShapeConfig {
            color: BUTTON_COLOR.with_alpha(0.25),
            hollow: true,
            thickness: 1.0,
            transform: Transform::from_xyz(0.0, 0.0, 0.1),
            ..ShapeConfig::default_2d()
        },
        Vec2::splat(BOARD_PIXELS),
    ));

    // Score text, empty until a session starts
    commands.spawn((
        label(&asset_server.load(FONT_PATH), "", 20.0, TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            right: Val::Px(15.0),
            ..default()
        },
        ScoreText,
    ));
}

/// Text, font and color for a UI label.
fn label(font: &Handle<Font>, text: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font: font.clone(),
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

fn spaced(bottom: f32) -> Node {
    Node {
        margin: UiRect::bottom(Val::Px(bottom)),
        ..default()
    }
}

fn overlay(background: Color) -> (Node, BackgroundColor) {
    (
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            flex_direction: FlexDirection::Column,
            ..default()
        },
        BackgroundColor(background),
    )
}

/// Spawns the start menu UI.
fn spawn_start_menu(commands: &mut Commands, font: &Handle<Font>) {
    commands
        .spawn((overlay(BACKGROUND_COLOR), MenuUI))
        .with_children(|parent| {
            parent.spawn((label(font, "SNAKE", 80.0, TEXT_COLOR), spaced(40.0)));
            parent.spawn((
                label(font, "Choose a difficulty", 24.0, TEXT_COLOR),
                spaced(20.0),
            ));
            for (key, difficulty) in ["1", "2", "3"].into_iter().zip(Difficulty::ALL) {
                parent.spawn((
                    label(
                        font,
                        format!("[{key}] {}", difficulty.label()),
                        28.0,
                        BUTTON_COLOR,
                    ),
                    spaced(12.0),
                ));
            }
            parent.spawn((
                label(font, "[S] High scores    [F1] Help", 18.0, DIM_TEXT_COLOR),
                Node {
                    margin: UiRect::top(Val::Px(40.0)),
                    ..default()
                },
            ));
        });
}

/// Spawns the help screen UI.
fn spawn_help_screen(commands: &mut Commands, font: &Handle<Font>) {
    commands
        .spawn((overlay(BACKGROUND_COLOR), HelpUI))
        .with_children(|parent| {
            parent.spawn((label(font, "HOW TO PLAY", 40.0, TEXT_COLOR), spaced(30.0)));
            for line in [
                "Arrow Keys or WASD to move",
                "Eat the green food to grow",
                "The board wraps around at the edges",
                "Don't run into yourself!",
            ] {
                parent.spawn((label(font, line, 18.0, DIM_TEXT_COLOR), spaced(10.0)));
            }
            parent.spawn((
                label(font, "Press SPACE to go back", 20.0, BUTTON_COLOR),
                Node {
                    margin: UiRect::top(Val::Px(30.0)),
                    ..default()
                },
            ));
        });
}

/// Spawns the high score screen UI.
fn spawn_high_score_screen(commands: &mut Commands, font: &Handle<Font>) {
    commands
        .spawn((overlay(BACKGROUND_COLOR), HighScoreUI))
        .with_children(|parent| {
            parent.spawn((label(font, "High Scores:", 36.0, TEXT_COLOR), spaced(30.0)));
            for difficulty in Difficulty::ALL {
                parent.spawn((
                    label(font, "", 24.0, TEXT_COLOR),
                    spaced(14.0),
                    HighScoreLine {
                        index: difficulty.index(),
                    },
                ));
            }
            parent.spawn((
                label(font, "[1/2/3] Reset a tier", 18.0, DIM_TEXT_COLOR),
                Node {
                    margin: UiRect::top(Val::Px(30.0)),
                    ..default()
                },
            ));
            parent.spawn((
                label(font, "Press SPACE to go back", 20.0, BUTTON_COLOR),
                Node {
                    margin: UiRect::top(Val::Px(10.0)),
                    ..default()
                },
            ));
        });
}

/// Spawns the game over screen UI.
fn spawn_game_over_screen(
    commands: &mut Commands,
    font: &Handle<Font>,
    session: &Session,
    new_high_score: bool,
) {
    commands
        .spawn((overlay(BACKGROUND_COLOR.with_alpha(0.8)), GameOverUI))
        .with_children(|parent| {
            if new_high_score {
                parent.spawn((
                    label(font, "New High Score!", 24.0, BUTTON_COLOR),
                    spaced(30.0),
                ));
            }
            parent.spawn((label(font, "Game Over", 60.0, TEXT_COLOR), spaced(20.0)));
            parent.spawn((
                label(
                    font,
                    format!("Score: {}", session.score()),
                    30.0,
                    TEXT_COLOR,
                ),
                spaced(10.0),
            ));
            parent.spawn((
                label(
                    font,
                    format!("{} High Score: {}", session.difficulty(), session.best()),
                    22.0,
                    TEXT_COLOR,
                ),
                spaced(40.0),
            ));
            parent.spawn((
                label(font, "Press \"SPACE\" to play again", 20.0, DIM_TEXT_COLOR),
                spaced(10.0),
            ));
            parent.spawn(label(font, "Press ESC for the menu", 16.0, DIM_TEXT_COLOR));
        });
}

/// Keys for the three tiers, in file order.
fn difficulty_from_input(keyboard_input: &ButtonInput<KeyCode>) -> Option<Difficulty> {
    if keyboard_input.any_just_pressed([KeyCode::Digit1, KeyCode::KeyE]) {
        Some(Difficulty::Easy)
    } else if keyboard_input.any_just_pressed([KeyCode::Digit2, KeyCode::KeyN]) {
        Some(Difficulty::Normal)
    } else if keyboard_input.any_just_pressed([KeyCode::Digit3, KeyCode::KeyH]) {
        Some(Difficulty::Hard)
    } else {
        None
    }
}

/// Resets per-session input and timing and sends the opening frame.
fn begin_play(
    game_state: &mut GameState,
    input_buffer: &mut InputBuffer,
    commands: &mut Commands,
    frame_writer: &mut MessageWriter<RenderFrame>,
    session: &Session,
) {
    input_buffer.clear();
    game_state.new_high_score = false;
    commands.insert_resource(TickTimer::for_difficulty(session.difficulty()));
    frame_writer.write(RenderFrame {
        frame: session.frame(),
    });
    game_state.set_phase(GamePhase::Playing);
}

/// System to pick a difficulty or open a sub-screen from the menu.
fn menu_input(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
    mut input_buffer: ResMut<InputBuffer>,
    mut frame_writer: MessageWriter<RenderFrame>,
    config: Res<GameConfig>,
    board: Res<HighScoreBoard>,
) {
    if game_state.phase != GamePhase::Menu {
        return;
    }

    if let Some(difficulty) = difficulty_from_input(&keyboard_input) {
        let mut rng = rand::rng();
        let session = Session::new(
            config.grid,
            config.start,
            difficulty,
            board.0.get(difficulty),
            &mut rng,
        );
        begin_play(
            &mut game_state,
            &mut input_buffer,
            &mut commands,
            &mut frame_writer,
            &session,
        );
        commands.insert_resource(ActiveSession(session));
    } else if keyboard_input.just_pressed(KeyCode::KeyS) {
        game_state.set_phase(GamePhase::HighScores);
    } else if keyboard_input.any_just_pressed([KeyCode::F1, KeyCode::Slash]) {
        game_state.set_phase(GamePhase::Help);
    }
}

/// System to leave the help screen.
fn help_input(keyboard_input: Res<ButtonInput<KeyCode>>, mut game_state: ResMut<GameState>) {
    if game_state.phase == GamePhase::Help
        && keyboard_input.any_just_pressed([KeyCode::Space, KeyCode::Escape])
    {
        game_state.set_phase(GamePhase::Menu);
    }
}

/// System to reset tiers or leave the high score screen.
fn high_scores_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
    mut board: ResMut<HighScoreBoard>,
) {
    if game_state.phase != GamePhase::HighScores {
        return;
    }

    if let Some(difficulty) = difficulty_from_input(&keyboard_input) {
        match board.0.reset(difficulty) {
            Ok(()) => info!("Reset {difficulty} high score"),
            Err(err) => error!("Failed to reset {difficulty} high score: {err}"),
        }
    } else if keyboard_input.any_just_pressed([KeyCode::Space, KeyCode::Escape]) {
        game_state.set_phase(GamePhase::Menu);
    }
}

/// System to restart at the same tier or return to the menu after a session ends.
fn game_over_input(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
    mut input_buffer: ResMut<InputBuffer>,
    mut frame_writer: MessageWriter<RenderFrame>,
    session: Option<ResMut<ActiveSession>>,
) {
    if game_state.phase != GamePhase::GameOver {
        return;
    }
    let Some(mut session) = session else {
        return;
    };

    if keyboard_input.just_pressed(KeyCode::Space) {
        let mut rng = rand::rng();
        session.0.restart(&mut rng);
        begin_play(
            &mut game_state,
            &mut input_buffer,
            &mut commands,
            &mut frame_writer,
            &session.0,
        );
    } else if keyboard_input.just_pressed(KeyCode::Escape) {
        commands.remove_resource::<ActiveSession>();
        game_state.set_phase(GamePhase::Menu);
    }
}

/// System to write new high scores to the store.
fn persist_high_score(
    mut high_score_reader: MessageReader<NewHighScore>,
    mut game_state: ResMut<GameState>,
    mut board: ResMut<HighScoreBoard>,
) {
    for NewHighScore { difficulty, score } in high_score_reader.read() {
        game_state.new_high_score = true;
        match board.0.record(*difficulty, *score) {
            Ok(true) => info!("New {difficulty} high score: {score}"),
            Ok(false) => {}
            Err(err) => error!(
                "Failed to save {difficulty} high score to {}: {err}",
                board.0.path().display()
            ),
        }
    }
}

/// System to swap the overlay whenever the phase or the high score flag changes.
fn sync_screens(
    mut commands: Commands,
    mut shown: Local<Option<(GamePhase, bool)>>,
    game_state: Res<GameState>,
    asset_server: Res<AssetServer>,
    session: Option<Res<ActiveSession>>,
    overlays: OverlayQuery,
) {
    // The high score message can land a frame after the phase change
    let current = (game_state.phase, game_state.new_high_score);
    if *shown == Some(current) {
        return;
    }
    *shown = Some(current);

    for entity in overlays.iter() {
        commands.entity(entity).despawn();
    }

    let font = asset_server.load(FONT_PATH);
    match game_state.phase {
        GamePhase::Menu => spawn_start_menu(&mut commands, &font),
        GamePhase::Help => spawn_help_screen(&mut commands, &font),
        GamePhase::HighScores => spawn_high_score_screen(&mut commands, &font),
        GamePhase::GameOver => {
            if let Some(session) = session {
                spawn_game_over_screen(
                    &mut commands,
                    &font,
                    &session.0,
                    game_state.new_high_score,
                );
            }
        }
        GamePhase::Playing => {}
    }
}

/// System to keep the high score lines current, including right after a reset.
fn refresh_high_score_lines(
    board: Res<HighScoreBoard>,
    mut lines: Query<(&HighScoreLine, &mut Text)>,
) {
    for (line, mut text) in lines.iter_mut() {
        if let Some(difficulty) = Difficulty::ALL.get(line.index) {
            *text = Text::from(format!(
                "{}: {}",
                difficulty.label(),
                board.0.get(*difficulty)
            ));
        }
    }
}

/// System to update the score display from the last drawn frame.
fn update_score_text(
    game_state: Res<GameState>,
    last_frame: Res<LastFrame>,
    mut query: Query<&mut Text, With<ScoreText>>,
) {
    let score = match (&last_frame.0, game_state.phase) {
        (Some(frame), GamePhase::Playing) => frame.score.to_string(),
        _ => String::new(),
    };

    if let Ok(mut text) = query.single_mut()
        && text.0 != score
    {
        *text = Text::from(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_keys_select_difficulties() {
        let cases = [
            (KeyCode::Digit1, Difficulty::Easy),
            (KeyCode::KeyE, Difficulty::Easy),
            (KeyCode::Digit2, Difficulty::Normal),
            (KeyCode::KeyN, Difficulty::Normal),
            (KeyCode::Digit3, Difficulty::Hard),
            (KeyCode::KeyH, Difficulty::Hard),
        ];

        for (key, expected) in cases {
            let mut input = ButtonInput::<KeyCode>::default();
            input.press(key);
            assert_eq!(difficulty_from_input(&input), Some(expected));
        }

        let mut input = ButtonInput::<KeyCode>::default();
        input.press(KeyCode::Space);
        assert_eq!(difficulty_from_input(&input), None);
    }
}
