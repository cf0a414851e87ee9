use anyhow::Context;
use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use snake_arcade::audio::SoundPlugin;
use snake_arcade::food::FoodPlugin;
use snake_arcade::game::{
    BACKGROUND_COLOR, BOARD_PIXELS, FoodEatenEvent, GameConfig, GameState, HighScoreBoard,
    InputBuffer, NewHighScore, PlayCue, RenderFrame, SessionEnded, TickTimer, WINDOW_TITLE,
};
use snake_arcade::rendering::RenderingPlugin;
use snake_arcade::scores::HighScoreStore;
use snake_arcade::snake::SnakePlugin;
use snake_arcade::ui::UiPlugin;

fn main() -> anyhow::Result<()> {
    let config = GameConfig::from_env();
    let store = HighScoreStore::open(&config.high_score_path).with_context(|| {
        format!(
            "failed to load high scores from {}",
            config.high_score_path.display()
        )
    })?;

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(BOARD_PIXELS as u32, BOARD_PIXELS as u32),
                    title: WINDOW_TITLE.to_string(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(config)
        .insert_resource(HighScoreBoard(store))
        .init_resource::<GameState>()
        .init_resource::<InputBuffer>()
        .init_resource::<TickTimer>()
        .add_message::<RenderFrame>()
        .add_message::<PlayCue>()
        .add_message::<FoodEatenEvent>()
        .add_message::<NewHighScore>()
        .add_message::<SessionEnded>()
        .add_plugins((
            UiPlugin,
            SnakePlugin,
            FoodPlugin,
            RenderingPlugin,
            SoundPlugin,
        ))
        .run();

    Ok(())
}
