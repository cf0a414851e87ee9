//! Rendering plugin - draws engine frames, plays visual effects, and shakes the camera.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;
use rand::prelude::*;

use crate::engine::{Point, Tile};
use crate::food::spawn_food_sprite;
use crate::game::{
    BOARD_PIXELS, CELL_PIXELS, CORNER_RADIUS, CameraShake, FLASH_COLOR, FoodEatenEvent,
    FoodSprite, GamePhase, GameState, LastFrame, PulseEffect, RenderFrame, SegmentSprite,
    SessionEnded, Z_FOOD, Z_SNAKE_HEAD, Z_SNAKE_SEGMENT, rgb_color,
};

/// Plugin for rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LastFrame>()
            .init_resource::<CameraShake>()
            .add_systems(
                Update,
                (
                    draw_frame,
                    clear_board,
                    pulse_effect_system,
                    spawn_food_eaten_effect,
                    trigger_camera_shake_on_game_over,
                    camera_shake_system,
                )
                    .chain(),
            );
    }
}

// Type alias for the segment shapes query
type SegmentSpriteQuery<'w, 's> =
    Query<'w, 's, (Entity, &'static SegmentSprite, &'static mut Transform), Without<FoodSprite>>;

/// Converts a board cell (top-left origin, y down) to the world position of its center.
pub fn board_to_world(point: Point) -> Vec2 {
    Vec2::new(
        point.x as f32 + CELL_PIXELS / 2.0 - BOARD_PIXELS / 2.0,
        BOARD_PIXELS / 2.0 - point.y as f32 - CELL_PIXELS / 2.0,
    )
}

/// Spawns a chain segment square.
fn spawn_segment_sprite(commands: &mut Commands, index: usize, tile: &Tile) -> Entity {
    let size = CELL_PIXELS;
    // Normalize corner radius relative to the shape size (0.0 to 1.0 range)
    let corner_radius_normalized = CORNER_RADIUS / (size / 2.0);

    commands
        .spawn((
            ShapeBundle::rect(
                &ShapeConfig {
                    color: rgb_color(tile.color),
                    corner_radii: Vec4::splat(corner_radius_normalized),
                    transform: Transform::from_translation(
                        board_to_world(tile.position).extend(segment_z(index)),
                    ),
                    ..ShapeConfig::default_2d()
                },
                Vec2::splat(size),
            ),
            SegmentSprite { index },
        ))
        .id()
}

fn segment_z(index: usize) -> f32 {
    if index == 0 {
        Z_SNAKE_HEAD
    } else {
        Z_SNAKE_SEGMENT
    }
}

/// System to bring the board shapes in line with the latest emitted frame.
fn draw_frame(
    mut commands: Commands,
    mut frame_reader: MessageReader<RenderFrame>,
    mut last_frame: ResMut<LastFrame>,
    mut segments: SegmentSpriteQuery,
    mut food: Query<&mut Transform, With<FoodSprite>>,
) {
    let Some(message) = frame_reader.read().last() else {
        return;
    };
    let frame = &message.frame;

    let mut drawn = 0;
    for (entity, sprite, mut transform) in segments.iter_mut() {
        match frame.segments.get(sprite.index) {
            Some(tile) => {
                transform.translation =
                    board_to_world(tile.position).extend(segment_z(sprite.index));
                drawn += 1;
            }
            None => commands.entity(entity).despawn(),
        }
    }
    for (index, tile) in frame.segments.iter().enumerate().skip(drawn) {
        spawn_segment_sprite(&mut commands, index, tile);
    }

    let food_translation = board_to_world(frame.food.position);
    match food.single_mut() {
        Ok(mut transform) => {
            transform.translation = food_translation.extend(Z_FOOD);
        }
        Err(_) => {
            spawn_food_sprite(&mut commands, food_translation, rgb_color(frame.food.color));
        }
    }

    last_frame.0 = Some(frame.clone());
}

/// System to remove board shapes once play is left for the menus.
fn clear_board(
    mut commands: Commands,
    game_state: Res<GameState>,
    mut last_frame: ResMut<LastFrame>,
    shapes: Query<Entity, Or<(With<SegmentSprite>, With<FoodSprite>)>>,
) {
    if matches!(game_state.phase, GamePhase::Playing | GamePhase::GameOver) || shapes.is_empty()
    {
        return;
    }

    for entity in shapes.iter() {
        commands.entity(entity).despawn();
    }
    last_frame.0 = None;
}

/// System to handle pulse effects (for eaten food flash).
fn pulse_effect_system(
    mut commands: Commands,
    time: Res<Time>,
    mut effects: Query<(Entity, &mut Transform, &mut PulseEffect)>,
) {
    for (entity, mut transform, mut effect) in effects.iter_mut() {
        effect.timer.tick(time.delta());

        if effect.timer.is_finished() {
            commands.entity(entity).despawn();
        } else {
            let progress = effect.timer.fraction();
            let scale = effect.start_scale + (effect.end_scale - effect.start_scale) * progress;
            transform.scale = Vec3::splat(scale);
        }
    }
}

/// System to spawn visual effect when food is eaten.
fn spawn_food_eaten_effect(
    mut commands: Commands,
    mut food_eaten_reader: MessageReader<FoodEatenEvent>,
) {
    for event in food_eaten_reader.read() {
        let translation = board_to_world(event.position).extend(Z_FOOD + 0.5);

        commands.spawn((
            ShapeBundle::circle(
                &ShapeConfig {
                    color: FLASH_COLOR,
                    hollow: true,
                    thickness: 2.0,
                    transform: Transform::from_translation(translation),
                    ..ShapeConfig::default_2d()
                },
                CELL_PIXELS / 2.0,
            ),
            PulseEffect {
                timer: Timer::from_seconds(0.3, TimerMode::Once),
                start_scale: 1.0,
                end_scale: 2.5,
            },
        ));
    }
}

/// System to trigger camera shake when the session ends.
fn trigger_camera_shake_on_game_over(
    mut ended_reader: MessageReader<SessionEnded>,
    mut camera_shake: ResMut<CameraShake>,
) {
    if ended_reader.read().next().is_some() {
        camera_shake.timer = Timer::from_seconds(0.4, TimerMode::Once);
        camera_shake.intensity = 8.0;
    }
}

/// System to apply camera shake effect.
fn camera_shake_system(
    time: Res<Time>,
    mut camera_shake: ResMut<CameraShake>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    if camera_shake.timer.is_finished() {
        return;
    }
    camera_shake.timer.tick(time.delta());

    if let Ok(mut camera_transform) = camera_query.single_mut() {
        if camera_shake.timer.is_finished() {
            // Reset camera position when shake is done
            camera_transform.translation.x = 0.0;
            camera_transform.translation.y = 0.0;
        } else {
            let decay = 1.0 - camera_shake.timer.fraction();

            let mut rng = rand::rng();
            let shake_x = (rng.random::<f32>() - 0.5) * camera_shake.intensity * decay;
            let shake_y = (rng.random::<f32>() - 0.5) * camera_shake.intensity * decay;

            camera_transform.translation.x = shake_x;
            camera_transform.translation.y = shake_y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_corners_map_to_world_cell_centers() {
        assert_eq!(board_to_world(Point::new(0, 0)), Vec2::new(-290.0, 290.0));
        assert_eq!(board_to_world(Point::new(580, 580)), Vec2::new(290.0, -290.0));
        assert_eq!(board_to_world(Point::new(100, 300)), Vec2::new(-190.0, -10.0));
    }
}
