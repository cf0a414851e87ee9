//! Food plugin - spawns the food shape and animates it.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{CELL_PIXELS, FoodPulse, FoodSprite, Z_FOOD};

/// Plugin for food-related systems.
pub struct FoodPlugin;

impl Plugin for FoodPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, food_pulse_animation);
    }
}

/// Spawns the food square at a world translation.
pub fn spawn_food_sprite(commands: &mut Commands, translation: Vec2, color: Color) -> Entity {
    commands
        .spawn((
            ShapeBundle::rect(
                &ShapeConfig {
                    color,
                    transform: Transform::from_translation(translation.extend(Z_FOOD)),
                    ..ShapeConfig::default_2d()
                },
                Vec2::splat(CELL_PIXELS),
            ),
            FoodSprite,
            FoodPulse {
                timer: Timer::from_seconds(0.8, TimerMode::Repeating),
            },
        ))
        .id()
}

/// System to animate food with a pulsing effect.
fn food_pulse_animation(
    time: Res<Time>,
    mut foods: Query<(&mut Transform, &mut FoodPulse), With<FoodSprite>>,
) {
    for (mut transform, mut pulse) in foods.iter_mut() {
        pulse.timer.tick(time.delta());

        // Use sine wave for smooth pulsing
        let progress = pulse.timer.fraction();
        let scale = 1.0 + (progress * std::f32::consts::PI * 2.0).sin() * 0.1;

        transform.scale = Vec3::splat(scale);
    }
}
