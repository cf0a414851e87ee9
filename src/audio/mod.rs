//! Audio plugin - plays the eat and collision cues.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::engine::AudioCue;
use crate::game::{COLLISION_SOUND_PATH, COLLISION_VOLUME, EAT_SOUND_PATH, EAT_VOLUME, PlayCue};

/// Plugin for sound effects.
pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sound_effects)
            .add_systems(Update, play_cues);
    }
}

/// Loaded cue handles.
#[derive(Resource)]
struct SoundEffects {
    eat: Handle<AudioSource>,
    collision: Handle<AudioSource>,
}

impl SoundEffects {
    fn cue(&self, cue: AudioCue) -> (Handle<AudioSource>, f32) {
        match cue {
            AudioCue::Eat => (self.eat.clone(), EAT_VOLUME),
            AudioCue::Collision => (self.collision.clone(), COLLISION_VOLUME),
        }
    }
}

fn load_sound_effects(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundEffects {
        eat: asset_server.load(EAT_SOUND_PATH),
        collision: asset_server.load(COLLISION_SOUND_PATH),
    });
}

/// System to play each requested cue once. Players despawn when done.
fn play_cues(
    mut commands: Commands,
    mut cue_reader: MessageReader<PlayCue>,
    sounds: Option<Res<SoundEffects>>,
) {
    let Some(sounds) = sounds else {
        return;
    };

    for PlayCue { cue } in cue_reader.read() {
        let (handle, volume) = sounds.cue(*cue);
        debug!("Playing {:?} cue", cue);
        commands.spawn((
            AudioPlayer::new(handle),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(volume)),
        ));
    }
}
