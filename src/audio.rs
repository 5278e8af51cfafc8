//! Audio reactions to game events.
//!
//! The simulation only emits events; `AudioDirector` turns them into sound
//! and music calls and tracks whether the music stream is currently
//! playing.

use crate::assets::GameAssets;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Host-side audio playback.
pub trait AudioService {
    fn play_sound(&mut self, sound: crate::assets::SoundHandle);
    fn stop_sound(&mut self, sound: crate::assets::SoundHandle);
    fn play_music(&mut self, music: crate::assets::MusicHandle);
    fn pause_music(&mut self, music: crate::assets::MusicHandle);
    fn stop_music(&mut self, music: crate::assets::MusicHandle);
    /// Feed the music stream buffer; call once per frame while playing.
    fn update_music(&mut self, music: crate::assets::MusicHandle);
    fn set_music_volume(&mut self, music: crate::assets::MusicHandle, volume: f32);
}

#[derive(Debug, Default)]
pub struct AudioDirector {
    music_playing: bool,
}

impl AudioDirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    /// React to a single simulation event.
    pub fn on_event(
        &mut self,
        event: &GameEvent,
        settings: &Settings,
        audio: &mut dyn AudioService,
        assets: &GameAssets,
    ) {
        match event {
            GameEvent::Flap => audio.play_sound(assets.fly_sound),
            GameEvent::Scored { .. } => audio.play_sound(assets.score_sound),
            GameEvent::Crashed => {
                // Cut everything, then the hit cue plays over silence.
                audio.stop_music(assets.music);
                audio.stop_sound(assets.fly_sound);
                audio.stop_sound(assets.score_sound);
                audio.play_sound(assets.hit_sound);
                self.music_playing = false;
            }
            GameEvent::RunStarted => {
                if settings.music_enabled && !settings.music_manually_disabled {
                    audio.play_music(assets.music);
                    self.music_playing = true;
                }
            }
            _ => {}
        }
    }

    /// Per-frame music stream upkeep.
    pub fn service(&mut self, audio: &mut dyn AudioService, assets: &GameAssets) {
        if self.music_playing {
            audio.update_music(assets.music);
        }
    }

    /// Flip music on or off at the user's request, keeping `music_enabled`
    /// in sync. The manual-disable flag is sticky: it survives crashes and
    /// restarts until toggled back. Returns the new playing state.
    pub fn toggle_music(
        &mut self,
        settings: &mut Settings,
        audio: &mut dyn AudioService,
        assets: &GameAssets,
    ) -> bool {
        if self.music_playing {
            audio.pause_music(assets.music);
            self.music_playing = false;
            settings.music_enabled = false;
            settings.music_manually_disabled = true;
        } else {
            audio.play_music(assets.music);
            self.music_playing = true;
            settings.music_enabled = true;
            settings.music_manually_disabled = false;
        }
        log::info!(
            "music toggled: playing={} manually_disabled={}",
            self.music_playing,
            settings.music_manually_disabled
        );
        self.music_playing
    }
}
