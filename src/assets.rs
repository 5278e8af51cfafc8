//! Asset handles and the loader interface.
//!
//! The game never touches file formats or decoders; the host implements
//! `AssetService` and hands back opaque handles plus texture dimensions.

use glam::Vec2;

/// Opaque host-side texture id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Opaque host-side sound effect id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u32);

/// Opaque host-side music stream id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MusicHandle(pub u32);

/// A loaded texture: the handle plus its pixel dimensions, which layout
/// code needs for source rectangles and background wrapping.
#[derive(Debug, Clone, Copy)]
pub struct Texture {
    pub handle: TextureHandle,
    pub size: Vec2,
}

/// Host-side loading and disposal of media.
pub trait AssetService {
    fn load_texture(&mut self, path: &str) -> Texture;
    fn release_texture(&mut self, texture: TextureHandle);
    fn load_sound(&mut self, path: &str) -> SoundHandle;
    fn release_sound(&mut self, sound: SoundHandle);
    fn load_music(&mut self, path: &str) -> MusicHandle;
    fn release_music(&mut self, music: MusicHandle);
}

/// Every asset the game uses, loaded up front.
#[derive(Debug, Clone)]
pub struct GameAssets {
    pub background: Texture,
    pub player_eyes_open: Texture,
    pub player_eyes_closed: Texture,
    pub pipe: Texture,
    pub fly_sound: SoundHandle,
    pub hit_sound: SoundHandle,
    pub score_sound: SoundHandle,
    pub music: MusicHandle,
}

impl GameAssets {
    pub fn load(service: &mut dyn AssetService) -> Self {
        log::info!("loading game assets");
        Self {
            background: service.load_texture("data/background.jpg"),
            player_eyes_open: service.load_texture("data/player-eyes-open.png"),
            player_eyes_closed: service.load_texture("data/player-eyes-closed.png"),
            pipe: service.load_texture("data/pipe.png"),
            fly_sound: service.load_sound("data/fly.mp3"),
            hit_sound: service.load_sound("data/hit.mp3"),
            score_sound: service.load_sound("data/score.mp3"),
            music: service.load_music("data/music.mp3"),
        }
    }

    pub fn release(&self, service: &mut dyn AssetService) {
        service.release_texture(self.background.handle);
        service.release_texture(self.player_eyes_open.handle);
        service.release_texture(self.player_eyes_closed.handle);
        service.release_texture(self.pipe.handle);
        service.release_sound(self.fly_sound);
        service.release_sound(self.hit_sound);
        service.release_sound(self.score_sound);
        service.release_music(self.music);
    }
}
