//! Headless demo runner.
//!
//! Drives the game loop with stub host services at a fixed timestep. Useful
//! for exercising the full stack (input routing, simulation, events, audio
//! direction, persistence) without a window; a graphical host implements
//! the same service traits against its own renderer and audio device.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use hovercat::Game;
    use hovercat::assets::{AssetService, MusicHandle, SoundHandle, Texture, TextureHandle};
    use hovercat::audio::AudioService;
    use hovercat::consts::{GAME_HEIGHT, GAME_WIDTH};
    use hovercat::persistence::FileStore;
    use hovercat::platform::{InputService, Key, Platform, WindowService};

    const DT: f32 = 1.0 / 60.0;

    #[derive(Default)]
    struct StubAssets {
        next: u32,
    }

    impl AssetService for StubAssets {
        fn load_texture(&mut self, path: &str) -> Texture {
            self.next += 1;
            log::debug!("stub texture {}: {path}", self.next);
            Texture {
                handle: TextureHandle(self.next),
                size: Vec2::new(GAME_WIDTH * 2.0, GAME_HEIGHT),
            }
        }
        fn release_texture(&mut self, _texture: TextureHandle) {}
        fn load_sound(&mut self, _path: &str) -> SoundHandle {
            self.next += 1;
            SoundHandle(self.next)
        }
        fn release_sound(&mut self, _sound: SoundHandle) {}
        fn load_music(&mut self, _path: &str) -> MusicHandle {
            self.next += 1;
            MusicHandle(self.next)
        }
        fn release_music(&mut self, _music: MusicHandle) {}
    }

    struct StubAudio;

    impl AudioService for StubAudio {
        fn play_sound(&mut self, _sound: SoundHandle) {}
        fn stop_sound(&mut self, _sound: SoundHandle) {}
        fn play_music(&mut self, _music: MusicHandle) {}
        fn pause_music(&mut self, _music: MusicHandle) {}
        fn stop_music(&mut self, _music: MusicHandle) {}
        fn update_music(&mut self, _music: MusicHandle) {}
        fn set_music_volume(&mut self, _music: MusicHandle, _volume: f32) {}
    }

    /// Replays a fixed key script, one entry per frame.
    struct ScriptedInput {
        keys: Vec<Key>,
    }

    impl InputService for ScriptedInput {
        fn key_pressed(&self, key: Key) -> bool {
            self.keys.contains(&key)
        }
        fn key_down(&self, key: Key) -> bool {
            self.keys.contains(&key)
        }
        fn tap(&self) -> bool {
            false
        }
        fn touch_pos(&self) -> Vec2 {
            Vec2::ZERO
        }
    }

    #[derive(Default)]
    struct StubWindow {
        fullscreen: bool,
        close_requested: bool,
    }

    impl WindowService for StubWindow {
        fn focused(&self) -> bool {
            true
        }
        fn close_requested(&self) -> bool {
            false
        }
        fn fullscreen(&self) -> bool {
            self.fullscreen
        }
        fn set_fullscreen(&mut self, on: bool) {
            self.fullscreen = on;
        }
        fn request_close(&mut self) {
            self.close_requested = true;
        }
        fn screen_size(&self) -> Vec2 {
            Vec2::new(GAME_WIDTH, GAME_HEIGHT)
        }
    }

    pub fn run() {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let store = FileStore::open(std::env::temp_dir().join("hovercat-save.json"));

        let mut game = Game::new(
            Platform::Desktop,
            seed,
            Box::new(StubAssets::default()),
            Box::new(StubAudio),
            Box::new(store),
        );
        let mut window = StubWindow::default();

        // Start the run, then flap twice a second for ten seconds.
        let frame = |n: u32| -> Vec<Key> {
            match n {
                0 => vec![Key::Enter],
                n if n % 30 == 0 => vec![Key::Space],
                _ => Vec::new(),
            }
        };

        for n in 0..600 {
            let input = ScriptedInput { keys: frame(n) };
            game.update(DT, &input, &mut window);
            if window.close_requested {
                break;
            }
        }

        let state = game.state();
        log::info!(
            "demo finished: mode={:?} score={} high_score={}",
            state.mode,
            state.score,
            state.high_score
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    hovercat::platform::init_logging();
    headless::run();
}

// The web build is driven from JavaScript through the library crate.
#[cfg(target_arch = "wasm32")]
fn main() {}
