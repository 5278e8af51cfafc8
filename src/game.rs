//! Top-level game context.
//!
//! Owns the simulation state and every host-facing collaborator, and runs
//! the per-frame loop: gather input, advance the simulation, apply the
//! resulting events to audio, persistence and the window.

use crate::assets::{AssetService, GameAssets};
use crate::audio::{AudioDirector, AudioService};
use crate::highscore::HighScore;
use crate::input::Router;
use crate::persistence::ScoreStore;
use crate::platform::{InputService, Platform, WindowService};
use crate::render::RenderService;
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GameState};

/// Cap on the per-frame delta so a long stall (debugger, tab switch)
/// cannot teleport the player through a pipe.
const MAX_FRAME_DT: f32 = 0.1;

pub struct Game {
    state: GameState,
    settings: Settings,
    highscore: HighScore,
    router: Router,
    director: AudioDirector,
    assets: GameAssets,
    asset_service: Box<dyn AssetService>,
    audio: Box<dyn AudioService>,
    store: Box<dyn ScoreStore>,
}

impl Game {
    pub fn new(
        platform: Platform,
        seed: u64,
        mut asset_service: Box<dyn AssetService>,
        mut audio: Box<dyn AudioService>,
        store: Box<dyn ScoreStore>,
    ) -> Self {
        let settings = Settings::load(store.as_ref());
        let highscore = HighScore::load(store.as_ref());
        let assets = GameAssets::load(asset_service.as_mut());
        audio.set_music_volume(assets.music, settings.music_volume);

        let mut state = GameState::new(seed);
        state.high_score = highscore.best();
        state.background_width = assets.background.size.x;

        log::info!("game initialized: platform={platform:?} seed={seed}");

        Self {
            state,
            settings,
            highscore,
            router: Router::new(platform),
            director: AudioDirector::new(),
            assets,
            asset_service,
            audio,
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Advance one frame.
    pub fn update(&mut self, dt: f32, input: &dyn InputService, window: &mut dyn WindowService) {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        let tick_input = self.router.gather(input, window, self.state.mode);
        let events = sim::tick(&mut self.state, &tick_input, dt);

        for event in &events {
            self.apply(event, window);
            self.director
                .on_event(event, &self.settings, self.audio.as_mut(), &self.assets);
        }
        self.director.service(self.audio.as_mut(), &self.assets);
    }

    /// Side effects outside the audio director's remit.
    fn apply(&mut self, event: &GameEvent, window: &mut dyn WindowService) {
        match event {
            GameEvent::NewHighScore { value } => {
                self.highscore.submit(*value, self.store.as_mut());
            }
            GameEvent::ExitConfirmed => window.request_close(),
            GameEvent::MusicToggleRequested => {
                self.director
                    .toggle_music(&mut self.settings, self.audio.as_mut(), &self.assets);
                self.settings.save(self.store.as_mut());
            }
            GameEvent::FullscreenToggleRequested => {
                let on = !window.fullscreen();
                window.set_fullscreen(on);
                self.settings.fullscreen = on;
                self.settings.save(self.store.as_mut());
            }
            _ => {}
        }
    }

    pub fn draw(&self, r: &mut dyn RenderService) {
        crate::render::draw(&self.state, &self.assets, self.router.platform(), r);
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        self.assets.release(self.asset_service.as_mut());
    }
}
