//! Hovercat - a flap-to-avoid-pipes side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `input`: Raw-input-to-semantic-action routing with per-platform bindings
//! - `render`: Presentation adapter over a narrow draw-call interface
//! - `platform`: Input/window collaborator traits and platform capabilities
//! - `persistence`: High score storage backends
//! - `audio`: Event-driven sound cue and music direction

pub mod assets;
pub mod audio;
pub mod game;
pub mod highscore;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscore::HighScore;
pub use settings::Settings;

/// Game tuning constants
pub mod consts {
    /// Logical screen size; rendering scales this to the host window.
    pub const GAME_WIDTH: f32 = 1280.0;
    pub const GAME_HEIGHT: f32 = 720.0;

    /// Player sprite is square; the collision box is a scaled-down AABB.
    pub const PLAYER_SIZE: f32 = 80.0;
    pub const PLAYER_COLLISION_WIDTH_RATIO: f32 = 0.70;
    pub const PLAYER_COLLISION_HEIGHT_RATIO: f32 = 0.55;

    /// Downward acceleration in px/s² and the fixed upward flap impulse in px/s.
    pub const GRAVITY: f32 = 1200.0;
    pub const JUMP_FORCE: f32 = -480.0;

    /// Pipe geometry
    pub const PIPE_WIDTH: f32 = 110.0;
    pub const PIPE_GAP: f32 = 260.0;
    /// Bound on vertical swing between consecutive gap centers.
    pub const MAX_GAP_DELTA: f32 = 220.0;

    /// Pipe motion and difficulty ramp
    pub const BASE_PIPE_SPEED: f32 = 260.0;
    pub const MAX_PIPE_SPEED: f32 = 520.0;
    pub const PIPE_SPEED_INCREASE: f32 = 6.0;
    pub const BASE_SPAWN_INTERVAL: f32 = 2.0;
    /// Background scrolls at this fraction of pipe speed (parallax).
    pub const BACKGROUND_SCROLL_FACTOR: f32 = 0.2;

    /// Restart input is ignored for this long after a crash, in seconds.
    pub const GAME_OVER_DELAY: f32 = 1.0;
    /// How long the player sprite shows closed eyes after a flap.
    pub const EYES_CLOSED_DURATION: f32 = 0.25;

    /// Music stream volume, set once at load.
    pub const MUSIC_VOLUME: f32 = 0.15;
    /// Height of the mobile tap-to-pause strip at the top of the screen.
    pub const PAUSE_STRIP_HEIGHT: f32 = 100.0;
}
