//! Game state and core simulation types
//!
//! The mode machine is a single enum with explicit transition functions;
//! transitions attempted from invalid source states are ignored.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Which mode an exit-confirm dialog interrupted, so denial can restore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumePoint {
    FirstStart,
    Running,
    Paused,
    GameOver,
}

/// Modal game mode. At most one is ever active; `Running` is the only mode
/// in which the simulation advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Welcome screen shown once per process, before the first run.
    FirstStart,
    /// Active gameplay.
    Running,
    /// Paused by the player.
    Paused,
    /// Host window lost focus (level-triggered, resumes on regain).
    FocusLost,
    /// "Are you sure you want to exit?" dialog.
    ExitConfirm { from: ResumePoint },
    /// Run ended by a collision; restart gated by a delay timer.
    GameOver,
}

impl Mode {
    /// True only for the mode in which physics, spawning, collision and
    /// scoring advance.
    pub fn is_running(self) -> bool {
        self == Mode::Running
    }
}

/// Events produced by a tick, consumed by the audio/persistence/window layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player flapped.
    Flap,
    /// A pipe was passed; `total` is the score after the increment.
    Scored { total: u32 },
    /// Live score exceeded the stored high score.
    NewHighScore { value: u32 },
    /// Collision ended the run.
    Crashed,
    /// A run began (first start or restart after game over).
    RunStarted,
    /// Pause toggled.
    PauseChanged { paused: bool },
    /// Exit-confirm dialog opened.
    ExitRequested,
    /// Exit confirmed; the host should close.
    ExitConfirmed,
    /// Music toggle action (honored in any mode).
    MusicToggleRequested,
    /// Fullscreen toggle action.
    FullscreenToggleRequested,
}

/// The player: fixed x for the whole run, dynamic y and vertical velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel_y: f32,
    /// Visual sprite size (square). The collision box is derived from it.
    pub size: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(GAME_WIDTH / 4.0, GAME_HEIGHT / 2.0),
            vel_y: 0.0,
            size: PLAYER_SIZE,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// One obstacle. Spawn order equals left-to-right position order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Left edge; decreases over time.
    pub x: f32,
    /// Vertical midpoint of the passable opening.
    pub gap_center: f32,
    /// Set once the player has passed the right edge (scoring idempotence).
    pub scored: bool,
}

/// Complete run state. Exclusively owned by the frame loop; no locking.
#[derive(Debug, Clone)]
pub struct GameState {
    pub mode: Mode,
    pub player: Player,
    pub pipes: Vec<Pipe>,
    /// Monotone within a run.
    pub score: u32,
    /// Live mirror of the persisted high score.
    pub high_score: u32,
    /// Monotone within a run, clamped to `MAX_PIPE_SPEED`.
    pub pipe_speed: f32,
    /// Recomputed every tick as `base_distance / pipe_speed`.
    pub spawn_interval: f32,
    /// Idle time since the last spawn; reset to exactly zero on fire.
    pub spawn_timer: f32,
    /// Spatial gap between pipes, fixed at run start.
    pub base_distance: f32,
    /// Background scroll offset, wraps modulo `background_width`.
    pub scroll_x: f32,
    pub scroll_speed: f32,
    /// Width of the background texture; set by the owner at construction.
    pub background_width: f32,
    /// Restart input is ignored until this reaches zero.
    pub game_over_timer: f32,
    /// Player sprite shows closed eyes while this is positive.
    pub eyes_closed_timer: f32,
    /// Set when the exit dialog is confirmed; polled by the host.
    pub close_requested: bool,
    pub seed: u64,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a fresh state on the welcome screen. The spawn timer starts at
    /// the full interval so the first pipe appears on the first running frame.
    pub fn new(seed: u64) -> Self {
        Self {
            mode: Mode::FirstStart,
            player: Player::new(),
            pipes: Vec::new(),
            score: 0,
            high_score: 0,
            pipe_speed: BASE_PIPE_SPEED,
            spawn_interval: BASE_SPAWN_INTERVAL,
            spawn_timer: BASE_SPAWN_INTERVAL,
            base_distance: BASE_PIPE_SPEED * BASE_SPAWN_INTERVAL,
            scroll_x: 0.0,
            scroll_speed: BASE_PIPE_SPEED * BACKGROUND_SCROLL_FACTOR,
            background_width: GAME_WIDTH,
            game_over_timer: 0.0,
            eyes_closed_timer: 0.0,
            close_requested: false,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Full run reset: clears pipes, score, speed and timers, re-enters
    /// `Running`. Preserves the high score and the RNG stream.
    pub fn reset(&mut self) {
        self.player = Player::new();
        self.pipes.clear();
        self.score = 0;
        self.pipe_speed = BASE_PIPE_SPEED;
        self.spawn_interval = BASE_SPAWN_INTERVAL;
        self.spawn_timer = 0.0;
        self.scroll_speed = BASE_PIPE_SPEED * BACKGROUND_SCROLL_FACTOR;
        self.game_over_timer = 0.0;
        self.eyes_closed_timer = 0.0;
        self.mode = Mode::Running;
    }

    /// FirstStart → Running. Returns false from any other mode.
    pub fn begin(&mut self) -> bool {
        if self.mode == Mode::FirstStart {
            self.mode = Mode::Running;
            true
        } else {
            log::debug!("begin ignored in {:?}", self.mode);
            false
        }
    }

    /// Running ⇄ Paused. Returns the new paused flag, or None if the toggle
    /// is not valid from the current mode.
    pub fn toggle_pause(&mut self) -> Option<bool> {
        match self.mode {
            Mode::Running => {
                self.mode = Mode::Paused;
                Some(true)
            }
            Mode::Paused => {
                self.mode = Mode::Running;
                Some(false)
            }
            _ => {
                log::debug!("pause toggle ignored in {:?}", self.mode);
                None
            }
        }
    }

    /// Level-triggered focus handling: Running → FocusLost on loss,
    /// FocusLost → Running on regain. Other modes are unaffected.
    pub fn set_focus(&mut self, focused: bool) {
        match (self.mode, focused) {
            (Mode::Running, false) => self.mode = Mode::FocusLost,
            (Mode::FocusLost, true) => self.mode = Mode::Running,
            _ => {}
        }
    }

    /// Open the exit-confirm dialog, remembering where to resume on denial.
    pub fn request_exit(&mut self) -> bool {
        let from = match self.mode {
            Mode::FirstStart => ResumePoint::FirstStart,
            Mode::Running => ResumePoint::Running,
            Mode::Paused => ResumePoint::Paused,
            Mode::GameOver => ResumePoint::GameOver,
            Mode::FocusLost | Mode::ExitConfirm { .. } => return false,
        };
        self.mode = Mode::ExitConfirm { from };
        true
    }

    /// Confirm the exit dialog; terminal.
    pub fn confirm_exit(&mut self) -> bool {
        if let Mode::ExitConfirm { .. } = self.mode {
            self.close_requested = true;
            true
        } else {
            false
        }
    }

    /// Deny the exit dialog, restoring the interrupted mode.
    pub fn deny_exit(&mut self) -> bool {
        if let Mode::ExitConfirm { from } = self.mode {
            self.mode = match from {
                ResumePoint::FirstStart => Mode::FirstStart,
                ResumePoint::Running => Mode::Running,
                ResumePoint::Paused => Mode::Paused,
                ResumePoint::GameOver => Mode::GameOver,
            };
            true
        } else {
            false
        }
    }

    /// Running → GameOver; arms the restart-delay timer.
    pub fn crash(&mut self) {
        if self.mode == Mode::Running {
            self.mode = Mode::GameOver;
            self.game_over_timer = GAME_OVER_DELAY;
        } else {
            log::debug!("crash ignored in {:?}", self.mode);
        }
    }
}
