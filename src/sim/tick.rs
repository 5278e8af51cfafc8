//! Per-frame update
//!
//! One call per host frame: resolves mode and blocking input first; only if
//! the mode permits simulation does it ramp difficulty, integrate motion,
//! spawn and advance pipes, and resolve scoring/collisions. Returns the
//! events the audio, persistence and window layers react to.

use super::{difficulty, physics, spawn};
use super::state::{GameEvent, GameState, Mode};
use crate::consts::*;

/// Semantic input for a single frame, produced by the input router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInput {
    /// Flap impulse (Running only).
    pub flap: bool,
    /// Pause toggle.
    pub pause: bool,
    /// Context-dependent confirm: begin on the welcome screen, restart on
    /// the game-over screen.
    pub confirm: bool,
    /// Open the exit-confirm dialog.
    pub exit_request: bool,
    /// Answer the exit-confirm dialog.
    pub exit_confirm: bool,
    pub exit_deny: bool,
    /// Music toggle (honored in any mode).
    pub music_toggle: bool,
    /// Fullscreen toggle.
    pub fullscreen_toggle: bool,
    /// Host window focus, sampled every frame (level-triggered).
    pub focused: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            flap: false,
            pause: false,
            confirm: false,
            exit_request: false,
            exit_confirm: false,
            exit_deny: false,
            music_toggle: false,
            fullscreen_toggle: false,
            focused: true,
        }
    }
}

/// Advance the game by one frame. A zero `dt` is a defensive no-op: no
/// state is mutated and no events fire.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if dt == 0.0 {
        return events;
    }

    // Toggles that bypass mode gating entirely.
    if input.music_toggle {
        events.push(GameEvent::MusicToggleRequested);
    }
    if input.fullscreen_toggle {
        events.push(GameEvent::FullscreenToggleRequested);
    }

    state.set_focus(input.focused);

    // Blocking input: menus and mode transitions before any simulation.
    if input.exit_request && state.request_exit() {
        events.push(GameEvent::ExitRequested);
    }
    match state.mode {
        Mode::ExitConfirm { .. } => {
            if input.exit_confirm && state.confirm_exit() {
                events.push(GameEvent::ExitConfirmed);
            } else if input.exit_deny {
                state.deny_exit();
            }
        }
        Mode::FirstStart => {
            if input.confirm && state.begin() {
                events.push(GameEvent::RunStarted);
            }
        }
        Mode::Running | Mode::Paused => {
            if input.pause {
                if let Some(paused) = state.toggle_pause() {
                    events.push(GameEvent::PauseChanged { paused });
                }
            }
        }
        Mode::FocusLost | Mode::GameOver => {}
    }

    if state.mode == Mode::GameOver {
        state.game_over_timer = (state.game_over_timer - dt).max(0.0);
        // Restart is gated until the post-collision delay has elapsed.
        if state.game_over_timer <= 0.0 && input.confirm {
            state.reset();
            events.push(GameEvent::RunStarted);
        }
        return events;
    }

    if !state.mode.is_running() {
        return events;
    }

    if input.flap {
        physics::apply_flap(&mut state.player, JUMP_FORCE);
        state.eyes_closed_timer = EYES_CLOSED_DURATION;
        events.push(GameEvent::Flap);
    }

    let pacing = difficulty::tick(
        dt,
        state.pipe_speed,
        MAX_PIPE_SPEED,
        PIPE_SPEED_INCREASE,
        state.base_distance,
    );
    state.pipe_speed = pacing.pipe_speed;
    state.spawn_interval = pacing.spawn_interval;
    state.scroll_speed = pacing.scroll_speed;

    state.scroll_x += state.scroll_speed * dt;
    if state.scroll_x >= state.background_width {
        state.scroll_x -= state.background_width;
    }

    physics::integrate(&mut state.player, GRAVITY, dt);
    let bbox = physics::collision_box(&state.player);
    let mut crashed = physics::hits_boundary(&bbox, GAME_HEIGHT);

    state.spawn_timer += dt;
    if let Some(pipe) = spawn::maybe_spawn(
        state.pipes.last(),
        &mut state.rng,
        &mut state.spawn_timer,
        state.spawn_interval,
        GAME_WIDTH,
        GAME_HEIGHT,
        PIPE_GAP,
        MAX_GAP_DELTA,
    ) {
        state.pipes.push(pipe);
    }

    // Scoring runs for every pipe even on the crash frame; collision checks
    // stop once the frame has crashed.
    for pipe in &mut state.pipes {
        pipe.x -= state.pipe_speed * dt;

        if !pipe.scored && physics::passed_pipe(state.player.pos.x, pipe, PIPE_WIDTH) {
            pipe.scored = true;
            state.score += 1;
            events.push(GameEvent::Scored { total: state.score });
            if state.score > state.high_score {
                state.high_score = state.score;
                events.push(GameEvent::NewHighScore {
                    value: state.high_score,
                });
            }
        }

        if !crashed && physics::hits_pipe(&bbox, pipe, PIPE_WIDTH, PIPE_GAP) {
            crashed = true;
        }
    }

    state.pipes.retain(|p| !physics::off_screen(p, PIPE_WIDTH));

    if state.eyes_closed_timer > 0.0 {
        state.eyes_closed_timer = (state.eyes_closed_timer - dt).max(0.0);
    }

    if crashed {
        state.crash();
        events.push(GameEvent::Crashed);
    }

    events
}
