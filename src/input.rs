//! Input routing
//!
//! Maps raw per-frame device queries to the semantic actions the simulation
//! understands. Desktop and mobile differ only in their binding tables and
//! in how taps are interpreted; both feed the same `TickInput`.

use glam::Vec2;

use crate::consts::*;
use crate::platform::{InputService, Key, Platform, WindowService};
use crate::render::Rect;
use crate::sim::{Mode, TickInput};

/// Key bindings for one platform. Empty slices mean the action has no key
/// trigger there (mobile actions ride on taps instead).
#[derive(Debug, Clone, Copy)]
pub struct Bindings {
    pub flap: &'static [Key],
    pub pause: &'static [Key],
    pub music: &'static [Key],
    pub confirm: &'static [Key],
    pub exit_request: &'static [Key],
    pub exit_confirm: &'static [Key],
    pub exit_deny: &'static [Key],
}

impl Bindings {
    pub fn desktop() -> Self {
        Self {
            flap: &[Key::Space, Key::Up, Key::W],
            pause: &[Key::P],
            music: &[Key::M],
            confirm: &[Key::Enter],
            exit_request: &[Key::Escape],
            exit_confirm: &[Key::Y],
            exit_deny: &[Key::N, Key::Escape],
        }
    }

    pub fn mobile() -> Self {
        Self {
            flap: &[],
            pause: &[],
            music: &[Key::M],
            confirm: &[],
            exit_request: &[],
            exit_confirm: &[],
            exit_deny: &[],
        }
    }

    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Desktop => Self::desktop(),
            Platform::Mobile => Self::mobile(),
        }
    }
}

/// Uniform scale at which the logical screen fits the host window.
pub fn screen_scale(host: Vec2) -> f32 {
    (host.x / GAME_WIDTH).min(host.y / GAME_HEIGHT)
}

/// Transform a host-screen position into logical game coordinates,
/// accounting for the letterboxed, centered scaling of the render target.
pub fn screen_to_game(pos: Vec2, host: Vec2) -> Vec2 {
    let scale = screen_scale(host);
    let offset = (host - Vec2::new(GAME_WIDTH, GAME_HEIGHT) * scale) * 0.5;
    (pos - offset) / scale
}

/// The tap-to-pause strip across the top of the screen (mobile).
pub fn pause_strip() -> Rect {
    Rect::new(0.0, 0.0, GAME_WIDTH, PAUSE_STRIP_HEIGHT)
}

/// Routes raw input to semantic actions for the active platform.
#[derive(Debug, Clone, Copy)]
pub struct Router {
    platform: Platform,
    bindings: Bindings,
}

impl Router {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            bindings: Bindings::for_platform(platform),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Build this frame's `TickInput`. The mode is needed to disambiguate
    /// overloaded raw triggers (Escape requests vs. denies exit; a mobile
    /// tap flaps, pauses, resumes or confirms depending on context).
    pub fn gather(
        &self,
        input: &dyn InputService,
        window: &dyn WindowService,
        mode: Mode,
    ) -> TickInput {
        let mut out = TickInput {
            focused: window.focused(),
            ..Default::default()
        };

        let any_pressed = |keys: &[Key]| keys.iter().any(|k| input.key_pressed(*k));
        let in_exit_dialog = matches!(mode, Mode::ExitConfirm { .. });

        // Alt+Enter is fullscreen; a bare Enter is the confirm action.
        let alt_down = input.key_down(Key::LeftAlt) || input.key_down(Key::RightAlt);
        let enter = any_pressed(self.bindings.confirm);
        out.fullscreen_toggle = enter && alt_down;
        // Holding Enter is accepted on the welcome screen; everywhere else
        // confirm is edge-triggered.
        out.confirm = if mode == Mode::FirstStart {
            !alt_down && self.bindings.confirm.iter().any(|k| input.key_down(*k))
        } else {
            enter && !alt_down
        };

        out.flap = any_pressed(self.bindings.flap);
        out.pause = any_pressed(self.bindings.pause);
        out.music_toggle = any_pressed(self.bindings.music);

        if in_exit_dialog {
            out.exit_confirm = any_pressed(self.bindings.exit_confirm);
            out.exit_deny = any_pressed(self.bindings.exit_deny);
        } else {
            out.exit_request = any_pressed(self.bindings.exit_request) || window.close_requested();
        }

        if self.platform.is_mobile() && input.tap() {
            self.route_tap(input, window, mode, &mut out);
        }

        out
    }

    /// A tap means different things depending on where the game is: begin on
    /// the welcome screen, restart after a crash, resume while paused, deny
    /// an open exit dialog (the safe answer, since mobile has no Y/N keys),
    /// and while running either pause (title strip) or flap (anywhere else).
    fn route_tap(
        &self,
        input: &dyn InputService,
        window: &dyn WindowService,
        mode: Mode,
        out: &mut TickInput,
    ) {
        match mode {
            Mode::FirstStart | Mode::GameOver => out.confirm = true,
            Mode::Paused => out.pause = true,
            Mode::Running => {
                let pos = screen_to_game(input.touch_pos(), window.screen_size());
                if pause_strip().contains(pos) {
                    out.pause = true;
                } else {
                    out.flap = true;
                }
            }
            Mode::ExitConfirm { .. } => out.exit_deny = true,
            Mode::FocusLost => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::sim::ResumePoint;

    #[derive(Default)]
    struct FakeInput {
        pressed: HashSet<Key>,
        down: HashSet<Key>,
        tap: bool,
        touch: Vec2,
    }

    impl InputService for FakeInput {
        fn key_pressed(&self, key: Key) -> bool {
            self.pressed.contains(&key)
        }
        fn key_down(&self, key: Key) -> bool {
            self.down.contains(&key)
        }
        fn tap(&self) -> bool {
            self.tap
        }
        fn touch_pos(&self) -> Vec2 {
            self.touch
        }
    }

    struct FakeWindow {
        focused: bool,
        close_requested: bool,
    }

    impl Default for FakeWindow {
        fn default() -> Self {
            Self {
                focused: true,
                close_requested: false,
            }
        }
    }

    impl WindowService for FakeWindow {
        fn focused(&self) -> bool {
            self.focused
        }
        fn close_requested(&self) -> bool {
            self.close_requested
        }
        fn fullscreen(&self) -> bool {
            false
        }
        fn set_fullscreen(&mut self, _on: bool) {}
        fn request_close(&mut self) {}
        fn screen_size(&self) -> Vec2 {
            Vec2::new(GAME_WIDTH, GAME_HEIGHT)
        }
    }

    #[test]
    fn desktop_flap_keys_map_to_flap() {
        let router = Router::new(Platform::Desktop);
        let window = FakeWindow::default();
        for key in [Key::Space, Key::Up, Key::W] {
            let mut input = FakeInput::default();
            input.pressed.insert(key);
            let out = router.gather(&input, &window, Mode::Running);
            assert!(out.flap, "{key:?} should flap");
        }
    }

    #[test]
    fn escape_requests_exit_then_denies_inside_dialog() {
        let router = Router::new(Platform::Desktop);
        let window = FakeWindow::default();
        let mut input = FakeInput::default();
        input.pressed.insert(Key::Escape);

        let out = router.gather(&input, &window, Mode::Running);
        assert!(out.exit_request);
        assert!(!out.exit_deny);

        let dialog = Mode::ExitConfirm {
            from: ResumePoint::Running,
        };
        let out = router.gather(&input, &window, dialog);
        assert!(!out.exit_request);
        assert!(out.exit_deny);
    }

    #[test]
    fn host_close_request_opens_exit_dialog() {
        let router = Router::new(Platform::Desktop);
        let window = FakeWindow {
            close_requested: true,
            ..Default::default()
        };
        let out = router.gather(&FakeInput::default(), &window, Mode::Running);
        assert!(out.exit_request);
    }

    #[test]
    fn alt_enter_is_fullscreen_not_confirm() {
        let router = Router::new(Platform::Desktop);
        let window = FakeWindow::default();
        let mut input = FakeInput::default();
        input.pressed.insert(Key::Enter);
        input.down.insert(Key::LeftAlt);
        let out = router.gather(&input, &window, Mode::GameOver);
        assert!(out.fullscreen_toggle);
        assert!(!out.confirm);
    }

    #[test]
    fn enter_held_begins_on_welcome_screen_only() {
        let router = Router::new(Platform::Desktop);
        let window = FakeWindow::default();
        let mut input = FakeInput::default();
        input.down.insert(Key::Enter);

        let out = router.gather(&input, &window, Mode::FirstStart);
        assert!(out.confirm);
        // Held (not pressed) Enter does not restart after a crash.
        let out = router.gather(&input, &window, Mode::GameOver);
        assert!(!out.confirm);
    }

    #[test]
    fn mobile_tap_flaps_or_pauses_by_position() {
        let router = Router::new(Platform::Mobile);
        let window = FakeWindow::default();

        let mut input = FakeInput {
            tap: true,
            touch: Vec2::new(GAME_WIDTH / 2.0, GAME_HEIGHT / 2.0),
            ..Default::default()
        };
        let out = router.gather(&input, &window, Mode::Running);
        assert!(out.flap);
        assert!(!out.pause);

        input.touch = Vec2::new(GAME_WIDTH / 2.0, PAUSE_STRIP_HEIGHT / 2.0);
        let out = router.gather(&input, &window, Mode::Running);
        assert!(out.pause);
        assert!(!out.flap);
    }

    #[test]
    fn mobile_tap_confirms_and_resumes_by_mode() {
        let router = Router::new(Platform::Mobile);
        let window = FakeWindow::default();
        let input = FakeInput {
            tap: true,
            ..Default::default()
        };

        assert!(router.gather(&input, &window, Mode::FirstStart).confirm);
        assert!(router.gather(&input, &window, Mode::GameOver).confirm);
        assert!(router.gather(&input, &window, Mode::Paused).pause);
    }

    #[test]
    fn mobile_tap_denies_an_open_exit_dialog() {
        // A host close request can open the dialog even though mobile has
        // no Y/N keys; a tap must be able to dismiss it.
        let router = Router::new(Platform::Mobile);
        let window = FakeWindow::default();
        let input = FakeInput {
            tap: true,
            ..Default::default()
        };

        let dialog = Mode::ExitConfirm {
            from: ResumePoint::Running,
        };
        let out = router.gather(&input, &window, dialog);
        assert!(out.exit_deny);
        assert!(!out.exit_confirm);
        assert!(!out.flap);
        assert!(!out.pause);
    }

    #[test]
    fn screen_to_game_undoes_letterboxing() {
        // Host twice as large with extra horizontal slack.
        let host = Vec2::new(GAME_WIDTH * 2.0 + 200.0, GAME_HEIGHT * 2.0);
        let center_host = host / 2.0;
        let game = screen_to_game(center_host, host);
        assert!((game.x - GAME_WIDTH / 2.0).abs() < 1e-3);
        assert!((game.y - GAME_HEIGHT / 2.0).abs() < 1e-3);
    }
}
