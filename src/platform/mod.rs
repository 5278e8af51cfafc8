//! Platform abstraction layer
//!
//! Collaborator traits for raw input and the host window, plus the
//! mobile/desktop capability switch. The switch is plain configuration
//! passed at construction, never conditional compilation: all platforms
//! share one code path with data-driven differences.

use glam::Vec2;

/// Host platform capabilities, selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Desktop,
    Mobile,
}

impl Platform {
    pub fn is_mobile(self) -> bool {
        self == Platform::Mobile
    }
}

/// Symbolic key codes the game binds actions to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Up,
    W,
    P,
    M,
    Y,
    N,
    Enter,
    Escape,
    LeftAlt,
    RightAlt,
}

/// Raw per-frame input queries. `key_pressed` is edge-triggered (this frame
/// only), `key_down` is level-triggered.
pub trait InputService {
    fn key_pressed(&self, key: Key) -> bool;
    fn key_down(&self, key: Key) -> bool;
    /// Tap gesture detected this frame (mobile).
    fn tap(&self) -> bool;
    /// Last touch position in host screen coordinates.
    fn touch_pos(&self) -> Vec2;
}

/// Host window queries and requests.
pub trait WindowService {
    fn focused(&self) -> bool;
    /// Host asked to close the window this frame (e.g. the close button).
    fn close_requested(&self) -> bool;
    fn fullscreen(&self) -> bool;
    fn set_fullscreen(&mut self, on: bool);
    fn request_close(&mut self);
    /// Current host window size in screen pixels.
    fn screen_size(&self) -> Vec2;
}

/// Initialize the `log` backend for the current target.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    env_logger::init();
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
