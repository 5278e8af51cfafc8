//! Presentation adapter
//!
//! Translates game state into draw calls against the narrow `RenderService`
//! interface. Strictly read-only over the simulation: nothing here mutates
//! state, and all layout happens in logical screen coordinates (the host
//! scales to the window).

use glam::Vec2;

use crate::assets::{GameAssets, Texture};
use crate::consts::*;
use crate::input::pause_strip;
use crate::platform::Platform;
use crate::sim::{GameState, Mode, Pipe};

/// The pipe texture's cap region height, in texture pixels.
const PIPE_CAP_HEIGHT: f32 = 24.0;
/// Right margin for the HUD column.
const HUD_PADDING: f32 = 20.0;
const HUD_TEXT_SIZE: f32 = 20.0;

/// Axis-aligned rectangle in logical screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const YELLOW: Color = Color::rgb(243, 216, 63);
    /// Barely-there gray for the mobile pause strip.
    pub const STRIP_GRAY: Color = Color::rgba(128, 128, 128, 8);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Low-level draw primitives supplied by the host renderer.
///
/// `draw_texture` blits the `src` region of a texture into `dst`, scaling as
/// needed; a negative `src.h` means the region is sampled flipped
/// vertically.
pub trait RenderService {
    fn draw_texture(&mut self, texture: &Texture, src: Rect, dst: Rect, tint: Color);
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_rounded_rect(&mut self, rect: Rect, roundness: f32, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
    fn measure_text(&self, text: &str, size: f32) -> f32;
}

/// Compose one frame: background, pipes, player, HUD, then the modal
/// overlay for the active mode.
pub fn draw(
    state: &GameState,
    assets: &GameAssets,
    platform: Platform,
    r: &mut dyn RenderService,
) {
    draw_background(state, &assets.background, r);
    for pipe in &state.pipes {
        draw_pipe(pipe, &assets.pipe, r);
    }
    draw_player(state, assets, r);
    draw_hud(state, platform, r);
    draw_overlay(state, platform, r);
}

/// Scrolling background: one blit when the visible window fits inside the
/// texture at the current offset, two when it wraps.
fn draw_background(state: &GameState, background: &Texture, r: &mut dyn RenderService) {
    let tex_w = background.size.x;
    let src_x = state.scroll_x;

    if src_x + GAME_WIDTH <= tex_w {
        r.draw_texture(
            background,
            Rect::new(src_x, 0.0, GAME_WIDTH, GAME_HEIGHT),
            Rect::new(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT),
            Color::WHITE,
        );
    } else {
        let first = tex_w - src_x;
        r.draw_texture(
            background,
            Rect::new(src_x, 0.0, first, GAME_HEIGHT),
            Rect::new(0.0, 0.0, first, GAME_HEIGHT),
            Color::WHITE,
        );
        r.draw_texture(
            background,
            Rect::new(0.0, 0.0, GAME_WIDTH - first, GAME_HEIGHT),
            Rect::new(first, 0.0, GAME_WIDTH - first, GAME_HEIGHT),
            Color::WHITE,
        );
    }
}

/// Each pipe is a top column and a bottom column around the opening, each
/// drawn as a stretched body plus a fixed-height cap facing the gap.
fn draw_pipe(pipe: &Pipe, texture: &Texture, r: &mut dyn RenderService) {
    let top_height = pipe.gap_center - PIPE_GAP / 2.0;
    let bottom_y = pipe.gap_center + PIPE_GAP / 2.0;
    let bottom_height = GAME_HEIGHT - bottom_y;

    let tex_w = texture.size.x;
    let body_src = Rect::new(
        0.0,
        PIPE_CAP_HEIGHT,
        tex_w,
        texture.size.y - PIPE_CAP_HEIGHT,
    );
    let cap_src = Rect::new(0.0, 0.0, tex_w, PIPE_CAP_HEIGHT);
    // Flipped variants for the top column, which points downward.
    let body_src_flipped = Rect::new(0.0, texture.size.y, tex_w, -(texture.size.y - PIPE_CAP_HEIGHT));
    let cap_src_flipped = Rect::new(0.0, PIPE_CAP_HEIGHT, tex_w, -PIPE_CAP_HEIGHT);

    if top_height > 0.0 {
        let body_h = top_height - PIPE_CAP_HEIGHT;
        if body_h > 0.0 {
            r.draw_texture(
                texture,
                body_src_flipped,
                Rect::new(pipe.x, 0.0, PIPE_WIDTH, body_h),
                Color::WHITE,
            );
        }
        // Anchor the cap's bottom edge at the column height; for columns
        // shorter than the cap this crops above the screen rather than
        // pushing the cap down into the opening.
        r.draw_texture(
            texture,
            cap_src_flipped,
            Rect::new(pipe.x, top_height - PIPE_CAP_HEIGHT, PIPE_WIDTH, PIPE_CAP_HEIGHT),
            Color::WHITE,
        );
    }

    if bottom_height > 0.0 {
        r.draw_texture(
            texture,
            cap_src,
            Rect::new(pipe.x, bottom_y, PIPE_WIDTH, PIPE_CAP_HEIGHT),
            Color::WHITE,
        );
        let body_h = bottom_height - PIPE_CAP_HEIGHT;
        if body_h > 0.0 {
            r.draw_texture(
                texture,
                body_src,
                Rect::new(pipe.x, bottom_y + PIPE_CAP_HEIGHT, PIPE_WIDTH, body_h),
                Color::WHITE,
            );
        }
    }
}

fn draw_player(state: &GameState, assets: &GameAssets, r: &mut dyn RenderService) {
    // Eyes close briefly on each flap, and stay closed after a crash.
    let texture = if state.mode == Mode::GameOver || state.eyes_closed_timer > 0.0 {
        &assets.player_eyes_closed
    } else {
        &assets.player_eyes_open
    };

    let size = state.player.size;
    r.draw_texture(
        texture,
        Rect::new(0.0, 0.0, texture.size.x, texture.size.y),
        Rect::new(
            state.player.pos.x - size / 2.0,
            state.player.pos.y - size / 2.0,
            size,
            size,
        ),
        Color::WHITE,
    );
}

fn draw_hud(state: &GameState, platform: Platform, r: &mut dyn RenderService) {
    if platform.is_mobile() {
        let strip = pause_strip();
        r.draw_rect(strip, Color::STRIP_GRAY);
        draw_centered(r, "Tap to pause", 40.0, HUD_TEXT_SIZE, Color::BLACK);
    }

    let lines = [
        (format!("Score: {}", state.score), 20.0),
        (format!("High Score: {}", state.high_score), 50.0),
        (format!("Speed: {}", state.pipe_speed as i32), 80.0),
    ];
    for (text, y) in &lines {
        let w = r.measure_text(text, HUD_TEXT_SIZE);
        r.draw_text(
            text,
            Vec2::new(GAME_WIDTH - w - HUD_PADDING, *y),
            HUD_TEXT_SIZE,
            Color::BLACK,
        );
    }

    if !platform.is_mobile() {
        draw_centered(
            r,
            "Press M to toggle music",
            GAME_HEIGHT - 30.0,
            HUD_TEXT_SIZE,
            Color::BLACK,
        );
    }
}

/// One modal overlay at most; precedence follows the mode enum.
fn draw_overlay(state: &GameState, platform: Platform, r: &mut dyn RenderService) {
    match state.mode {
        Mode::ExitConfirm { .. } => {
            dialog_panel(r, 60.0);
            draw_centered(
                r,
                "Are you sure you want to exit? [Y/N]",
                GAME_HEIGHT / 2.0,
                HUD_TEXT_SIZE,
                Color::YELLOW,
            );
        }
        Mode::FirstStart => draw_welcome(platform, r),
        Mode::Paused => {
            dialog_panel(r, 60.0);
            let hint = if platform.is_mobile() {
                "Game paused, tap to continue"
            } else {
                "Game paused, press P to continue"
            };
            draw_centered(r, hint, GAME_HEIGHT / 2.0, HUD_TEXT_SIZE, Color::YELLOW);
        }
        Mode::FocusLost => {
            dialog_panel(r, 60.0);
            draw_centered(
                r,
                "Game paused, focus window to continue",
                GAME_HEIGHT / 2.0,
                HUD_TEXT_SIZE,
                Color::YELLOW,
            );
        }
        Mode::GameOver => {
            dialog_panel(r, 100.0);
            draw_centered(
                r,
                &format!("Game Over! Score: {}", state.score),
                GAME_HEIGHT / 2.0 - 10.0,
                HUD_TEXT_SIZE,
                Color::YELLOW,
            );
            let hint = if platform.is_mobile() {
                "Tap to play again"
            } else {
                "Press Enter to play again"
            };
            draw_centered(r, hint, GAME_HEIGHT / 2.0 + 30.0, HUD_TEXT_SIZE, Color::YELLOW);
        }
        Mode::Running => {}
    }
}

fn draw_welcome(platform: Platform, r: &mut dyn RenderService) {
    r.draw_rounded_rect(
        Rect::new(
            GAME_WIDTH / 2.0 - 350.0,
            GAME_HEIGHT / 2.0 - 160.0,
            700.0,
            320.0,
        ),
        0.76,
        Color::BLACK,
    );

    let left = GAME_WIDTH / 2.0 - 320.0;
    let mut y = GAME_HEIGHT / 2.0 - 140.0;
    let mut line = |r: &mut dyn RenderService, text: &str, color: Color, advance: f32| {
        r.draw_text(text, Vec2::new(left, y), HUD_TEXT_SIZE, color);
        y += advance;
    };

    line(r, "Welcome to Hovercat", Color::YELLOW, 40.0);
    line(r, "Controls:", Color::YELLOW, 30.0);
    if platform.is_mobile() {
        line(r, "- Tap to flap", Color::WHITE, 30.0);
        line(r, "- Tap the title bar to pause", Color::WHITE, 70.0);
        line(r, "Tap to play", Color::YELLOW, 0.0);
    } else {
        line(r, "- Press [Space], [W] or [Up Arrow] to flap", Color::WHITE, 30.0);
        line(r, "- Press [P] to pause", Color::WHITE, 30.0);
        line(r, "- Press [Esc] to exit", Color::WHITE, 30.0);
        line(r, "- Press [M] to toggle music", Color::WHITE, 40.0);
        line(r, "Press Enter to play", Color::YELLOW, 30.0);
        line(r, "Alt+Enter: toggle fullscreen", Color::YELLOW, 0.0);
    }
}

fn dialog_panel(r: &mut dyn RenderService, height: f32) {
    r.draw_rounded_rect(
        Rect::new(
            GAME_WIDTH / 2.0 - 250.0,
            GAME_HEIGHT / 2.0 - 20.0,
            500.0,
            height,
        ),
        0.76,
        Color::BLACK,
    );
}

fn draw_centered(r: &mut dyn RenderService, text: &str, y: f32, size: f32, color: Color) {
    let w = r.measure_text(text, size);
    r.draw_text(text, Vec2::new((GAME_WIDTH - w) / 2.0, y), size, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{GameAssets, SoundHandle, MusicHandle, Texture, TextureHandle};
    use crate::sim::GameState;

    /// Records draw calls so composition can be asserted without a GPU.
    #[derive(Default)]
    struct Recorder {
        textures: Vec<(u32, Rect, Rect)>,
        texts: Vec<String>,
        rounded_rects: usize,
    }

    impl RenderService for Recorder {
        fn draw_texture(&mut self, texture: &Texture, src: Rect, dst: Rect, _tint: Color) {
            self.textures.push((texture.handle.0, src, dst));
        }
        fn draw_rect(&mut self, _rect: Rect, _color: Color) {}
        fn draw_rounded_rect(&mut self, _rect: Rect, _roundness: f32, _color: Color) {
            self.rounded_rects += 1;
        }
        fn draw_text(&mut self, text: &str, _pos: Vec2, _size: f32, _color: Color) {
            self.texts.push(text.to_string());
        }
        fn measure_text(&self, text: &str, size: f32) -> f32 {
            text.len() as f32 * size * 0.5
        }
    }

    fn test_assets() -> GameAssets {
        let tex = |id, w, h| Texture {
            handle: TextureHandle(id),
            size: Vec2::new(w, h),
        };
        GameAssets {
            background: tex(0, GAME_WIDTH * 2.0, GAME_HEIGHT),
            player_eyes_open: tex(1, 128.0, 128.0),
            player_eyes_closed: tex(2, 128.0, 128.0),
            pipe: tex(3, 128.0, 512.0),
            fly_sound: SoundHandle(0),
            hit_sound: SoundHandle(1),
            score_sound: SoundHandle(2),
            music: MusicHandle(0),
        }
    }

    #[test]
    fn background_wrap_uses_two_blits() {
        let assets = test_assets();
        let mut state = GameState::new(1);
        state.background_width = assets.background.size.x;

        let mut r = Recorder::default();
        state.scroll_x = 0.0;
        draw_background(&state, &assets.background, &mut r);
        assert_eq!(r.textures.len(), 1);

        let mut r = Recorder::default();
        state.scroll_x = assets.background.size.x - 100.0;
        draw_background(&state, &assets.background, &mut r);
        assert_eq!(r.textures.len(), 2);
        // The two destination strips tile the full screen width.
        let total: f32 = r.textures.iter().map(|(_, _, dst)| dst.w).sum();
        assert!((total - GAME_WIDTH).abs() < 1e-3);
    }

    #[test]
    fn game_over_shows_closed_eyes_and_restart_hint() {
        let assets = test_assets();
        let mut state = GameState::new(1);
        state.begin();
        state.crash();

        let mut r = Recorder::default();
        draw(&state, &assets, Platform::Desktop, &mut r);
        assert!(r.textures.iter().any(|(id, _, _)| *id == 2));
        assert!(r.texts.iter().any(|t| t.contains("play again")));
        assert_eq!(r.rounded_rects, 1);
    }

    #[test]
    fn running_mode_has_no_overlay() {
        let assets = test_assets();
        let mut state = GameState::new(1);
        state.begin();

        let mut r = Recorder::default();
        draw(&state, &assets, Platform::Desktop, &mut r);
        assert_eq!(r.rounded_rects, 0);
        assert!(r.texts.iter().any(|t| t.starts_with("Score:")));
    }

    #[test]
    fn pipe_columns_leave_the_opening_clear() {
        let assets = test_assets();
        let pipe = Pipe {
            x: 400.0,
            gap_center: GAME_HEIGHT / 2.0,
            scored: false,
        };
        let mut r = Recorder::default();
        draw_pipe(&pipe, &assets.pipe, &mut r);

        let gap_top = pipe.gap_center - PIPE_GAP / 2.0;
        let gap_bottom = pipe.gap_center + PIPE_GAP / 2.0;
        for (_, _, dst) in &r.textures {
            let clear_of_gap = dst.y + dst.h <= gap_top + 1e-3 || dst.y >= gap_bottom - 1e-3;
            assert!(clear_of_gap, "blit {dst:?} intrudes into the opening");
        }
    }

    #[test]
    fn short_top_column_crops_the_cap_above_the_screen() {
        let assets = test_assets();
        // Top column shorter than the cap itself.
        let top_height = PIPE_CAP_HEIGHT / 2.0;
        let pipe = Pipe {
            x: 400.0,
            gap_center: PIPE_GAP / 2.0 + top_height,
            scored: false,
        };
        let mut r = Recorder::default();
        draw_pipe(&pipe, &assets.pipe, &mut r);

        let gap_top = pipe.gap_center - PIPE_GAP / 2.0;
        let cap = r
            .textures
            .iter()
            .find(|(_, _, dst)| dst.y < gap_top)
            .map(|(_, _, dst)| *dst)
            .unwrap();
        // Bottom edge flush with the column height, overflow off-screen.
        assert!((cap.y + cap.h - top_height).abs() < 1e-3);
        assert!(cap.y < 0.0);
    }
}
