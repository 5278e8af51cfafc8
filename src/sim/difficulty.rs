//! Difficulty ramp
//!
//! Pipe speed rises linearly with running time. The spawn interval derives
//! from it so the spatial gap between pipes stays constant: difficulty comes
//! from approach rate, not spacing. The background scroll speed is coupled
//! at a fixed parallax fraction.

use crate::consts::BACKGROUND_SCROLL_FACTOR;

/// Speed-derived pacing parameters for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    pub pipe_speed: f32,
    pub spawn_interval: f32,
    pub scroll_speed: f32,
}

/// Advance the ramp by `dt`. `base_distance` is fixed at run start as
/// initial speed times initial interval.
pub fn tick(
    dt: f32,
    current_speed: f32,
    max_speed: f32,
    increase_rate: f32,
    base_distance: f32,
) -> Pacing {
    let pipe_speed = (current_speed + increase_rate * dt).min(max_speed);
    Pacing {
        pipe_speed,
        spawn_interval: base_distance / pipe_speed,
        scroll_speed: pipe_speed * BACKGROUND_SCROLL_FACTOR,
    }
}
