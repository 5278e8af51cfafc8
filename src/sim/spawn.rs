//! Procedural obstacle generation
//!
//! New pipes spawn at the right edge when the spawn timer elapses. The gap
//! center is drawn from a range clamped both to keep the opening fully
//! on-screen and to bound the vertical swing from the previous pipe.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Pipe;

/// Spawn a pipe if the accumulated idle time has reached the interval.
///
/// On fire the timer resets to exactly zero: overshoot past the interval is
/// discarded rather than carried forward, so cadence never drifts.
pub fn maybe_spawn(
    prev: Option<&Pipe>,
    rng: &mut Pcg32,
    spawn_timer: &mut f32,
    spawn_interval: f32,
    screen_width: f32,
    screen_height: f32,
    gap: f32,
    max_delta: f32,
) -> Option<Pipe> {
    if *spawn_timer < spawn_interval {
        return None;
    }
    *spawn_timer = 0.0;

    let gap_center = match prev {
        // First pipe goes to the exact vertical midpoint.
        None => screen_height / 2.0,
        Some(p) => {
            let lo = (gap / 2.0).max(p.gap_center - max_delta);
            let hi = (screen_height - gap / 2.0).min(p.gap_center + max_delta);
            if lo >= hi {
                // Degenerate range (e.g. gap >= screen height): collapse to
                // a single point instead of failing.
                (lo + hi) / 2.0
            } else {
                rng.random_range(lo..=hi)
            }
        }
    };

    Some(Pipe {
        x: screen_width,
        gap_center,
        scored: false,
    })
}
