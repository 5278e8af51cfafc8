//! Vertical motion integration and collision predicates
//!
//! Semi-implicit Euler: velocity first, then position. Intentionally not
//! higher-order; dt is small and roughly fixed.

use glam::Vec2;

use super::state::{Pipe, Player};
use crate::consts::*;

/// Axis-aligned collision box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            max: center + size / 2.0,
        }
    }
}

/// Accumulate gravity into velocity, then velocity into position.
pub fn integrate(player: &mut Player, gravity: f32, dt: f32) {
    player.vel_y += gravity * dt;
    player.pos.y += player.vel_y * dt;
}

/// A flap sets velocity to the fixed impulse, overriding the current fall
/// speed rather than adding to it.
pub fn apply_flap(player: &mut Player, jump_force: f32) {
    player.vel_y = jump_force;
}

/// The collision box is the sprite box scaled independently per axis, to
/// ignore transparent sprite margins.
pub fn collision_box(player: &Player) -> Aabb {
    let size = Vec2::new(
        player.size * PLAYER_COLLISION_WIDTH_RATIO,
        player.size * PLAYER_COLLISION_HEIGHT_RATIO,
    );
    Aabb::centered(player.pos, size)
}

/// True if the box pokes above the top of the screen or below the bottom.
pub fn hits_boundary(bbox: &Aabb, screen_height: f32) -> bool {
    bbox.min.y < 0.0 || bbox.max.y > screen_height
}

/// Horizontal gate first: the box must overlap `[x, x + width)`. Only then
/// does the vertical extent falling outside the opening count as a hit.
pub fn hits_pipe(bbox: &Aabb, pipe: &Pipe, pipe_width: f32, gap: f32) -> bool {
    let overlaps_x = bbox.max.x > pipe.x && bbox.min.x < pipe.x + pipe_width;
    if !overlaps_x {
        return false;
    }
    bbox.min.y < pipe.gap_center - gap / 2.0 || bbox.max.y > pipe.gap_center + gap / 2.0
}

/// Scoring uses the player's position only, strictly beyond the right edge.
pub fn passed_pipe(player_x: f32, pipe: &Pipe, pipe_width: f32) -> bool {
    player_x > pipe.x + pipe_width
}

/// A pipe whose right edge has left the screen is ready for disposal.
pub fn off_screen(pipe: &Pipe, pipe_width: f32) -> bool {
    pipe.x + pipe_width < 0.0
}
