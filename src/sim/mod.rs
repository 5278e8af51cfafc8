//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Mutated only through `tick`, once per host frame
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod difficulty;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use difficulty::Pacing;
pub use physics::Aabb;
pub use spawn::maybe_spawn;
pub use state::{GameEvent, GameState, Mode, Pipe, Player, ResumePoint};
pub use tick::{TickInput, tick};
