//! Best-score tracking backed by a `ScoreStore`.

use crate::persistence::ScoreStore;

pub const HIGH_SCORE_KEY: &str = "hovercat_high_score";

/// The single best score across runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    pub fn load(store: &dyn ScoreStore) -> Self {
        let best = store.read_int(HIGH_SCORE_KEY).unwrap_or(0);
        log::info!("loaded high score: {best}");
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a finished run's score; persists only when it beats the
    /// current best. Returns true when a new record was set.
    pub fn submit(&mut self, score: u32, store: &mut dyn ScoreStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        store.write_int(HIGH_SCORE_KEY, score);
        log::info!("new high score: {score}");
        true
    }
}
