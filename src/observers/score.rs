//! Score display observer.
//!
//! Derives a score from each state update and keeps a running view of it.
//! The derivation is a flat multiplier; the subject's raw state is never
//! shown directly.

use crate::subject::Observer;
use log::info;

/// Points awarded per unit of state.
const POINTS_PER_UNIT: i32 = 10;

/// Displays the subject's state as a derived score.
#[derive(Debug, Default)]
pub struct ScoreHud {
    score: i32,
    updates: u64,
}

impl ScoreHud {
    /// New HUD with a zero score.
    pub fn new() -> Self {
        Self::default()
    }

    /// The score currently shown.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// How many updates this HUD has received.
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl Observer for ScoreHud {
    fn notify(&mut self, value: i32) {
        self.score = value.saturating_mul(POINTS_PER_UNIT);
        self.updates += 1;
        info!("[score] player score updated to {} points", self.score);
    }
}
