//! Results of half-innings and games.

use serde::{Deserialize, Serialize};

/// Innings in a regulation game.
pub const REGULATION_INNINGS: u32 = 9;

/// Output of one simulated half-inning: the runs it produced and the lineup
/// index leading off the team's next half-inning, so the batting order
/// continues across inning boundaries instead of resetting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfInningResult {
    pub runs: u32,
    pub next_leadoff: usize,
}

/// Final score of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub away_runs: u32,
    pub home_runs: u32,
    /// Innings played; 9 for a regulation game.
    pub innings: u32,
}

impl GameResult {
    pub fn is_extra_innings(&self) -> bool {
        self.innings > REGULATION_INNINGS
    }

    pub fn home_won(&self) -> bool {
        self.home_runs > self.away_runs
    }
}
