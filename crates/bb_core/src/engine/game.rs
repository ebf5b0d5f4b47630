//! Full-game simulation: regulation innings, the ninth-inning gate, extra
//! innings and walk-off eligibility.

use crate::engine::GameEngine;
use crate::error::{Result, SimError};
use crate::models::{GameResult, Team, REGULATION_INNINGS};

/// Whether the home team bats in the bottom of the 9th or later. The away
/// team leading by nothing at all (a tie) still sends the home team to bat;
/// only an outright home lead after the top half skips it. The comparison is
/// deliberately `>=` on the away side.
pub fn needs_bottom_half(away_runs: u32, home_runs: u32) -> bool {
    away_runs >= home_runs
}

impl GameEngine {
    /// Play one game. The away team bats first. Batting orders start at the
    /// top of each lineup and carry across innings for the whole game.
    /// Cumulative team runs and win/loss records are updated on completion.
    pub fn play_game(&mut self, away: &mut Team, home: &mut Team) -> Result<GameResult> {
        let mut away_runs = 0u32;
        let mut home_runs = 0u32;
        let mut away_leadoff = 0usize;
        let mut home_leadoff = 0usize;

        // Eight innings are always played in full.
        for _ in 1..REGULATION_INNINGS {
            let top = self.play_half_inning(away, away_leadoff, None)?;
            away_runs += top.runs;
            away_leadoff = top.next_leadoff;

            let bottom = self.play_half_inning(home, home_leadoff, None)?;
            home_runs += bottom.runs;
            home_leadoff = bottom.next_leadoff;
        }

        // From the ninth on the game can end between half-innings, and the
        // home team bats with a walk-off watch.
        let mut inning = REGULATION_INNINGS;
        loop {
            if inning > self.max_innings {
                return Err(SimError::InningLimitReached { max_innings: self.max_innings });
            }

            let top = self.play_half_inning(away, away_leadoff, None)?;
            away_runs += top.runs;
            away_leadoff = top.next_leadoff;

            if needs_bottom_half(away_runs, home_runs) {
                let deficit = away_runs - home_runs;
                let bottom = self.play_half_inning(home, home_leadoff, Some(deficit))?;
                home_runs += bottom.runs;
                home_leadoff = bottom.next_leadoff;
            }

            if away_runs != home_runs {
                break;
            }
            inning += 1;
        }

        let result = GameResult { away_runs, home_runs, innings: inning };

        away.runs += away_runs;
        home.runs += home_runs;
        if away_runs > home_runs {
            away.wins += 1;
            home.losses += 1;
        } else {
            home.wins += 1;
            away.losses += 1;
        }

        if let Some(observer) = self.observer.as_mut() {
            observer.game_end(&result);
        }
        Ok(result)
    }
}
