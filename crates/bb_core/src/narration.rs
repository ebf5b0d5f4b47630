//! Textual play-by-play rendering.
//!
//! Strictly diagnostic: the narrator consumes structured [`PlayEvent`]s
//! through the observer interface and writes through the `log` facade, so
//! the simulation core never formats text and runs identically with
//! narration on or off.

use crate::models::{GameResult, PlayEvent, SimObserver};

/// Observer that narrates every plate appearance at `debug` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNarrator;

impl SimObserver for LogNarrator {
    fn plate_appearance(&mut self, event: &PlayEvent) {
        let scoring = match event.runs_scored {
            0 => String::new(),
            1 => " 1 run scores.".to_string(),
            runs => format!(" {runs} runs score."),
        };
        let ending = if event.walk_off { " Walk-off!" } else { "" };
        log::debug!(
            "{}, {} out. batter #{}: {}.{}{}",
            event.bases_before.describe(),
            event.bases_before.outs,
            event.batter + 1,
            event.outcome.label(),
            scoring,
            ending
        );
    }

    fn half_inning_end(&mut self, runs: u32, _outs: u8) {
        log::trace!("end of the half-inning, {runs} run(s) scored");
    }

    fn game_end(&mut self, result: &GameResult) {
        if result.is_extra_innings() {
            log::debug!(
                "final: away {} - home {} in {} innings",
                result.away_runs,
                result.home_runs,
                result.innings
            );
        } else {
            log::debug!("final: away {} - home {}", result.away_runs, result.home_runs);
        }
    }
}
