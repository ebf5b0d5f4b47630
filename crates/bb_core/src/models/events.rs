//! Structured simulation events for observers.
//!
//! The state machines stay side-effect-free: anything that wants a
//! play-by-play view (narration, debugging, analysis) implements
//! [`SimObserver`] and receives structured events. The default
//! implementations do nothing.

use crate::engine::BaseState;
use crate::models::game_result::GameResult;
use crate::models::outcome::Outcome;

/// One plate appearance as seen from outside the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayEvent {
    /// Lineup index of the batter.
    pub batter: usize,
    pub outcome: Outcome,
    pub bases_before: BaseState,
    pub bases_after: BaseState,
    /// Runs scored on this play alone.
    pub runs_scored: u32,
    /// True if this play ended the game.
    pub walk_off: bool,
}

/// Callback surface for diagnostic consumers of the simulation.
pub trait SimObserver {
    fn plate_appearance(&mut self, _event: &PlayEvent) {}

    /// Called when a half-inning ends, walk-off or not.
    fn half_inning_end(&mut self, _runs: u32, _outs: u8) {}

    fn game_end(&mut self, _result: &GameResult) {}
}

/// Observer that ignores everything; the engine default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SimObserver for NullObserver {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingObserver {
        plays: usize,
        half_innings: usize,
        runs_seen: u32,
    }

    impl SimObserver for CountingObserver {
        fn plate_appearance(&mut self, event: &PlayEvent) {
            self.plays += 1;
            self.runs_seen += event.runs_scored;
        }

        fn half_inning_end(&mut self, _runs: u32, _outs: u8) {
            self.half_innings += 1;
        }
    }

    #[test]
    fn default_hooks_are_no_ops() {
        let mut observer = NullObserver;
        let event = PlayEvent {
            batter: 0,
            outcome: Outcome::Strikeout,
            bases_before: BaseState::empty(),
            bases_after: BaseState { outs: 1, ..BaseState::empty() },
            runs_scored: 0,
            walk_off: false,
        };
        observer.plate_appearance(&event);
        observer.half_inning_end(0, 3);
    }

    #[test]
    fn custom_observers_see_each_event() {
        let mut observer = CountingObserver::default();
        let event = PlayEvent {
            batter: 4,
            outcome: Outcome::HomeRun,
            bases_before: BaseState { first: true, ..BaseState::empty() },
            bases_after: BaseState::empty(),
            runs_scored: 2,
            walk_off: false,
        };
        observer.plate_appearance(&event);
        observer.half_inning_end(2, 3);
        assert_eq!(observer.plays, 1);
        assert_eq!(observer.half_innings, 1);
        assert_eq!(observer.runs_seen, 2);
    }
}
