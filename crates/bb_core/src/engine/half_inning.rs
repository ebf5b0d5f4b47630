//! Half-inning simulation on top of the pure advancement transition.

use rand::Rng;

use crate::engine::base_state::{advance, BaseState, SubRolls};
use crate::engine::GameEngine;
use crate::error::Result;
use crate::models::{HalfInningResult, Outcome, PlayEvent, Team};

impl GameEngine {
    /// Simulate one half-inning for `team`, starting from the lineup index
    /// `leadoff`. `walk_off_deficit` is `Some(runs the batting team trails
    /// by)` when the half-inning can end the game; the inning then
    /// terminates the moment the deficit is exceeded.
    ///
    /// Returns the runs scored and the index leading off the team's next
    /// half-inning. Without a walk-off, the loop only exits at three outs.
    pub fn play_half_inning(
        &mut self,
        team: &mut Team,
        leadoff: usize,
        walk_off_deficit: Option<u32>,
    ) -> Result<HalfInningResult> {
        let lineup_len = team.lineup().len();
        let mut state = BaseState::empty();
        let mut runs = 0u32;
        let mut batter = leadoff % lineup_len;

        while state.outs < 3 {
            let outcome = team.batter_mut(batter).plate_appearance(&mut self.rng)?;
            let rolls = self.draw_sub_rolls(outcome, &state);
            // Runs on this play that would win the game outright.
            let watch = walk_off_deficit.map(|deficit| deficit + 1 - runs);

            let before = state;
            let transition = advance(state, outcome, rolls, watch);
            state = transition.state;
            runs += transition.runs;

            if let Some(observer) = self.observer.as_mut() {
                observer.plate_appearance(&PlayEvent {
                    batter,
                    outcome,
                    bases_before: before,
                    bases_after: transition.state,
                    runs_scored: transition.runs,
                    walk_off: transition.walk_off,
                });
            }

            batter = (batter + 1) % lineup_len;
            if transition.walk_off {
                if let Some(observer) = self.observer.as_mut() {
                    observer.half_inning_end(runs, state.outs);
                }
                return Ok(HalfInningResult { runs, next_leadoff: batter });
            }
        }

        if let Some(observer) = self.observer.as_mut() {
            observer.half_inning_end(runs, state.outs);
        }
        Ok(HalfInningResult { runs, next_leadoff: batter })
    }

    /// Resolve the conditional sub-rolls for one plate appearance. An out in
    /// play rolls only while the out cannot end the inning by itself; a
    /// single always rolls for infield/outfield depth.
    fn draw_sub_rolls(&mut self, outcome: Outcome, state: &BaseState) -> SubRolls {
        let mut rolls = SubRolls::default();
        match outcome {
            Outcome::OutInPlay if state.outs < 2 => {
                rolls.out_in_play =
                    self.ratios.classify_out_in_play(self.rng.gen::<f64>(), state.first);
            }
            Outcome::Single => {
                rolls.single = self.ratios.classify_single(self.rng.gen::<f64>());
            }
            _ => {}
        }
        rolls
    }
}
