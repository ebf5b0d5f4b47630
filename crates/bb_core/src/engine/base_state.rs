//! Baserunner state and the pure advancement transition.
//!
//! `advance` applies one plate-appearance outcome to a base/out state and
//! reports the runs scored. It takes the two conditional sub-roll results
//! (double play / productive out, infield / outfield single) as parameters
//! and draws no randomness itself, so every branch is deterministic under
//! test. The engine classifies the sub-rolls from its seeded RNG before
//! calling in.

use serde::{Deserialize, Serialize};

use crate::models::Outcome;

/// Occupancy of the three bases plus the out count of the half-inning.
/// Reset at the start of every half-inning; `outs` is 0..=2 between plays
/// and 3 once the inning is over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseState {
    pub first: bool,
    pub second: bool,
    pub third: bool,
    pub outs: u8,
}

impl BaseState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn runners(&self) -> u8 {
        u8::from(self.first) + u8::from(self.second) + u8::from(self.third)
    }

    /// Situation text used by play-by-play narration.
    pub fn describe(&self) -> &'static str {
        match (self.first, self.second, self.third) {
            (false, false, false) => "bases empty",
            (true, false, false) => "runner at first",
            (false, true, false) => "runner at second",
            (false, false, true) => "runner at third",
            (true, true, false) => "runners at first and second",
            (true, false, true) => "runners at first and third",
            (false, true, true) => "runners at second and third",
            (true, true, true) => "bases loaded",
        }
    }
}

/// Resolution of the sub-roll conditioned on an out in play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutInPlayKind {
    /// Lead runner retired at second as well as the batter.
    DoublePlay,
    /// Every runner moves up one base.
    Productive,
    #[default]
    Routine,
}

/// Resolution of the sub-roll conditioned on a single.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SingleDepth {
    /// Infield single: no extra advancement.
    Infield,
    /// Outfield single: the runner who started on second scores.
    #[default]
    Outfield,
}

/// Pre-resolved sub-rolls for one plate appearance. Only the field matching
/// the outcome kind is consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubRolls {
    pub out_in_play: OutInPlayKind,
    pub single: SingleDepth,
}

/// Result of applying one outcome to a base state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: BaseState,
    /// Runs scored on this play.
    pub runs: u32,
    /// True if the play ended the game mid-inning.
    pub walk_off: bool,
}

/// Apply `outcome` to `state`.
///
/// `watch` carries the number of runs on this play that wins the game for
/// the batting team, when a walk-off is possible (home team, 9th inning or
/// later, deficit already folded in by the caller). The transition stops at
/// the instant the winning run crosses the plate: for a single that check
/// fires after the runner from third scores, before the infield/outfield
/// depth is applied, and again after the outfield extra run; for every
/// other outcome it fires once the outcome's advancement is complete.
pub fn advance(state: BaseState, outcome: Outcome, rolls: SubRolls, watch: Option<u32>) -> Transition {
    let mut state = state;
    let mut runs = 0u32;
    let ends_game = |runs: u32| matches!(watch, Some(needed) if runs >= needed);

    match outcome {
        Outcome::Strikeout => {
            state.outs += 1;
        }
        Outcome::OutInPlay => {
            // The sub-roll only matters while this out cannot end the inning
            // by itself; a third out ends play regardless of runner movement.
            if state.outs < 2 {
                match rolls.out_in_play {
                    OutInPlayKind::DoublePlay if state.first => {
                        state.outs += 1;
                        if state.outs < 2 {
                            if state.third {
                                runs += 1;
                            }
                            state.third = state.second;
                            state.second = false;
                            state.first = false;
                        }
                    }
                    OutInPlayKind::Productive => {
                        if state.third {
                            runs += 1;
                        }
                        state.third = state.second;
                        state.second = state.first;
                        state.first = false;
                    }
                    _ => {}
                }
            }
            state.outs += 1;
            if ends_game(runs) {
                return Transition { state, runs, walk_off: true };
            }
        }
        Outcome::Walk => {
            // Only forced runners move.
            if state.first {
                if state.second {
                    if state.third {
                        runs += 1;
                    } else {
                        state.third = true;
                    }
                } else {
                    state.second = true;
                }
            } else {
                state.first = true;
            }
            if ends_game(runs) {
                return Transition { state, runs, walk_off: true };
            }
        }
        Outcome::Single => {
            if state.third {
                state.third = false;
                runs += 1;
                if ends_game(runs) {
                    return Transition { state, runs, walk_off: true };
                }
            }
            state.third = state.second;
            state.second = state.first;
            state.first = true;
            if matches!(rolls.single, SingleDepth::Outfield) && state.third {
                // The runner who started on second comes all the way home.
                state.third = false;
                runs += 1;
                if ends_game(runs) {
                    return Transition { state, runs, walk_off: true };
                }
            }
        }
        Outcome::Double => {
            if state.third {
                state.third = false;
                runs += 1;
            }
            if state.second {
                state.second = false;
                runs += 1;
            }
            state.third = state.first;
            state.second = true;
            state.first = false;
            if ends_game(runs) {
                return Transition { state, runs, walk_off: true };
            }
        }
        Outcome::Triple => {
            runs += u32::from(state.runners());
            state.first = false;
            state.second = false;
            state.third = true;
            if ends_game(runs) {
                return Transition { state, runs, walk_off: true };
            }
        }
        Outcome::HomeRun => {
            runs += u32::from(state.runners()) + 1;
            state.first = false;
            state.second = false;
            state.third = false;
            if ends_game(runs) {
                return Transition { state, runs, walk_off: true };
            }
        }
    }

    Transition { state, runs, walk_off: false }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bases(first: bool, second: bool, third: bool, outs: u8) -> BaseState {
        BaseState { first, second, third, outs }
    }

    fn no_rolls() -> SubRolls {
        SubRolls::default()
    }

    #[test]
    fn strikeout_only_adds_an_out() {
        let before = bases(true, false, true, 1);
        let after = advance(before, Outcome::Strikeout, no_rolls(), None);
        assert_eq!(after.state, bases(true, false, true, 2));
        assert_eq!(after.runs, 0);
        assert!(!after.walk_off);
    }

    #[test]
    fn double_play_with_no_outs_records_two() {
        let rolls = SubRolls { out_in_play: OutInPlayKind::DoublePlay, ..Default::default() };
        let after = advance(bases(true, true, false, 0), Outcome::OutInPlay, rolls, None);
        assert_eq!(after.state.outs, 2);
        assert!(!after.state.first, "lead runner is retired");
        assert!(!after.state.second);
        assert!(after.state.third, "runner from second takes third");
        assert_eq!(after.runs, 0);
    }

    #[test]
    fn double_play_scores_the_runner_from_third_when_outs_remain() {
        let rolls = SubRolls { out_in_play: OutInPlayKind::DoublePlay, ..Default::default() };
        let after = advance(bases(true, false, true, 0), Outcome::OutInPlay, rolls, None);
        assert_eq!(after.state.outs, 2);
        assert_eq!(after.runs, 1);
        assert_eq!(after.state.runners(), 0);
    }

    #[test]
    fn double_play_with_one_out_ends_the_inning_scoreless() {
        let rolls = SubRolls { out_in_play: OutInPlayKind::DoublePlay, ..Default::default() };
        let after = advance(bases(true, false, true, 1), Outcome::OutInPlay, rolls, None);
        assert_eq!(after.state.outs, 3);
        assert_eq!(after.runs, 0, "no run scores once the double play ends the inning");
    }

    #[test]
    fn productive_out_moves_every_runner_up() {
        let rolls = SubRolls { out_in_play: OutInPlayKind::Productive, ..Default::default() };
        let after = advance(bases(true, true, true, 0), Outcome::OutInPlay, rolls, None);
        assert_eq!(after.runs, 1);
        assert_eq!(after.state, bases(false, true, true, 1));
    }

    #[test]
    fn routine_out_with_two_outs_skips_the_sub_rules() {
        let rolls = SubRolls { out_in_play: OutInPlayKind::DoublePlay, ..Default::default() };
        let after = advance(bases(true, false, true, 2), Outcome::OutInPlay, rolls, None);
        assert_eq!(after.state.outs, 3);
        assert_eq!(after.runs, 0);
        assert!(after.state.first && after.state.third, "runners are stranded in place");
    }

    #[test]
    fn walk_forces_only_forced_runners() {
        // Runner on second only: batter takes first, runner holds.
        let after = advance(bases(false, true, false, 0), Outcome::Walk, no_rolls(), None);
        assert_eq!(after.state, bases(true, true, false, 0));
        assert_eq!(after.runs, 0);

        // First and second: both forced up, loading the bases.
        let after = advance(bases(true, true, false, 0), Outcome::Walk, no_rolls(), None);
        assert_eq!(after.state, bases(true, true, true, 0));
        assert_eq!(after.runs, 0);
    }

    #[test]
    fn bases_loaded_walk_scores_one() {
        let after = advance(bases(true, true, true, 2), Outcome::Walk, no_rolls(), None);
        assert_eq!(after.runs, 1);
        assert_eq!(after.state, bases(true, true, true, 2));
    }

    #[test]
    fn infield_single_holds_the_runner_at_third() {
        let rolls = SubRolls { single: SingleDepth::Infield, ..Default::default() };
        let after = advance(bases(false, true, false, 0), Outcome::Single, rolls, None);
        assert_eq!(after.runs, 0);
        assert_eq!(after.state, bases(true, false, true, 0));
    }

    #[test]
    fn outfield_single_scores_the_runner_from_second() {
        let rolls = SubRolls { single: SingleDepth::Outfield, ..Default::default() };
        let after = advance(bases(false, true, false, 0), Outcome::Single, rolls, None);
        assert_eq!(after.runs, 1);
        assert_eq!(after.state, bases(true, false, false, 0));
    }

    #[test]
    fn single_always_scores_the_runner_from_third() {
        let rolls = SubRolls { single: SingleDepth::Infield, ..Default::default() };
        let after = advance(bases(true, false, true, 1), Outcome::Single, rolls, None);
        assert_eq!(after.runs, 1);
        assert_eq!(after.state, bases(true, true, false, 1));
    }

    #[test]
    fn double_scores_second_and_third_and_sends_first_to_third() {
        let after = advance(bases(true, true, true, 0), Outcome::Double, no_rolls(), None);
        assert_eq!(after.runs, 2);
        assert_eq!(after.state, bases(false, true, true, 0));
    }

    #[test]
    fn triple_clears_the_bases_for_the_batter() {
        let after = advance(bases(true, true, true, 1), Outcome::Triple, no_rolls(), None);
        assert_eq!(after.runs, 3);
        assert_eq!(after.state, bases(false, false, true, 1));
    }

    #[test]
    fn home_run_scores_everyone_plus_the_batter() {
        let after = advance(bases(true, true, true, 2), Outcome::HomeRun, no_rolls(), None);
        assert_eq!(after.runs, 4);
        assert_eq!(after.state, bases(false, false, false, 2));
        assert!(!after.walk_off, "no watch, no walk-off");
    }

    #[test]
    fn walk_off_fires_the_instant_the_winning_run_scores() {
        // Tie game: one run wins it. A sacrifice fly ends it mid-inning.
        let rolls = SubRolls { out_in_play: OutInPlayKind::Productive, ..Default::default() };
        let after = advance(bases(false, false, true, 0), Outcome::OutInPlay, rolls, Some(1));
        assert_eq!(after.runs, 1);
        assert!(after.walk_off);
        assert_eq!(after.state.outs, 1, "the out still counts on a walk-off sacrifice");
    }

    #[test]
    fn walk_off_single_stops_before_the_depth_roll_applies() {
        // Runners on second and third, one run needed: the runner from third
        // ends the game before the outfield single can score a second run.
        let rolls = SubRolls { single: SingleDepth::Outfield, ..Default::default() };
        let after = advance(bases(false, true, true, 0), Outcome::Single, rolls, Some(1));
        assert!(after.walk_off);
        assert_eq!(after.runs, 1, "only the winning run scores");
    }

    #[test]
    fn walk_off_single_second_checkpoint_counts_the_extra_run() {
        // Two runs needed: the third-base runner is not enough, the outfield
        // advancement scores the winner.
        let rolls = SubRolls { single: SingleDepth::Outfield, ..Default::default() };
        let after = advance(bases(false, true, true, 0), Outcome::Single, rolls, Some(2));
        assert!(after.walk_off);
        assert_eq!(after.runs, 2);
    }

    #[test]
    fn walk_off_double_banks_both_runs() {
        // A double's advancement settles as one play: both runs count even
        // though the first already won the game.
        let after = advance(bases(false, true, true, 0), Outcome::Double, no_rolls(), Some(1));
        assert!(after.walk_off);
        assert_eq!(after.runs, 2);
    }

    #[test]
    fn no_walk_off_while_short_of_the_deficit() {
        let after = advance(bases(false, false, true, 0), Outcome::Single, no_rolls(), Some(2));
        assert!(!after.walk_off);
        assert_eq!(after.runs, 1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_state() -> impl Strategy<Value = BaseState> {
            (any::<bool>(), any::<bool>(), any::<bool>(), 0u8..3).prop_map(
                |(first, second, third, outs)| BaseState { first, second, third, outs },
            )
        }

        fn any_outcome() -> impl Strategy<Value = Outcome> {
            prop::sample::select(Outcome::ALL.to_vec())
        }

        fn any_rolls() -> impl Strategy<Value = SubRolls> {
            (
                prop::sample::select(vec![
                    OutInPlayKind::DoublePlay,
                    OutInPlayKind::Productive,
                    OutInPlayKind::Routine,
                ]),
                prop::sample::select(vec![SingleDepth::Infield, SingleDepth::Outfield]),
            )
                .prop_map(|(out_in_play, single)| SubRolls { out_in_play, single })
        }

        proptest! {
            /// Outs never decrease and never pass three.
            #[test]
            fn prop_outs_monotonic_and_bounded(
                state in any_state(),
                outcome in any_outcome(),
                rolls in any_rolls(),
            ) {
                let after = advance(state, outcome, rolls, None);
                prop_assert!(after.state.outs >= state.outs);
                prop_assert!(after.state.outs <= 3);
            }

            /// A single play can score at most the runners aboard plus the batter.
            #[test]
            fn prop_runs_bounded_by_traffic(
                state in any_state(),
                outcome in any_outcome(),
                rolls in any_rolls(),
            ) {
                let after = advance(state, outcome, rolls, None);
                prop_assert!(after.runs <= u32::from(state.runners()) + 1);
            }

            /// Without a walk-off watch the game can never end mid-inning.
            #[test]
            fn prop_no_walk_off_without_watch(
                state in any_state(),
                outcome in any_outcome(),
                rolls in any_rolls(),
            ) {
                prop_assert!(!advance(state, outcome, rolls, None).walk_off);
            }
        }
    }
}
