//! Season-level report aggregates consumed by external reporting.

use serde::{Deserialize, Serialize};

use crate::models::outcome::Outcome;
use crate::models::team::Team;

/// Per-team season line: record, run total, raw counting stats and the
/// derived rates. Rates are `None` (JSON `null`) when their denominator is
/// empty; a valid small-sample state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub winning_percentage: Option<f64>,
    pub runs: u32,

    pub plate_appearances: u64,
    pub at_bats: u64,
    pub hits: u64,
    pub total_bases: u64,
    pub times_on_base: u64,

    pub strikeouts: u64,
    pub outs_in_play: u64,
    pub walks: u64,
    pub singles: u64,
    pub doubles: u64,
    pub triples: u64,
    pub home_runs: u64,

    pub batting_average: Option<f64>,
    pub on_base_percentage: Option<f64>,
    pub slugging: Option<f64>,
    pub ops: Option<f64>,
}

impl TeamReport {
    pub fn from_team(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            wins: team.wins,
            losses: team.losses,
            winning_percentage: team.winning_percentage(),
            runs: team.runs,
            plate_appearances: team.plate_appearances(),
            at_bats: team.at_bats(),
            hits: team.hits(),
            total_bases: team.total_bases(),
            times_on_base: team.times_on_base(),
            strikeouts: team.tally(Outcome::Strikeout),
            outs_in_play: team.tally(Outcome::OutInPlay),
            walks: team.tally(Outcome::Walk),
            singles: team.tally(Outcome::Single),
            doubles: team.tally(Outcome::Double),
            triples: team.tally(Outcome::Triple),
            home_runs: team.tally(Outcome::HomeRun),
            batting_average: team.batting_average(),
            on_base_percentage: team.on_base_percentage(),
            slugging: team.slugging(),
            ops: team.ops(),
        }
    }
}

/// Everything the season runner hands back to reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub games_played: u32,
    pub extra_inning_games: u32,
    pub team_a: TeamReport,
    pub team_b: TeamReport,
}
