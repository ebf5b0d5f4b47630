//! Domain data types: outcomes, batters, teams, results, observer events.

pub mod batter;
pub mod events;
pub mod game_result;
pub mod outcome;
pub mod season_result;
pub mod team;

pub use batter::Batter;
pub use events::{NullObserver, PlayEvent, SimObserver};
pub use game_result::{GameResult, HalfInningResult, REGULATION_INNINGS};
pub use outcome::{Outcome, OutcomeFrequencies, OUTCOME_KINDS};
pub use season_result::{SeasonSummary, TeamReport};
pub use team::{Team, LINEUP_SIZE};
