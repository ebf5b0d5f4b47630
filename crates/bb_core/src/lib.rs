//! # bb_core - Deterministic Baseball Season Simulation Engine
//!
//! Monte Carlo comparison of two offensive profiles over a full season:
//! each team is a lineup built from one hitter's career outcome
//! frequencies, every plate appearance is drawn from those frequencies,
//! and baserunners advance through a play-by-play state machine with
//! productive outs, double plays, infield singles and walk-off endings.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same season)
//! - Exact categorical sampling over integer career counts
//! - Recognized baseball statistics reconstructed from the play log
//! - JSON API for external scenario setup and reporting

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod narration;
pub mod stats;

// Re-export the JSON API entry points
pub use api::{simulate_season, simulate_season_json, SeasonRequest, SeasonResponse, TeamData};
pub use error::{Result, SimError};

// Re-export the engine surface
pub use engine::{
    advance, home_side, needs_bottom_half, AdvancementRatios, BaseState, GameEngine, HomeSide,
    OutInPlayKind, SeasonConfig, SeasonRunner, SingleDepth, SubRolls, Transition,
};

// Re-export the domain model
pub use models::{
    Batter, GameResult, HalfInningResult, NullObserver, Outcome, OutcomeFrequencies, PlayEvent,
    SeasonSummary, SimObserver, Team, TeamReport, LINEUP_SIZE, REGULATION_INNINGS,
};
pub use narration::LogNarrator;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_version_matches_the_api_contract() {
        assert_eq!(SCHEMA_VERSION, 1);
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn public_surface_builds_a_minimal_simulation() {
        let line = OutcomeFrequencies::new(100, 20, 40, 10, 20, 5, 2, 3).unwrap();
        let mut away = Team::from_batting_line("Away", line, LINEUP_SIZE).unwrap();
        let mut home = Team::from_batting_line("Home", line, LINEUP_SIZE).unwrap();
        let mut engine = GameEngine::new(123, AdvancementRatios::default());
        let result = engine.play_game(&mut away, &mut home).unwrap();
        assert_ne!(result.away_runs, result.home_runs);
    }
}
