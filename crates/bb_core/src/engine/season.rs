//! Season simulation: a fixed schedule of games between two teams with
//! home field rotating in series blocks.

use serde::{Deserialize, Serialize};

use crate::engine::config::AdvancementRatios;
use crate::engine::{GameEngine, DEFAULT_MAX_INNINGS};
use crate::error::{Result, SimError};
use crate::models::{SeasonSummary, SimObserver, Team, TeamReport};

/// Classic season length.
pub const DEFAULT_SEASON_GAMES: u32 = 162;
/// Home field alternates in series of this many games.
pub const DEFAULT_SERIES_LENGTH: u32 = 3;

/// Which of the two configured teams hosts a given game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeSide {
    TeamA,
    TeamB,
}

/// Host of `game_number` (1-based) under the alternating-series rotation:
/// team A hosts the first series, team B the second, and so on.
pub fn home_side(game_number: u32, series_length: u32) -> HomeSide {
    let series = (game_number - 1) / series_length;
    if series % 2 == 0 {
        HomeSide::TeamA
    } else {
        HomeSide::TeamB
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonConfig {
    pub games: u32,
    pub series_length: u32,
    pub seed: u64,
    pub ratios: AdvancementRatios,
    pub max_innings: u32,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_SEASON_GAMES,
            series_length: DEFAULT_SERIES_LENGTH,
            seed: 0,
            ratios: AdvancementRatios::default(),
            max_innings: DEFAULT_MAX_INNINGS,
        }
    }
}

impl SeasonConfig {
    pub fn validate(&self) -> Result<()> {
        if self.series_length == 0 {
            return Err(SimError::InvalidSchedule("series length must be positive".into()));
        }
        if self.max_innings == 0 {
            return Err(SimError::InvalidSchedule("max innings must be positive".into()));
        }
        self.ratios.validate()
    }
}

/// Runs a season of games and aggregates the results.
pub struct SeasonRunner {
    config: SeasonConfig,
    engine: GameEngine,
}

impl SeasonRunner {
    pub fn new(config: SeasonConfig) -> Result<Self> {
        config.validate()?;
        let engine = GameEngine::new(config.seed, config.ratios)
            .with_max_innings(config.max_innings);
        Ok(Self { config, engine })
    }

    /// Attach a play-by-play observer to the underlying engine.
    pub fn with_observer(mut self, observer: Box<dyn SimObserver>) -> Self {
        self.engine = self.engine.with_observer(observer);
        self
    }

    /// Play the configured number of games between the two teams, rotating
    /// home field every series. Team records, run totals and batter
    /// histories accumulate on the teams themselves; the returned summary is
    /// a snapshot taken at season's end.
    pub fn run(&mut self, team_a: &mut Team, team_b: &mut Team) -> Result<SeasonSummary> {
        let mut extra_inning_games = 0u32;

        for game_number in 1..=self.config.games {
            let result = match home_side(game_number, self.config.series_length) {
                HomeSide::TeamA => self.engine.play_game(team_b, team_a)?,
                HomeSide::TeamB => self.engine.play_game(team_a, team_b)?,
            };
            if result.is_extra_innings() {
                extra_inning_games += 1;
                log::debug!(
                    "game {game_number}: away {} - home {} in {} innings",
                    result.away_runs,
                    result.home_runs,
                    result.innings
                );
            } else {
                log::debug!(
                    "game {game_number}: away {} - home {}",
                    result.away_runs,
                    result.home_runs
                );
            }
        }

        log::debug!(
            "season complete: {} {} / {} {}",
            team_a.name,
            team_a.record(),
            team_b.name,
            team_b.record()
        );

        Ok(SeasonSummary {
            games_played: self.config.games,
            extra_inning_games,
            team_a: TeamReport::from_team(team_a),
            team_b: TeamReport::from_team(team_b),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Outcome, OutcomeFrequencies, LINEUP_SIZE};

    fn collins_line() -> OutcomeFrequencies {
        OutcomeFrequencies::new(12087, 467, 6729, 1576, 2643, 438, 187, 47).unwrap()
    }

    fn devers_line() -> OutcomeFrequencies {
        OutcomeFrequencies::new(3614, 747, 1626, 322, 519, 221, 7, 172).unwrap()
    }

    #[test]
    fn series_rotation_gives_team_a_the_first_block() {
        for game in [1, 2, 3, 7, 8, 9, 13, 14, 15] {
            assert_eq!(home_side(game, 3), HomeSide::TeamA, "game {game}");
        }
        for game in [4, 5, 6, 10, 11, 12, 16, 17, 18] {
            assert_eq!(home_side(game, 3), HomeSide::TeamB, "game {game}");
        }
    }

    #[test]
    fn full_season_home_map_alternates_every_three_games() {
        let expected_a: Vec<u32> = (1..=162)
            .filter(|game| ((game - 1) / 3) % 2 == 0)
            .collect();
        let actual_a: Vec<u32> = (1..=162)
            .filter(|&game| home_side(game, 3) == HomeSide::TeamA)
            .collect();
        assert_eq!(actual_a, expected_a);
        assert_eq!(actual_a.len(), 81, "home field splits evenly over 162 games");
        assert!(actual_a.starts_with(&[1, 2, 3, 7, 8, 9]));
    }

    #[test]
    fn zero_series_length_is_rejected() {
        let config = SeasonConfig { series_length: 0, ..SeasonConfig::default() };
        assert!(matches!(SeasonRunner::new(config), Err(SimError::InvalidSchedule(_))));
    }

    #[test]
    fn season_accounting_balances() {
        let config = SeasonConfig { games: 30, seed: 20230930, ..SeasonConfig::default() };
        let mut runner = SeasonRunner::new(config).unwrap();
        let mut team_a = Team::from_batting_line("High OBP", collins_line(), LINEUP_SIZE).unwrap();
        let mut team_b = Team::from_batting_line("High SLG", devers_line(), LINEUP_SIZE).unwrap();
        let summary = runner.run(&mut team_a, &mut team_b).unwrap();

        assert_eq!(summary.games_played, 30);
        assert_eq!(team_a.wins + team_a.losses, 30);
        assert_eq!(team_b.wins + team_b.losses, 30);
        assert_eq!(team_a.wins, team_b.losses);
        assert_eq!(team_b.wins, team_a.losses);

        for report in [&summary.team_a, &summary.team_b] {
            assert_eq!(report.at_bats, report.plate_appearances - report.walks);
            assert_eq!(
                report.hits,
                report.singles + report.doubles + report.triples + report.home_runs
            );
            assert_eq!(
                report.total_bases,
                report.singles + 2 * report.doubles + 3 * report.triples + 4 * report.home_runs
            );
            assert_eq!(report.times_on_base, report.hits + report.walks);
            assert!(report.batting_average.is_some());
            assert!(report.ops.is_some());
        }

        // The summary mirrors the mutated team state.
        assert_eq!(summary.team_a.runs, team_a.runs);
        assert_eq!(summary.team_a.plate_appearances, team_a.plate_appearances());
        assert_eq!(summary.team_a.strikeouts, team_a.tally(Outcome::Strikeout));
    }

    #[test]
    fn identical_seeds_reproduce_identical_seasons() {
        let run_once = || {
            let config = SeasonConfig { games: 12, seed: 77, ..SeasonConfig::default() };
            let mut runner = SeasonRunner::new(config).unwrap();
            let mut team_a =
                Team::from_batting_line("High OBP", collins_line(), LINEUP_SIZE).unwrap();
            let mut team_b =
                Team::from_batting_line("High SLG", devers_line(), LINEUP_SIZE).unwrap();
            runner.run(&mut team_a, &mut team_b).unwrap()
        };
        assert_eq!(run_once(), run_once());
    }
}
