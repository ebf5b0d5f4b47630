//! JSON entry point for external scenario setup and reporting.

use serde::{Deserialize, Serialize};

use crate::engine::{AdvancementRatios, SeasonConfig, SeasonRunner, DEFAULT_MAX_INNINGS, DEFAULT_SEASON_GAMES, DEFAULT_SERIES_LENGTH};
use crate::error::{Result, SimError};
use crate::models::{OutcomeFrequencies, SeasonSummary, Team, TeamReport, LINEUP_SIZE};
use crate::narration::LogNarrator;
use crate::SCHEMA_VERSION;

fn default_games() -> u32 {
    DEFAULT_SEASON_GAMES
}

fn default_series_length() -> u32 {
    DEFAULT_SERIES_LENGTH
}

fn default_lineup_size() -> usize {
    LINEUP_SIZE
}

fn default_max_innings() -> u32 {
    DEFAULT_MAX_INNINGS
}

#[derive(Debug, Deserialize)]
pub struct SeasonRequest {
    pub schema_version: u8,
    pub seed: u64,
    #[serde(default = "default_games")]
    pub games: u32,
    #[serde(default = "default_series_length")]
    pub series_length: u32,
    pub team_a: TeamData,
    pub team_b: TeamData,
    /// Sub-event probability overrides; league averages when absent.
    #[serde(default)]
    pub ratios: Option<AdvancementRatios>,
    #[serde(default = "default_max_innings")]
    pub max_innings: u32,
    /// Emit play-by-play narration through the `log` facade.
    #[serde(default)]
    pub narrate: bool,
}

#[derive(Debug, Deserialize)]
pub struct TeamData {
    pub name: String,
    /// Career outcome counts of the modeled hitter.
    pub batting_line: OutcomeFrequencies,
    #[serde(default = "default_lineup_size")]
    pub lineup_size: usize,
}

#[derive(Debug, Serialize)]
pub struct SeasonResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub games_played: u32,
    pub extra_inning_games: u32,
    pub team_a: TeamReport,
    pub team_b: TeamReport,
}

impl SeasonResponse {
    fn new(seed: u64, summary: SeasonSummary) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            seed,
            games_played: summary.games_played,
            extra_inning_games: summary.extra_inning_games,
            team_a: summary.team_a,
            team_b: summary.team_b,
        }
    }
}

/// Simulate a season described by a [`SeasonRequest`].
pub fn simulate_season(request: &SeasonRequest) -> Result<SeasonResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(SimError::SchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let config = SeasonConfig {
        games: request.games,
        series_length: request.series_length,
        seed: request.seed,
        ratios: request.ratios.unwrap_or_default(),
        max_innings: request.max_innings,
    };

    let mut team_a = Team::from_batting_line(
        request.team_a.name.clone(),
        request.team_a.batting_line,
        request.team_a.lineup_size,
    )?;
    let mut team_b = Team::from_batting_line(
        request.team_b.name.clone(),
        request.team_b.batting_line,
        request.team_b.lineup_size,
    )?;

    let mut runner = SeasonRunner::new(config)?;
    if request.narrate {
        runner = runner.with_observer(Box::new(LogNarrator));
    }
    let summary = runner.run(&mut team_a, &mut team_b)?;
    Ok(SeasonResponse::new(request.seed, summary))
}

/// String-in, string-out wrapper around [`simulate_season`].
pub fn simulate_season_json(request_json: &str) -> Result<String> {
    let request: SeasonRequest = serde_json::from_str(request_json)?;
    let response = simulate_season(&request)?;
    Ok(serde_json::to_string(&response)?)
}
