//! The simulation engine: half-inning state machine, game loop, season loop.
//!
//! One `GameEngine` owns the seeded RNG for everything it simulates; the
//! same seed with the same inputs reproduces the same season exactly.

pub mod base_state;
pub mod config;
pub mod season;

mod game;
mod half_inning;


pub use base_state::{advance, BaseState, OutInPlayKind, SingleDepth, SubRolls, Transition};
pub use config::{
    AdvancementRatios, DEFAULT_DOUBLE_PLAY_RATIO, DEFAULT_INFIELD_HIT_RATIO,
    DEFAULT_PRODUCTIVE_OUT_RATIO,
};
pub use game::needs_bottom_half;
pub use season::{home_side, HomeSide, SeasonConfig, SeasonRunner, DEFAULT_SEASON_GAMES, DEFAULT_SERIES_LENGTH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::models::SimObserver;

/// Ceiling on innings per game. A tied game that reaches it aborts with a
/// typed error instead of looping forever.
pub const DEFAULT_MAX_INNINGS: u32 = 1000;

/// Plays half-innings and games for the two teams handed to it.
pub struct GameEngine {
    rng: ChaCha8Rng,
    ratios: AdvancementRatios,
    max_innings: u32,
    observer: Option<Box<dyn SimObserver>>,
}

impl GameEngine {
    pub fn new(seed: u64, ratios: AdvancementRatios) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            ratios,
            max_innings: DEFAULT_MAX_INNINGS,
            observer: None,
        }
    }

    pub fn with_max_innings(mut self, max_innings: u32) -> Self {
        self.max_innings = max_innings;
        self
    }

    /// Attach a play-by-play observer. The engine simulates identically with
    /// or without one.
    pub fn with_observer(mut self, observer: Box<dyn SimObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn ratios(&self) -> &AdvancementRatios {
        &self.ratios
    }
}
