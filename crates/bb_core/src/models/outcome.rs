//! Plate-appearance outcomes and career outcome frequencies.
//!
//! An `OutcomeFrequencies` record is the immutable input describing one
//! modeled hitter; `Outcome` is the result of one simulated plate appearance.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Number of distinct plate-appearance outcome kinds.
pub const OUTCOME_KINDS: usize = 7;

/// The result of a single plate appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Strikeout,
    OutInPlay,
    /// Walk or hit-by-pitch.
    Walk,
    Single,
    Double,
    Triple,
    HomeRun,
}

impl Outcome {
    /// All outcomes in sampling order: [K, OIP, BB/HBP, 1B, 2B, 3B, HR].
    /// This order matches the layout of the cumulative threshold table.
    pub const ALL: [Outcome; OUTCOME_KINDS] = [
        Outcome::Strikeout,
        Outcome::OutInPlay,
        Outcome::Walk,
        Outcome::Single,
        Outcome::Double,
        Outcome::Triple,
        Outcome::HomeRun,
    ];

    /// True if the batter reached base safely.
    pub fn reaches_base(self) -> bool {
        !matches!(self, Outcome::Strikeout | Outcome::OutInPlay)
    }

    /// True for singles, doubles, triples and home runs.
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            Outcome::Single | Outcome::Double | Outcome::Triple | Outcome::HomeRun
        )
    }

    /// Total bases credited to the batter: 1 to 4 for hits, 0 otherwise.
    pub fn bases_awarded(self) -> u32 {
        match self {
            Outcome::Single => 1,
            Outcome::Double => 2,
            Outcome::Triple => 3,
            Outcome::HomeRun => 4,
            _ => 0,
        }
    }

    /// Human-readable outcome text used by play-by-play narration.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Strikeout => "strikeout",
            Outcome::OutInPlay => "out in play",
            Outcome::Walk => "walk or hit-by-pitch",
            Outcome::Single => "single",
            Outcome::Double => "double",
            Outcome::Triple => "triple",
            Outcome::HomeRun => "home run",
        }
    }
}

/// Career plate-appearance counts for one modeled hitter.
///
/// The seven category counts must sum to `plate_appearances`; this is
/// validated before any simulation begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeFrequencies {
    pub plate_appearances: u32,
    pub strikeouts: u32,
    pub outs_in_play: u32,
    /// Walks plus hit-by-pitches.
    pub walks: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
}

impl OutcomeFrequencies {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        plate_appearances: u32,
        strikeouts: u32,
        outs_in_play: u32,
        walks: u32,
        singles: u32,
        doubles: u32,
        triples: u32,
        home_runs: u32,
    ) -> Result<Self> {
        let frequencies = Self {
            plate_appearances,
            strikeouts,
            outs_in_play,
            walks,
            singles,
            doubles,
            triples,
            home_runs,
        };
        frequencies.validate()?;
        Ok(frequencies)
    }

    /// Category counts in sampling order, matching [`Outcome::ALL`].
    pub fn counts(&self) -> [u32; OUTCOME_KINDS] {
        [
            self.strikeouts,
            self.outs_in_play,
            self.walks,
            self.singles,
            self.doubles,
            self.triples,
            self.home_runs,
        ]
    }

    pub fn validate(&self) -> Result<()> {
        if self.plate_appearances == 0 {
            return Err(SimError::NoPlateAppearances);
        }
        let sum: u32 = self.counts().iter().sum();
        if sum != self.plate_appearances {
            return Err(SimError::FrequencySumMismatch {
                sum,
                plate_appearances: self.plate_appearances,
            });
        }
        Ok(())
    }

    /// Cumulative threshold table for inverse-CDF sampling.
    /// The final threshold equals `plate_appearances`.
    pub(crate) fn thresholds(&self) -> [u32; OUTCOME_KINDS] {
        let mut thresholds = [0u32; OUTCOME_KINDS];
        let mut running = 0u32;
        for (slot, count) in thresholds.iter_mut().zip(self.counts()) {
            running += count;
            *slot = running;
        }
        thresholds
    }
}
