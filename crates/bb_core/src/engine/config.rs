//! Calibration ratios for the conditional sub-events of a plate appearance.

use serde::{Deserialize, Serialize};

use crate::engine::base_state::{OutInPlayKind, SingleDepth};
use crate::error::{Result, SimError};

/// Productive outs per out, MLB league average for the 2023 season.
/// Sacrifice flies are counted among these, so they count against batting
/// average and slugging percentage here.
pub const DEFAULT_PRODUCTIVE_OUT_RATIO: f64 = 4456.0 / 16633.0;
/// Double plays per double-play opportunity, MLB league average for 2023.
pub const DEFAULT_DOUBLE_PLAY_RATIO: f64 = 3466.0 / 34097.0;
/// Infield singles per single, MLB league average for 2023.
pub const DEFAULT_INFIELD_HIT_RATIO: f64 = 4480.0 / 26031.0;

/// Probabilities of the sub-events conditioned on an out in play or a
/// single. Fixed parameters of the model, validated once and read-only
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvancementRatios {
    pub productive_out: f64,
    pub double_play: f64,
    pub infield_hit: f64,
}

impl Default for AdvancementRatios {
    fn default() -> Self {
        Self {
            productive_out: DEFAULT_PRODUCTIVE_OUT_RATIO,
            double_play: DEFAULT_DOUBLE_PLAY_RATIO,
            infield_hit: DEFAULT_INFIELD_HIT_RATIO,
        }
    }
}

impl AdvancementRatios {
    pub fn new(productive_out: f64, double_play: f64, infield_hit: f64) -> Result<Self> {
        let ratios = Self { productive_out, double_play, infield_hit };
        ratios.validate()?;
        Ok(ratios)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("productive_out", self.productive_out),
            ("double_play", self.double_play),
            ("infield_hit", self.infield_hit),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::RatioOutOfRange { name, value });
            }
        }
        // The double-play and productive-out bands partition one roll.
        let sum = self.double_play + self.productive_out;
        if sum > 1.0 {
            return Err(SimError::RatioBandsOverlap { sum });
        }
        Ok(())
    }

    /// Classify one uniform roll for an out in play. With a lead runner on
    /// first the roll lands in [0, dp) for a double play, [dp, dp+po) for a
    /// productive out; without one only the productive-out band applies.
    pub fn classify_out_in_play(&self, roll: f64, runner_on_first: bool) -> OutInPlayKind {
        if runner_on_first {
            if roll < self.double_play {
                OutInPlayKind::DoublePlay
            } else if roll < self.double_play + self.productive_out {
                OutInPlayKind::Productive
            } else {
                OutInPlayKind::Routine
            }
        } else if roll < self.productive_out {
            OutInPlayKind::Productive
        } else {
            OutInPlayKind::Routine
        }
    }

    /// Classify one uniform roll for a single. Rolls below the infield-hit
    /// ratio stay on the infield.
    pub fn classify_single(&self, roll: f64) -> SingleDepth {
        if roll >= self.infield_hit {
            SingleDepth::Outfield
        } else {
            SingleDepth::Infield
        }
    }
}
