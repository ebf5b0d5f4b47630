//! A batter: career frequencies plus the record of simulated outcomes.

use rand::Rng;

use crate::error::{Result, SimError};
use crate::models::outcome::{Outcome, OutcomeFrequencies, OUTCOME_KINDS};
use crate::stats;

/// One lineup slot: immutable career frequencies, the cumulative threshold
/// table derived from them once at construction, and the growing history of
/// observed outcomes (one entry per simulated plate appearance).
#[derive(Debug, Clone)]
pub struct Batter {
    frequencies: OutcomeFrequencies,
    thresholds: [u32; OUTCOME_KINDS],
    history: Vec<Outcome>,
}

impl Batter {
    pub fn new(frequencies: OutcomeFrequencies) -> Result<Self> {
        frequencies.validate()?;
        Ok(Self {
            frequencies,
            thresholds: frequencies.thresholds(),
            history: Vec::new(),
        })
    }

    pub fn frequencies(&self) -> &OutcomeFrequencies {
        &self.frequencies
    }

    /// Every outcome this batter has produced so far, in order.
    pub fn history(&self) -> &[Outcome] {
        &self.history
    }

    /// Simulate one plate appearance: categorical sampling by inverse-CDF
    /// over the integer career counts. The sampled outcome is appended to
    /// this batter's history before it is returned.
    ///
    /// A draw that escapes the threshold table means the table no longer
    /// reconstructs the declared plate appearances and is fatal.
    pub fn plate_appearance(&mut self, rng: &mut impl Rng) -> Result<Outcome> {
        let draw = rng.gen_range(0..self.frequencies.plate_appearances);
        for (index, &threshold) in self.thresholds.iter().enumerate() {
            if draw < threshold {
                let outcome = Outcome::ALL[index];
                self.history.push(outcome);
                return Ok(outcome);
            }
        }
        Err(SimError::OutcomeTableExhausted {
            draw,
            plate_appearances: self.frequencies.plate_appearances,
        })
    }

    /// Number of times `kind` has occurred in this batter's history.
    pub fn tally(&self, kind: Outcome) -> u64 {
        self.history.iter().filter(|&&outcome| outcome == kind).count() as u64
    }

    pub fn plate_appearances(&self) -> u64 {
        self.history.len() as u64
    }

    /// Plate appearances minus walks and hit-by-pitches.
    pub fn at_bats(&self) -> u64 {
        self.history.iter().filter(|outcome| !matches!(outcome, Outcome::Walk)).count() as u64
    }

    pub fn hits(&self) -> u64 {
        self.history.iter().filter(|outcome| outcome.is_hit()).count() as u64
    }

    pub fn total_bases(&self) -> u64 {
        self.history.iter().map(|outcome| u64::from(outcome.bases_awarded())).sum()
    }

    pub fn times_on_base(&self) -> u64 {
        self.history.iter().filter(|outcome| outcome.reaches_base()).count() as u64
    }

    /// Hits per at-bat, `None` with no at-bats on record.
    pub fn batting_average(&self) -> Option<f64> {
        stats::rate(self.hits(), self.at_bats())
    }

    pub fn on_base_percentage(&self) -> Option<f64> {
        stats::rate(self.times_on_base(), self.plate_appearances())
    }

    pub fn slugging(&self) -> Option<f64> {
        stats::rate(self.total_bases(), self.at_bats())
    }

    /// On-base plus slugging, rounded from the sum of the unrounded rates.
    pub fn ops(&self) -> Option<f64> {
        let obp = stats::raw_rate(self.times_on_base(), self.plate_appearances())?;
        let slg = stats::raw_rate(self.total_bases(), self.at_bats())?;
        Some(stats::round3(obp + slg))
    }
}
