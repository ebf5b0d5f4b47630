//! A team: a fixed batting order plus season-cumulative results.

use crate::error::{Result, SimError};
use crate::models::batter::Batter;
use crate::models::outcome::{Outcome, OutcomeFrequencies};
use crate::stats;

/// Batting-order length of the reference model.
pub const LINEUP_SIZE: usize = 9;

/// One of the two simulated teams. The lineup order is fixed for the whole
/// season and drives batter sequencing across innings and games.
#[derive(Debug, Clone)]
pub struct Team {
    pub name: String,
    lineup: Vec<Batter>,
    /// Season-cumulative runs scored.
    pub runs: u32,
    pub wins: u32,
    pub losses: u32,
}

impl Team {
    pub fn new(name: impl Into<String>, lineup: Vec<Batter>) -> Result<Self> {
        if lineup.is_empty() {
            return Err(SimError::EmptyLineup);
        }
        Ok(Self {
            name: name.into(),
            lineup,
            runs: 0,
            wins: 0,
            losses: 0,
        })
    }

    /// Build a lineup of `lineup_size` copies of one modeled hitter, each
    /// with its own outcome history.
    pub fn from_batting_line(
        name: impl Into<String>,
        line: OutcomeFrequencies,
        lineup_size: usize,
    ) -> Result<Self> {
        let prototype = Batter::new(line)?;
        Self::new(name, vec![prototype; lineup_size])
    }

    pub fn lineup(&self) -> &[Batter] {
        &self.lineup
    }

    pub(crate) fn batter_mut(&mut self, index: usize) -> &mut Batter {
        &mut self.lineup[index]
    }

    /// Collective number of times `kind` occurred across the lineup.
    pub fn tally(&self, kind: Outcome) -> u64 {
        self.lineup.iter().map(|batter| batter.tally(kind)).sum()
    }

    pub fn plate_appearances(&self) -> u64 {
        self.lineup.iter().map(Batter::plate_appearances).sum()
    }

    pub fn at_bats(&self) -> u64 {
        self.lineup.iter().map(Batter::at_bats).sum()
    }

    pub fn hits(&self) -> u64 {
        self.lineup.iter().map(Batter::hits).sum()
    }

    pub fn total_bases(&self) -> u64 {
        self.lineup.iter().map(Batter::total_bases).sum()
    }

    pub fn times_on_base(&self) -> u64 {
        self.lineup.iter().map(Batter::times_on_base).sum()
    }

    pub fn batting_average(&self) -> Option<f64> {
        stats::rate(self.hits(), self.at_bats())
    }

    pub fn on_base_percentage(&self) -> Option<f64> {
        stats::rate(self.times_on_base(), self.plate_appearances())
    }

    pub fn slugging(&self) -> Option<f64> {
        stats::rate(self.total_bases(), self.at_bats())
    }

    pub fn ops(&self) -> Option<f64> {
        let obp = stats::raw_rate(self.times_on_base(), self.plate_appearances())?;
        let slg = stats::raw_rate(self.total_bases(), self.at_bats())?;
        Some(stats::round3(obp + slg))
    }

    /// "wins-losses" record string.
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }

    pub fn winning_percentage(&self) -> Option<f64> {
        stats::rate(u64::from(self.wins), u64::from(self.wins + self.losses))
    }
}
