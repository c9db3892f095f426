//! Vimshottari timeline with bounded, on-demand extension.
//!
//! Mahadashas are pulled from a [`MahadashaGenerator`] in batches of whole
//! cycles. A query past the generated range pulls more batches, up to a
//! hard horizon measured from birth; queries beyond it are refused.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::VedicError;
use crate::graha::Graha;

use super::balance::{BirthBalance, birth_balance};
use super::generator::MahadashaGenerator;
use super::subperiod::sub_periods;
use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSnapshot, find_active_period};
use super::vimshottari::{VIMSHOTTARI_CYCLE_YEARS, VIMSHOTTARI_SEQUENCE};

/// Batch size and horizon for timeline generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineConfig {
    /// Full 120-year cycles pulled per batch.
    pub cycles_per_batch: u32,
    /// Furthest queryable instant, in years after birth.
    pub horizon_years: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            cycles_per_batch: 3,
            horizon_years: 10.0 * VIMSHOTTARI_CYCLE_YEARS,
        }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> Result<(), VedicError> {
        if self.cycles_per_batch == 0 {
            return Err(VedicError::invalid("cycles_per_batch", "must be at least 1"));
        }
        if !(self.horizon_years.is_finite() && self.horizon_years > 0.0) {
            return Err(VedicError::invalid(
                "horizon_years",
                format!("{} is not a positive number of years", self.horizon_years),
            ));
        }
        Ok(())
    }
}

/// Mahadashas from birth, generated lazily.
#[derive(Debug, Clone)]
pub struct VimshottariTimeline {
    birth_jd: f64,
    balance: BirthBalance,
    config: TimelineConfig,
    generator: MahadashaGenerator,
    mahadashas: Vec<DashaPeriod>,
}

impl VimshottariTimeline {
    /// Build a timeline and generate its first batch.
    pub fn new(
        birth_jd: f64,
        moon_sidereal_lon: f64,
        config: TimelineConfig,
    ) -> Result<Self, VedicError> {
        config.validate()?;
        if !birth_jd.is_finite() {
            return Err(VedicError::invalid("birth_jd", format!("{birth_jd} is not finite")));
        }
        let balance = birth_balance(moon_sidereal_lon)?;
        let mut timeline = Self {
            birth_jd,
            balance,
            config,
            generator: MahadashaGenerator::new(birth_jd, &balance),
            mahadashas: Vec::new(),
        };
        timeline.pull_batch();
        Ok(timeline)
    }

    pub fn birth_jd(&self) -> f64 {
        self.birth_jd
    }

    pub fn balance(&self) -> &BirthBalance {
        &self.balance
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Mahadashas generated so far, in order.
    pub fn mahadashas(&self) -> &[DashaPeriod] {
        &self.mahadashas
    }

    /// End of the last generated mahadasha.
    pub fn generated_until_jd(&self) -> f64 {
        self.generator.cursor_jd()
    }

    /// Last instant that may be queried.
    pub fn horizon_jd(&self) -> f64 {
        self.birth_jd + self.config.horizon_years * DAYS_PER_YEAR
    }

    fn pull_batch(&mut self) {
        let count = VIMSHOTTARI_SEQUENCE.len() * self.config.cycles_per_batch as usize;
        self.mahadashas.extend(self.generator.by_ref().take(count));
        debug!(
            periods = self.mahadashas.len(),
            until_jd = self.generated_until_jd(),
            "extended mahadasha timeline"
        );
    }

    /// Generate batches until `query_jd` plus one batch of cycles is
    /// covered, or the horizon is, whichever comes first.
    pub fn extend_to(&mut self, query_jd: f64) -> Result<(), VedicError> {
        if !query_jd.is_finite() {
            return Err(VedicError::invalid("query_jd", format!("{query_jd} is not finite")));
        }
        let horizon_jd = self.horizon_jd();
        if query_jd >= horizon_jd {
            warn!(query_jd, horizon_jd, "dasha query beyond horizon");
            return Err(VedicError::BeyondHorizon { query_jd, horizon_jd });
        }
        let lead_days =
            f64::from(self.config.cycles_per_batch) * VIMSHOTTARI_CYCLE_YEARS * DAYS_PER_YEAR;
        let target_jd = (query_jd + lead_days).min(horizon_jd);
        while self.generated_until_jd() <= target_jd {
            self.pull_batch();
        }
        Ok(())
    }

    /// The mahadasha containing `query_jd`; `None` before birth.
    pub fn active_mahadasha(&mut self, query_jd: f64) -> Result<Option<DashaPeriod>, VedicError> {
        if query_jd < self.birth_jd {
            return Ok(None);
        }
        self.extend_to(query_jd)?;
        Ok(find_active_period(&self.mahadashas, query_jd).map(|i| self.mahadashas[i]))
    }

    /// First mahadasha ruled by `lord` after birth.
    ///
    /// Every lord appears within the first batch, so this never extends.
    pub fn mahadasha_of(&self, lord: Graha) -> Option<DashaPeriod> {
        self.mahadashas.iter().find(|p| p.lord == lord).copied()
    }

    /// Antardashas of a mahadasha, in order.
    pub fn antardashas_of(&self, mahadasha: &DashaPeriod) -> Vec<DashaPeriod> {
        sub_periods(mahadasha)
    }

    /// The active chain from mahadasha down to `depth` at `query_jd`.
    ///
    /// Before birth the chain is empty.
    pub fn snapshot(
        &mut self,
        query_jd: f64,
        depth: DashaLevel,
    ) -> Result<DashaSnapshot, VedicError> {
        let mut periods = Vec::with_capacity(depth as usize + 1);
        if let Some(mut current) = self.active_mahadasha(query_jd)? {
            periods.push(current);
            while current.level < depth {
                let children = sub_periods(&current);
                match find_active_period(&children, query_jd) {
                    Some(i) => {
                        current = children[i];
                        periods.push(current);
                    }
                    None => break,
                }
            }
        }
        Ok(DashaSnapshot { query_jd, periods })
    }
}
