//! Dasha timeline for a birth, with "active" flags at a given instant.

use serde::Serialize;

use jyoti_vedic_base::{
    BirthBalance, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSnapshot, Graha,
    VIMSHOTTARI_CYCLE_YEARS, VimshottariTimeline, sidereal_longitude,
};

use crate::birth::BirthInput;
use crate::config::{ChartConfig, TimelineConfig};
use crate::error::JyotiError;

/// A period plus whether it contains the evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaEntry {
    #[serde(flatten)]
    pub period: DashaPeriod,
    pub is_active: bool,
}

impl DashaEntry {
    fn at(period: DashaPeriod, as_of_jd: f64) -> Self {
        Self {
            period,
            is_active: period.is_active_at(as_of_jd),
        }
    }
}

/// Mahadashas from birth through one full cycle (or further, when the
/// evaluation instant lies later), with nested lookups.
#[derive(Debug, Clone, Serialize)]
pub struct DashaTimeline {
    pub birth_jd: f64,
    /// Instant the `is_active` flags refer to.
    pub as_of_jd: f64,
    /// Sidereal Moon at birth.
    pub moon_longitude: f64,
    pub balance: BirthBalance,
    pub mahadashas: Vec<DashaEntry>,
    #[serde(skip)]
    inner: VimshottariTimeline,
}

impl DashaTimeline {
    pub fn mahadashas(&self) -> &[DashaEntry] {
        &self.mahadashas
    }

    /// The mahadasha containing `as_of_jd`, if birth has happened.
    pub fn active_mahadasha(&self) -> Option<&DashaEntry> {
        self.mahadashas.iter().find(|e| e.is_active)
    }

    /// First mahadasha ruled by `lord`.
    pub fn mahadasha_of(&self, lord: Graha) -> Option<DashaEntry> {
        self.inner
            .mahadasha_of(lord)
            .map(|p| DashaEntry::at(p, self.as_of_jd))
    }

    /// Sub-periods of any period, in order, flagged against `as_of_jd`.
    pub fn antardashas_of(&self, parent: &DashaPeriod) -> Vec<DashaEntry> {
        self.inner
            .antardashas_of(parent)
            .into_iter()
            .map(|p| DashaEntry::at(p, self.as_of_jd))
            .collect()
    }

    /// Active chain at `as_of_jd` down to `depth`.
    pub fn snapshot(&mut self, depth: DashaLevel) -> Result<DashaSnapshot, JyotiError> {
        Ok(self.inner.snapshot(self.as_of_jd, depth)?)
    }
}

/// Build the Vimshottari timeline for a birth.
///
/// `as_of_jd` is the instant the "active" flags describe; it is never read
/// from a clock.
#[tracing::instrument(level = "debug", skip_all, fields(date = %input.date(), as_of_jd = as_of_jd))]
pub fn dasha_timeline(
    input: &BirthInput,
    chart: &ChartConfig,
    config: &TimelineConfig,
    as_of_jd: f64,
) -> Result<DashaTimeline, JyotiError> {
    if !as_of_jd.is_finite() {
        return Err(JyotiError::invalid("as_of_jd", format!("{as_of_jd} is not finite")));
    }
    let birth_jd = input.julian_day();
    let moon = sidereal_longitude(Graha::Chandra, birth_jd, chart.ayanamsha, chart.node_mode)
        .sidereal_longitude_deg;
    let mut inner = VimshottariTimeline::new(birth_jd, moon, *config)?;
    if as_of_jd >= birth_jd {
        inner.extend_to(as_of_jd)?;
    }

    let until = (birth_jd + VIMSHOTTARI_CYCLE_YEARS * DAYS_PER_YEAR).max(as_of_jd);
    let mahadashas = inner
        .mahadashas()
        .iter()
        .take_while(|p| p.start_jd <= until)
        .map(|p| DashaEntry::at(*p, as_of_jd))
        .collect();

    Ok(DashaTimeline {
        birth_jd,
        as_of_jd,
        moon_longitude: moon,
        balance: *inner.balance(),
        mahadashas,
        inner,
    })
}
