//! Birth chart: ascendant, MC and the nine graha positions.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use jyoti_vedic_base::{
    ALL_GRAHAS, AyanamshaSystem, Dignity, Dms, Graha, Nakshatra, Rashi, dignity_in, house_of,
    lagna_points, motion, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
    sidereal_longitude,
};

use crate::birth::BirthInput;
use crate::config::ChartConfig;
use crate::error::JyotiError;

/// Where a sidereal longitude falls in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZodiacPoint {
    /// Degrees in [0, 360).
    pub sidereal_longitude: f64,
    pub rashi: Rashi,
    /// 1-based (1 = Mesha).
    pub sign: u8,
    /// Degrees in [0, 30).
    pub degree_in_sign: f64,
    pub dms: Dms,
    pub nakshatra: Nakshatra,
    /// 1-based (1 = Ashwini).
    pub nakshatra_number: u8,
    /// 1..=4
    pub pada: u8,
}

impl ZodiacPoint {
    pub fn from_longitude(sidereal_longitude: f64) -> Result<Self, JyotiError> {
        let lon = normalize_360(sidereal_longitude);
        let info = rashi_from_longitude(lon);
        let rashi = Rashi::from_number(info.sign)?;
        let nak = nakshatra_from_longitude(lon);
        Ok(Self {
            sidereal_longitude: lon,
            rashi,
            sign: info.sign,
            degree_in_sign: info.degrees_in_rashi,
            dms: info.dms,
            nakshatra: nak.nakshatra,
            nakshatra_number: nak.number,
            pada: nak.pada,
        })
    }
}

/// One graha in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPosition {
    pub graha: Graha,
    #[serde(flatten)]
    pub point: ZodiacPoint,
    /// Whole-sign house, 1..=12.
    pub house: u8,
    pub is_retrograde: bool,
    /// Degrees per day; negative while retrograde.
    pub speed_deg_per_day: f64,
    pub dignity: Dignity,
}

impl ChartPosition {
    pub fn sign(&self) -> u8 {
        self.point.sign
    }

    pub fn sidereal_longitude(&self) -> f64 {
        self.point.sidereal_longitude
    }
}

/// A computed birth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    /// Birth instant, Julian Day (UT).
    pub julian_day: f64,
    pub ayanamsha_system: AyanamshaSystem,
    pub ayanamsha_deg: f64,
    /// Local sidereal time in degrees.
    pub lst_deg: f64,
    pub ascendant: ZodiacPoint,
    pub mc: ZodiacPoint,
    pub planets: BTreeMap<Graha, ChartPosition>,
}

impl ChartResult {
    pub fn position(&self, graha: Graha) -> Option<&ChartPosition> {
        self.planets.get(&graha)
    }
}

/// Compute the chart for a validated birth.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(date = %input.date(), time = %input.time(), ayanamsha = config.ayanamsha.name())
)]
pub fn compute_chart(input: &BirthInput, config: &ChartConfig) -> Result<ChartResult, JyotiError> {
    let jd = input.julian_day();
    let lagna = lagna_points(
        jd,
        input.latitude_deg(),
        input.longitude_deg(),
        config.ayanamsha,
        config.obliquity,
    );
    let ascendant = ZodiacPoint::from_longitude(lagna.ascendant_sidereal_deg)?;
    let mc = ZodiacPoint::from_longitude(lagna.mc_sidereal_deg)?;

    let mut planets = BTreeMap::new();
    for graha in ALL_GRAHAS {
        let lon = sidereal_longitude(graha, jd, config.ayanamsha, config.node_mode);
        let point = ZodiacPoint::from_longitude(lon.sidereal_longitude_deg)?;
        let m = motion(graha, jd, config.ayanamsha, config.node_mode);
        planets.insert(
            graha,
            ChartPosition {
                graha,
                point,
                house: house_of(point.sign, ascendant.sign),
                is_retrograde: m.is_retrograde,
                speed_deg_per_day: m.speed_deg_per_day,
                dignity: dignity_in(graha, point.rashi),
            },
        );
    }

    debug!(
        jd,
        ascendant = ascendant.sidereal_longitude,
        rashi = ascendant.rashi.name(),
        "chart computed"
    );

    Ok(ChartResult {
        julian_day: jd,
        ayanamsha_system: config.ayanamsha,
        ayanamsha_deg: lagna.ayanamsha_deg,
        lst_deg: lagna.lst_deg,
        ascendant,
        mc,
        planets,
    })
}
