//! Lagna (Ascendant) and MC (Midheaven).
//!
//! Both come from local sidereal time θ, geographic latitude φ and the
//! obliquity ε (Meeus, "Astronomical Algorithms", Chapter 14):
//!
//! ```text
//! tan λ_asc = −cos θ / (sin ε · tan φ + cos ε · sin θ)
//! tan λ_mc  =  sin θ / (cos θ · cos ε)
//! ```
//!
//! The ascendant identity has two solutions half a circle apart; the one
//! on the eastern horizon is taken by passing the numerator and
//! denominator to `atan2` with their signs flipped.

use serde::{Deserialize, Serialize};

use jyoti_time::{
    centuries_since_j2000, local_sidereal_time_deg, mean_obliquity_deg, true_obliquity_deg,
};

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg, tropical_to_sidereal};
use crate::util::normalize_360;

/// Which obliquity feeds the ascendant formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObliquityMode {
    Mean,
    /// Mean plus nutation in obliquity.
    #[default]
    True,
}

impl ObliquityMode {
    pub fn obliquity_deg(self, t: f64) -> f64 {
        match self {
            Self::Mean => mean_obliquity_deg(t),
            Self::True => true_obliquity_deg(t),
        }
    }
}

/// Tropical ecliptic longitude of the ascendant, degrees [0, 360).
pub fn ascendant_longitude_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let denominator = eps.sin() * phi.tan() + eps.cos() * theta.sin();
    normalize_360(theta.cos().atan2(-denominator).to_degrees())
}

/// Tropical ecliptic longitude of the MC, degrees [0, 360).
pub fn mc_longitude_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_360(theta.sin().atan2(theta.cos() * eps.cos()).to_degrees())
}

/// Ascendant and MC for an instant and place, before and after the
/// sidereal shift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LagnaPoints {
    pub lst_deg: f64,
    pub obliquity_deg: f64,
    pub ayanamsha_deg: f64,
    pub ascendant_tropical_deg: f64,
    pub ascendant_sidereal_deg: f64,
    pub mc_tropical_deg: f64,
    pub mc_sidereal_deg: f64,
}

/// Compute the lagna for a Julian Day (UT) at a place.
///
/// Ayanamsha is subtracted once, here, from the tropical results.
pub fn lagna_points(
    jd: f64,
    latitude_deg: f64,
    longitude_east_deg: f64,
    system: AyanamshaSystem,
    obliquity: ObliquityMode,
) -> LagnaPoints {
    let t = centuries_since_j2000(jd);
    let lst_deg = local_sidereal_time_deg(jd, longitude_east_deg);
    let obliquity_deg = obliquity.obliquity_deg(t);
    let aya = ayanamsha_deg(system, t);

    let asc = ascendant_longitude_deg(lst_deg, latitude_deg, obliquity_deg);
    let mc = mc_longitude_deg(lst_deg, obliquity_deg);

    LagnaPoints {
        lst_deg,
        obliquity_deg,
        ayanamsha_deg: aya,
        ascendant_tropical_deg: asc,
        ascendant_sidereal_deg: tropical_to_sidereal(asc, aya),
        mc_tropical_deg: mc,
        mc_sidereal_deg: tropical_to_sidereal(mc, aya),
    }
}
