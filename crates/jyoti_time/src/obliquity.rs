//! Obliquity of the ecliptic (Earth's axial tilt).
//!
//! Mean obliquity: Meeus, "Astronomical Algorithms", Eq. 22.2 (IAU 1980
//! cubic, good to ~1″ over 2000 years either side of J2000).

use crate::nutation::nutation_low_precision;

/// Mean obliquity at J2000.0 in degrees (23°26′21.448″).
pub const OBLIQUITY_J2000_DEG: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;

/// Mean obliquity of the ecliptic in degrees.
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// True obliquity: mean obliquity plus nutation in obliquity.
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation_low_precision(t).delta_eps_arcsec / 3600.0
}
