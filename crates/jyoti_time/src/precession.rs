//! General precession in ecliptic longitude.
//!
//! The accumulated westward drift of the equinox since J2000.0. Only the
//! linear and quadratic terms are kept: the cubic term contributes less
//! than 0.001″ per century over any historical birth date.
//!
//! Source: Capitaine, Wallace & Chapront 2003, Table 1 (IAU 2006).

/// General precession p_A in arcseconds.
///
/// `t` = Julian centuries since J2000.0. Positive means the equinox has
/// moved west, i.e. tropical longitudes of fixed stars have increased.
pub fn general_precession_arcsec(t: f64) -> f64 {
    5028.796195 * t + 1.1054348 * t * t
}

/// General precession p_A in degrees.
pub fn general_precession_deg(t: f64) -> f64 {
    general_precession_arcsec(t) / 3600.0
}
