//! Greenwich and local sidereal time, in degrees.
//!
//! Birth times are civil, so the input Julian Day is treated as UT1
//! directly (|UT1 − UTC| < 0.9 s, well below chart resolution).
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.
//! - Equation of the equinoxes: Meeus, "Astronomical Algorithms", Ch. 12.

use crate::julian::{J2000_JD, centuries_since_j2000};
use crate::nutation::nutation_low_precision;
use crate::obliquity::mean_obliquity_deg;

/// Earth Rotation Angle in degrees, [0, 360).
pub fn earth_rotation_angle_deg(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let turns = 0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du;
    (turns.rem_euclid(1.0) * 360.0).rem_euclid(360.0)
}

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = centuries_since_j2000(jd_ut);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (earth_rotation_angle_deg(jd_ut) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Equation of the equinoxes, Δψ·cos ε, in degrees.
pub fn equation_of_equinoxes_deg(jd_ut: f64) -> f64 {
    let t = centuries_since_j2000(jd_ut);
    let nut = nutation_low_precision(t);
    let eps = mean_obliquity_deg(t) + nut.delta_eps_arcsec / 3600.0;
    nut.delta_psi_arcsec * eps.to_radians().cos() / 3600.0
}

/// Greenwich Apparent Sidereal Time in degrees, [0, 360).
pub fn gast_deg(jd_ut: f64) -> f64 {
    (gmst_deg(jd_ut) + equation_of_equinoxes_deg(jd_ut)).rem_euclid(360.0)
}

/// Local apparent sidereal time for an observer at `longitude_east_deg`.
///
/// Returns degrees in [0, 360).
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    (gast_deg(jd_ut) + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn era_at_j2000_noon() {
        let era = earth_rotation_angle_deg(J2000_JD);
        assert!((era - 280.46).abs() < 0.1, "ERA = {era}");
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT1: GMST = 6h 39m 52.27s ≈ 99.968°
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.968).abs() < 0.01, "GMST = {g}");
    }

    #[test]
    fn meeus_example_12a() {
        // 1987 Apr 10, 0h UT: GMST = 13h 10m 46.3668s = 197.693195°
        let g = gmst_deg(2_446_895.5);
        assert_abs_diff_eq!(g, 197.693_195, epsilon = 1e-3);
    }

    #[test]
    fn equation_of_equinoxes_is_small() {
        for &jd in &[2_440_000.5, 2_451_545.0, 2_460_000.5] {
            let ee = equation_of_equinoxes_deg(jd);
            assert!(ee.abs() < 0.0055, "EE = {ee}°");
        }
    }

    #[test]
    fn east_longitude_adds() {
        let jd = 2_451_545.0;
        let lst = local_sidereal_time_deg(jd, 90.0);
        assert_abs_diff_eq!(lst, (gast_deg(jd) + 90.0).rem_euclid(360.0), epsilon = 1e-12);
    }

    #[test]
    fn always_in_range() {
        for &jd in &[2_415_020.0, 2_451_544.5, 2_460_000.5, 2_488_070.0] {
            for &lon in &[-180.0, -77.0, 0.0, 139.7, 180.0] {
                let lst = local_sidereal_time_deg(jd, lon);
                assert!((0.0..360.0).contains(&lst), "LST out of range: {lst}");
            }
        }
    }
}
