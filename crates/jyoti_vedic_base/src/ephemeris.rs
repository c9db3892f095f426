//! Approximate geocentric ecliptic longitudes for the Sun, Moon and the
//! five classical planets.
//!
//! Every body follows the same shape: mean longitude polynomial in Julian
//! centuries, a few periodic corrections, normalize. Longitudes are
//! referred to the mean equinox of date. Accuracy is of the order of a few
//! arcminutes for the Sun and Moon and a few tenths of a degree for the
//! outer planets, which is ample for sign, nakshatra and pada.
//!
//! Sources:
//! - Sun: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 25.
//! - Moon: Meeus Chapter 47, leading terms of Table 47.A.
//! - Planets: Standish, "Keplerian Elements for Approximate Positions of
//!   the Major Planets" (JPL, 1800-2050 AD table), J2000 ecliptic.

use serde::Serialize;

use jyoti_time::general_precession_deg;

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg, tropical_to_sidereal};
use crate::graha::Graha;
use crate::lunar_nodes::{NodeMode, ketu_from_rahu, rahu_deg};
use crate::util::normalize_360;

// ---------------------------------------------------------------------------
// Sun
// ---------------------------------------------------------------------------

/// Geometric geocentric position of the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// True longitude, mean equinox of date, degrees [0, 360).
    pub longitude_deg: f64,
    /// Earth-Sun distance in AU.
    pub distance_au: f64,
}

/// Sun position from its mean longitude and equation of center.
///
/// `t` = Julian centuries since J2000.0.
pub fn sun_position(t: f64) -> SunPosition {
    let t2 = t * t;
    let l0 = 280.46646 + 36_000.76983 * t + 0.0003032 * t2;
    let m = (357.52911 + 35_999.05029 * t - 0.0001537 * t2).to_radians();
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;

    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_anomaly = m + c.to_radians();
    let distance_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    SunPosition {
        longitude_deg: normalize_360(l0 + c),
        distance_au,
    }
}

// ---------------------------------------------------------------------------
// Moon
// ---------------------------------------------------------------------------

/// Multiples of (D, M, M′, F) and the sine coefficient in 1e-6 degrees.
#[rustfmt::skip]
const MOON_LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 36] = [
    (0,  0,  1,  0, 6_288_774.0),
    (2,  0, -1,  0, 1_274_027.0),
    (2,  0,  0,  0,   658_314.0),
    (0,  0,  2,  0,   213_618.0),
    (0,  1,  0,  0,  -185_116.0),
    (0,  0,  0,  2,  -114_332.0),
    (2,  0, -2,  0,    58_793.0),
    (2, -1, -1,  0,    57_066.0),
    (2,  0,  1,  0,    53_322.0),
    (2, -1,  0,  0,    45_758.0),
    (0,  1, -1,  0,   -40_923.0),
    (1,  0,  0,  0,   -34_720.0),
    (0,  1,  1,  0,   -30_383.0),
    (2,  0,  0, -2,    15_327.0),
    (0,  0,  1,  2,   -12_528.0),
    (0,  0,  1, -2,    10_980.0),
    (4,  0, -1,  0,    10_675.0),
    (0,  0,  3,  0,    10_034.0),
    (4,  0, -2,  0,     8_548.0),
    (2,  1, -1,  0,    -7_888.0),
    (2,  1,  0,  0,    -6_766.0),
    (1,  0, -1,  0,    -5_163.0),
    (1,  1,  0,  0,     4_987.0),
    (2, -1,  1,  0,     4_036.0),
    (2,  0,  2,  0,     3_994.0),
    (4,  0,  0,  0,     3_861.0),
    (2,  0, -3,  0,     3_665.0),
    (0,  1, -2,  0,    -2_689.0),
    (2,  0, -1,  2,    -2_602.0),
    (2, -1, -2,  0,     2_390.0),
    (1,  0,  1,  0,    -2_348.0),
    (2, -2,  0,  0,     2_236.0),
    (0,  1,  2,  0,    -2_120.0),
    (0,  2,  0,  0,    -2_069.0),
    (2, -2, -1,  0,     2_048.0),
    (2,  0,  1, -2,    -1_773.0),
];

/// Mean lunar arguments in degrees: `(L′, D, M, M′, F)`.
pub(crate) fn lunar_arguments_deg(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let l_prime = 218.3164477 + 481_267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.8501921 + 445_267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.5291092 + 35_999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    let m_prime = 134.9633964 + 477_198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.2720950 + 483_202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    (l_prime, d, m, m_prime, f)
}

/// Geocentric ecliptic longitude of the Moon in degrees [0, 360).
pub fn moon_longitude_deg(t: f64) -> f64 {
    let (l_prime, d, m, m_prime, f) = lunar_arguments_deg(t);
    // Decreasing eccentricity of Earth's orbit
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let mut sigma = 0.0_f64;
    for &(cd, cm, cmp, cf, coeff) in &MOON_LONGITUDE_TERMS {
        let arg = (cd as f64 * d + cm as f64 * m + cmp as f64 * m_prime + cf as f64 * f)
            .to_radians();
        sigma += coeff * e.powi(cm.unsigned_abs() as i32) * arg.sin();
    }

    // Venus, Jupiter and Earth-flattening additive terms
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sigma += 3958.0 * a1.sin() + 1962.0 * (l_prime - f).to_radians().sin() + 318.0 * a2.sin();

    normalize_360(l_prime + sigma / 1_000_000.0)
}

// ---------------------------------------------------------------------------
// Planets
// ---------------------------------------------------------------------------

/// The five classical planets with Keplerian orbits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// Keplerian elements as `[value at J2000, rate per century]`.
///
/// Angles in degrees, `a` in AU.
#[derive(Debug, Clone, Copy)]
struct OrbitalElements {
    a: [f64; 2],
    e: [f64; 2],
    inclination: [f64; 2],
    mean_longitude: [f64; 2],
    long_perihelion: [f64; 2],
    long_node: [f64; 2],
}

impl Planet {
    pub const fn graha(self) -> Graha {
        match self {
            Self::Mercury => Graha::Buddh,
            Self::Venus => Graha::Shukra,
            Self::Mars => Graha::Mangal,
            Self::Jupiter => Graha::Guru,
            Self::Saturn => Graha::Shani,
        }
    }

    #[rustfmt::skip]
    const fn elements(self) -> OrbitalElements {
        match self {
            Self::Mercury => OrbitalElements {
                a: [0.38709927, 0.00000037],
                e: [0.20563593, 0.00001906],
                inclination: [7.00497902, -0.00594749],
                mean_longitude: [252.25032350, 149_472.67411175],
                long_perihelion: [77.45779628, 0.16047689],
                long_node: [48.33076593, -0.12534081],
            },
            Self::Venus => OrbitalElements {
                a: [0.72333566, 0.00000390],
                e: [0.00677672, -0.00004107],
                inclination: [3.39467605, -0.00078890],
                mean_longitude: [181.97909950, 58_517.81538729],
                long_perihelion: [131.60246718, 0.00268329],
                long_node: [76.67984255, -0.27769418],
            },
            Self::Mars => OrbitalElements {
                a: [1.52371034, 0.00001847],
                e: [0.09339410, 0.00007882],
                inclination: [1.84969142, -0.00813131],
                mean_longitude: [-4.55343205, 19_140.30268499],
                long_perihelion: [-23.94362959, 0.44441088],
                long_node: [49.55953891, -0.29257343],
            },
            Self::Jupiter => OrbitalElements {
                a: [5.20288700, -0.00011607],
                e: [0.04838624, -0.00013253],
                inclination: [1.30439695, -0.00183714],
                mean_longitude: [34.39644051, 3_034.74612775],
                long_perihelion: [14.72847983, 0.21252668],
                long_node: [100.47390909, 0.20469106],
            },
            Self::Saturn => OrbitalElements {
                a: [9.53667594, -0.00125060],
                e: [0.05386179, -0.00050991],
                inclination: [2.48599187, 0.00193609],
                mean_longitude: [49.95424423, 1_222.49362201],
                long_perihelion: [92.59887831, -0.41897216],
                long_node: [113.66242448, -0.28867794],
            },
        }
    }
}

fn at(el: [f64; 2], t: f64) -> f64 {
    el[0] + el[1] * t
}

/// Equation of center in radians, series in eccentricity through e⁴.
pub fn equation_of_center_rad(e: f64, mean_anomaly_rad: f64) -> f64 {
    let m = mean_anomaly_rad;
    let e2 = e * e;
    let e3 = e2 * e;
    let e4 = e3 * e;
    (2.0 * e - e3 / 4.0) * m.sin()
        + (5.0 / 4.0 * e2 - 11.0 / 24.0 * e4) * (2.0 * m).sin()
        + 13.0 / 12.0 * e3 * (3.0 * m).sin()
        + 103.0 / 96.0 * e4 * (4.0 * m).sin()
}

/// Heliocentric rectangular ecliptic coordinates (AU), J2000 ecliptic and
/// equinox.
pub fn heliocentric_j2000(planet: Planet, t: f64) -> [f64; 3] {
    let el = planet.elements();
    let a = at(el.a, t);
    let e = at(el.e, t);
    let incl = at(el.inclination, t).to_radians();
    let node = at(el.long_node, t).to_radians();
    let peri = at(el.long_perihelion, t);

    let mean_anomaly = normalize_360(at(el.mean_longitude, t) - peri).to_radians();
    let true_anomaly = mean_anomaly + equation_of_center_rad(e, mean_anomaly);
    let r = a * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    // Argument of latitude: true anomaly + argument of perihelion
    let u = true_anomaly + peri.to_radians() - node;
    let (su, cu) = u.sin_cos();
    let (sn, cn) = node.sin_cos();
    [
        r * (cn * cu - sn * su * incl.cos()),
        r * (sn * cu + cn * su * incl.cos()),
        r * su * incl.sin(),
    ]
}

/// Geocentric ecliptic longitude of a planet, mean equinox of date.
///
/// The heliocentric vector is shifted by the Sun's geocentric vector so
/// that apparent retrograde loops appear near opposition/inferior
/// conjunction.
pub fn planet_longitude_deg(planet: Planet, t: f64) -> f64 {
    let [x, y, _] = heliocentric_j2000(planet, t);
    let precession = general_precession_deg(t);
    let sun = sun_position(t);
    let sun_j2000 = (sun.longitude_deg - precession).to_radians();

    let gx = x + sun.distance_au * sun_j2000.cos();
    let gy = y + sun.distance_au * sun_j2000.sin();
    normalize_360(gy.atan2(gx).to_degrees() + precession)
}

// ---------------------------------------------------------------------------
// Dispatch over all nine grahas
// ---------------------------------------------------------------------------

/// A graha's sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetLongitude {
    pub graha: Graha,
    /// Degrees in [0, 360).
    pub sidereal_longitude_deg: f64,
}

/// Tropical geocentric longitude of any graha, degrees [0, 360).
///
/// Ketu is always derived from Rahu.
pub fn tropical_longitude_deg(graha: Graha, t: f64, node_mode: NodeMode) -> f64 {
    match graha {
        Graha::Surya => sun_position(t).longitude_deg,
        Graha::Chandra => moon_longitude_deg(t),
        Graha::Mangal => planet_longitude_deg(Planet::Mars, t),
        Graha::Buddh => planet_longitude_deg(Planet::Mercury, t),
        Graha::Guru => planet_longitude_deg(Planet::Jupiter, t),
        Graha::Shukra => planet_longitude_deg(Planet::Venus, t),
        Graha::Shani => planet_longitude_deg(Planet::Saturn, t),
        Graha::Rahu => rahu_deg(t, node_mode),
        Graha::Ketu => ketu_from_rahu(rahu_deg(t, node_mode)),
    }
}

/// Sidereal longitude of a graha at a Julian Day.
pub fn sidereal_longitude(
    graha: Graha,
    jd: f64,
    system: AyanamshaSystem,
    node_mode: NodeMode,
) -> PlanetLongitude {
    let t = jyoti_time::centuries_since_j2000(jd);
    let aya = ayanamsha_deg(system, t);
    // Ketu is placed opposite the sidereal Rahu, so the pair stays exactly 180° apart.
    let sidereal_longitude_deg = match graha {
        Graha::Ketu => ketu_from_rahu(tropical_to_sidereal(rahu_deg(t, node_mode), aya)),
        _ => tropical_to_sidereal(tropical_longitude_deg(graha, t, node_mode), aya),
    };
    PlanetLongitude {
        graha,
        sidereal_longitude_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use jyoti_time::centuries_since_j2000;

    #[test]
    fn sun_meeus_example_25a() {
        // 1992 Oct 13.0: ☉ = 199.90988°, R = 0.99766 AU
        let s = sun_position(centuries_since_j2000(2_448_908.5));
        assert_abs_diff_eq!(s.longitude_deg, 199.909_88, epsilon = 1e-3);
        assert_abs_diff_eq!(s.distance_au, 0.99766, epsilon = 1e-4);
    }

    #[test]
    fn moon_meeus_example_47a() {
        // 1992 Apr 12.0: λ = 133.162655° from the full series
        let lon = moon_longitude_deg(centuries_since_j2000(2_448_724.5));
        assert_abs_diff_eq!(lon, 133.162_655, epsilon = 0.02);
    }

    #[test]
    fn venus_meeus_example_33a() {
        // 1992 Dec 20.0: apparent λ = 313.08102°
        let lon = planet_longitude_deg(Planet::Venus, centuries_since_j2000(2_448_976.5));
        assert_abs_diff_eq!(lon, 313.081, epsilon = 0.05);
    }

    #[test]
    fn sidereal_ketu_is_exactly_opposite_rahu() {
        for node_mode in [NodeMode::Mean, NodeMode::True] {
            for i in 0..2000 {
                let jd = 2_415_020.5 + i as f64 * 37.3;
                let rahu = sidereal_longitude(Graha::Rahu, jd, AyanamshaSystem::Lahiri, node_mode);
                let ketu = sidereal_longitude(Graha::Ketu, jd, AyanamshaSystem::Lahiri, node_mode);
                assert_eq!(
                    ketu.sidereal_longitude_deg,
                    normalize_360(rahu.sidereal_longitude_deg + 180.0),
                    "jd {jd} {node_mode:?}"
                );
            }
        }
    }

    #[test]
    fn circular_orbit_has_no_equation_of_center() {
        assert_eq!(equation_of_center_rad(0.0, 1.234), 0.0);
    }

    #[test]
    fn equation_of_center_peaks_near_2e() {
        let e = 0.0934;
        let c = equation_of_center_rad(e, std::f64::consts::FRAC_PI_2);
        assert!((c - 2.0 * e).abs() < 0.01, "C = {c}");
    }

    #[test]
    fn heliocentric_distance_within_orbit_bounds() {
        for planet in [Planet::Mercury, Planet::Venus, Planet::Mars, Planet::Jupiter, Planet::Saturn] {
            let el = planet.elements();
            let (a, e) = (el.a[0], el.e[0]);
            for i in 0..20 {
                let [x, y, z] = heliocentric_j2000(planet, -1.0 + 0.1 * i as f64);
                let r = (x * x + y * y + z * z).sqrt();
                assert!(r > a * (1.0 - e) * 0.99 && r < a * (1.0 + e) * 1.01, "{planet:?} r={r}");
            }
        }
    }

    #[test]
    fn inner_planets_stay_near_the_sun() {
        // Max elongation: Mercury ~28°, Venus ~47°
        for i in 0..100 {
            let t = -0.5 + 0.01 * i as f64;
            let sun = sun_position(t).longitude_deg;
            let me = crate::util::signed_delta_deg(sun, planet_longitude_deg(Planet::Mercury, t));
            let ve = crate::util::signed_delta_deg(sun, planet_longitude_deg(Planet::Venus, t));
            assert!(me.abs() < 29.0, "Mercury elongation {me}");
            assert!(ve.abs() < 48.0, "Venus elongation {ve}");
        }
    }

    #[test]
    fn ketu_is_rahu_plus_180_for_every_mode() {
        for mode in [NodeMode::Mean, NodeMode::True] {
            for i in 0..50 {
                let t = -1.0 + 0.04 * i as f64;
                let rahu = tropical_longitude_deg(Graha::Rahu, t, mode);
                let ketu = tropical_longitude_deg(Graha::Ketu, t, mode);
                assert_eq!(ketu, normalize_360(rahu + 180.0));
            }
        }
    }

    #[test]
    fn sidereal_longitudes_in_range() {
        for &g in &crate::graha::ALL_GRAHAS {
            for &jd in &[2_415_020.5, 2_451_545.0, 2_460_000.5] {
                let p = sidereal_longitude(g, jd, AyanamshaSystem::Lahiri, NodeMode::Mean);
                assert!((0.0..360.0).contains(&p.sidereal_longitude_deg), "{g:?} {p:?}");
            }
        }
    }
}
