//! Apparent daily motion and retrograde status.
//!
//! Motion is sampled symmetrically: sidereal longitude one day before and
//! one day after the instant, with the difference taken along the shortest
//! arc so a body crossing 0° Mesha is not mistaken for a 360° jump.

use serde::Serialize;

use crate::ayanamsha::AyanamshaSystem;
use crate::ephemeris::sidereal_longitude;
use crate::graha::Graha;
use crate::lunar_nodes::NodeMode;
use crate::util::signed_delta_deg;

/// Half-width of the sampling window in days.
pub const MOTION_SAMPLE_DAYS: f64 = 1.0;

/// Apparent motion of a graha at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motion {
    /// Degrees per day; negative while moving backwards.
    pub speed_deg_per_day: f64,
    pub is_retrograde: bool,
}

/// Sample a graha's motion around `jd`.
///
/// Surya and Chandra are never retrograde, whatever the sampled delta.
pub fn motion(graha: Graha, jd: f64, system: AyanamshaSystem, node_mode: NodeMode) -> Motion {
    let before = sidereal_longitude(graha, jd - MOTION_SAMPLE_DAYS, system, node_mode);
    let after = sidereal_longitude(graha, jd + MOTION_SAMPLE_DAYS, system, node_mode);
    let delta = signed_delta_deg(before.sidereal_longitude_deg, after.sidereal_longitude_deg);

    Motion {
        speed_deg_per_day: delta / (2.0 * MOTION_SAMPLE_DAYS),
        is_retrograde: !graha.is_luminary() && delta < 0.0,
    }
}

/// Retrograde flag only.
pub fn is_retrograde(graha: Graha, jd: f64, system: AyanamshaSystem, node_mode: NodeMode) -> bool {
    motion(graha, jd, system, node_mode).is_retrograde
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAHIRI: AyanamshaSystem = AyanamshaSystem::Lahiri;

    #[test]
    fn luminaries_never_retrograde() {
        for i in 0..60 {
            let jd = 2_451_545.0 + i as f64 * 6.1;
            assert!(!is_retrograde(Graha::Surya, jd, LAHIRI, NodeMode::Mean));
            assert!(!is_retrograde(Graha::Chandra, jd, LAHIRI, NodeMode::Mean));
        }
    }

    #[test]
    fn sun_moves_about_one_degree_per_day() {
        let m = motion(Graha::Surya, 2_451_545.0, LAHIRI, NodeMode::Mean);
        assert!((m.speed_deg_per_day - 1.0).abs() < 0.05, "{m:?}");
    }

    #[test]
    fn moon_speed_in_known_band() {
        for i in 0..30 {
            let m = motion(Graha::Chandra, 2_451_545.0 + i as f64, LAHIRI, NodeMode::Mean);
            assert!((11.5..15.5).contains(&m.speed_deg_per_day), "{m:?}");
        }
    }

    #[test]
    fn mean_nodes_always_retrograde() {
        for i in 0..20 {
            let jd = 2_440_000.5 + i as f64 * 500.0;
            assert!(is_retrograde(Graha::Rahu, jd, LAHIRI, NodeMode::Mean));
            assert!(is_retrograde(Graha::Ketu, jd, LAHIRI, NodeMode::Mean));
        }
    }

    #[test]
    fn mars_retrograde_at_2020_opposition() {
        // 2020-10-13 opposition; direct again mid-November
        assert!(is_retrograde(Graha::Mangal, 2_459_135.5, LAHIRI, NodeMode::Mean));
        assert!(!is_retrograde(Graha::Mangal, 2_459_001.5, LAHIRI, NodeMode::Mean));
    }

    #[test]
    fn mercury_retrograde_february_2000() {
        // Retrograde 2000-02-21 .. 2000-03-14
        assert!(is_retrograde(Graha::Buddh, 2_451_545.0 + 60.0, LAHIRI, NodeMode::Mean));
        assert!(!is_retrograde(Graha::Buddh, 2_451_545.0, LAHIRI, NodeMode::Mean));
    }

    #[test]
    fn deterministic() {
        let a = motion(Graha::Guru, 2_455_000.5, LAHIRI, NodeMode::True);
        let b = motion(Graha::Guru, 2_455_000.5, LAHIRI, NodeMode::True);
        assert_eq!(a, b);
    }
}
