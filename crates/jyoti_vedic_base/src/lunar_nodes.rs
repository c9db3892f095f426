//! Lunar node (Rahu/Ketu) longitudes.
//!
//! Mean node: the 5th Delaunay argument Ω (IERS Conventions 2010,
//! Table 5.2e). True node: mean node plus the five largest periodic
//! terms of the node's oscillation (Meeus, "Astronomical Algorithms",
//! Chapter 47).
//!
//! Ketu has no formula of its own: it is always Rahu + 180°.

use serde::{Deserialize, Serialize};

use jyoti_time::fundamental_arguments;

use crate::ephemeris::lunar_arguments_deg;
use crate::util::normalize_360;

/// Mean or true (perturbed) node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeMode {
    /// Smooth polynomial motion only. Always retrograde.
    #[default]
    Mean,
    /// Mean + short-period oscillation; can briefly station direct.
    True,
}

/// Mean Rahu (ascending node) longitude in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    normalize_360(fundamental_arguments(t)[4].to_degrees())
}

/// Short-period oscillation of the node, in degrees.
fn node_oscillation_deg(t: f64) -> f64 {
    let (_, d, m, m_prime, f) = lunar_arguments_deg(t);
    let r = f64::to_radians;
    -1.4979 * r(2.0 * (d - f)).sin() - 0.1500 * r(m).sin() + 0.1226 * r(2.0 * d).sin()
        - 0.1176 * r(2.0 * f).sin()
        + 0.0801 * r(2.0 * (m_prime - f)).sin()
}

/// True Rahu longitude in degrees [0, 360).
pub fn true_rahu_deg(t: f64) -> f64 {
    normalize_360(fundamental_arguments(t)[4].to_degrees() + node_oscillation_deg(t))
}

/// Rahu longitude for the chosen node mode.
pub fn rahu_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_rahu_deg(t),
        NodeMode::True => true_rahu_deg(t),
    }
}

/// Ketu from Rahu: `(rahu + 180) mod 360`.
pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    normalize_360(rahu_deg + 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_rahu_at_j2000_near_125() {
        let r = mean_rahu_deg(0.0);
        assert!((r - 125.04).abs() < 0.01, "mean Rahu = {r}");
    }

    #[test]
    fn mean_node_regresses_about_19_3_deg_per_year() {
        let dt = 1.0 / 100.0;
        let delta = crate::util::signed_delta_deg(mean_rahu_deg(0.0), mean_rahu_deg(dt));
        assert!((delta + 19.34).abs() < 0.05, "Δ = {delta}");
    }

    #[test]
    fn true_node_within_two_degrees_of_mean() {
        for i in 0..400 {
            let t = -1.0 + 0.005 * i as f64;
            let d = crate::util::signed_delta_deg(mean_rahu_deg(t), true_rahu_deg(t));
            assert!(d.abs() < 2.0, "t={t}: true-mean = {d}");
        }
    }

    #[test]
    fn ketu_opposite_rahu() {
        assert_eq!(ketu_from_rahu(125.0), 305.0);
        assert_eq!(ketu_from_rahu(180.0), 0.0);
        assert_eq!(ketu_from_rahu(270.5), 90.5);
    }

    #[test]
    fn mode_dispatch() {
        assert_eq!(rahu_deg(0.3, NodeMode::Mean), mean_rahu_deg(0.3));
        assert_eq!(rahu_deg(0.3, NodeMode::True), true_rahu_deg(0.3));
    }
}
