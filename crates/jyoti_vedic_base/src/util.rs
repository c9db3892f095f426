//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 % 360 + 360 rounds up to 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed shortest angular difference `to − from`, in [-180, 180).
///
/// Crossing 0°/360° does not produce a ±360° jump.
pub fn signed_delta_deg(from: f64, to: f64) -> f64 {
    let d = normalize_360(to - from);
    if d >= 180.0 { d - 360.0 } else { d }
}
