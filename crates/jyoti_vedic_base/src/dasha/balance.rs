//! Birth balance: how much of the first mahadasha remains at birth.

use serde::Serialize;

use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;

use super::vimshottari::{nakshatra_lord, vimshottari_years};

/// Where the Moon stood at birth and what it leaves of the first period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthBalance {
    /// 1-based nakshatra of the Moon.
    pub nakshatra: u8,
    /// Lord of the birth mahadasha.
    pub lord: Graha,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Years of the birth mahadasha still to run.
    pub balance_years: f64,
}

/// Compute the Vimshottari birth balance from the Moon's sidereal
/// longitude.
///
/// `balance = lord_years × (1 − elapsed_fraction)`
pub fn birth_balance(moon_sidereal_lon: f64) -> Result<BirthBalance, VedicError> {
    if !moon_sidereal_lon.is_finite() {
        return Err(VedicError::invalid(
            "moon_longitude",
            format!("{moon_sidereal_lon} is not finite"),
        ));
    }
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let lord = nakshatra_lord(info.number)?;
    let elapsed_fraction = info.elapsed_fraction();

    Ok(BirthBalance {
        nakshatra: info.number,
        lord,
        elapsed_fraction,
        balance_years: vimshottari_years(lord) * (1.0 - elapsed_fraction),
    })
}
