//! Vimshottari constants: the nine-lord sequence and its 120-year cycle.

use crate::error::VedicError;
use crate::graha::Graha;

/// Lords in dasha order with their full periods in years.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Length of one full cycle in years.
pub const VIMSHOTTARI_CYCLE_YEARS: f64 = 120.0;

/// Full mahadasha length of a lord in years.
pub const fn vimshottari_years(lord: Graha) -> f64 {
    match lord {
        Graha::Ketu => 7.0,
        Graha::Shukra => 20.0,
        Graha::Surya => 6.0,
        Graha::Chandra => 10.0,
        Graha::Mangal => 7.0,
        Graha::Rahu => 18.0,
        Graha::Guru => 16.0,
        Graha::Shani => 19.0,
        Graha::Buddh => 17.0,
    }
}

/// Position of a lord within the sequence.
pub const fn sequence_position(lord: Graha) -> usize {
    match lord {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// The lord following `lord` in dasha order.
pub const fn next_lord(lord: Graha) -> Graha {
    VIMSHOTTARI_SEQUENCE[(sequence_position(lord) + 1) % 9].0
}

/// Dasha lord of a 1-based nakshatra number: `sequence[(n − 1) mod 9]`.
pub fn nakshatra_lord(nakshatra: u8) -> Result<Graha, VedicError> {
    if !(1..=27).contains(&nakshatra) {
        return Err(VedicError::invalid(
            "nakshatra",
            format!("{nakshatra} is outside 1..=27"),
        ));
    }
    Ok(VIMSHOTTARI_SEQUENCE[((nakshatra - 1) % 9) as usize].0)
}
