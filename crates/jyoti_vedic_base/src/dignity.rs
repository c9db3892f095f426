//! Descriptive dignity of a graha by the sign it occupies.
//!
//! Table-driven classification only. Priority when tables overlap:
//! Exalted > Debilitated > OwnSign > Neutral.

use serde::Serialize;

use crate::graha::Graha;
use crate::rashi::Rashi;

/// Dignity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dignity {
    Exalted,
    Debilitated,
    OwnSign,
    Neutral,
}

impl Dignity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Debilitated => "Debilitated",
            Self::OwnSign => "Own sign",
            Self::Neutral => "Neutral",
        }
    }
}

/// Sign of exaltation.
///
/// Rahu in Vrishabha and Ketu in Vrischika follow the common
/// Parashari convention.
pub const fn exaltation_sign(graha: Graha) -> Rashi {
    match graha {
        Graha::Surya => Rashi::Mesha,
        Graha::Chandra => Rashi::Vrishabha,
        Graha::Mangal => Rashi::Makara,
        Graha::Buddh => Rashi::Kanya,
        Graha::Guru => Rashi::Karka,
        Graha::Shukra => Rashi::Meena,
        Graha::Shani => Rashi::Tula,
        Graha::Rahu => Rashi::Vrishabha,
        Graha::Ketu => Rashi::Vrischika,
    }
}

/// Sign of debilitation: the sign opposite exaltation.
pub const fn debilitation_sign(graha: Graha) -> Rashi {
    exaltation_sign(graha).offset(6)
}

/// Signs owned by a graha. Empty for the nodes.
pub const fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// Classify a graha occupying `rashi`.
pub fn dignity_in(graha: Graha, rashi: Rashi) -> Dignity {
    if exaltation_sign(graha) == rashi {
        Dignity::Exalted
    } else if debilitation_sign(graha) == rashi {
        Dignity::Debilitated
    } else if own_signs(graha).contains(&rashi) {
        Dignity::OwnSign
    } else {
        Dignity::Neutral
    }
}
