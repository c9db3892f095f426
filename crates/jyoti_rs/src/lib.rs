//! Birth charts and Vimshottari dasha from date, time and place.
//!
//! The single entry point a presentation layer needs: validate a
//! [`BirthInput`], then ask for a [`ChartResult`] or a [`DashaTimeline`].
//! Every output type implements `serde::Serialize`.
//!
//! # Quick start
//!
//! ```rust
//! use jyoti_rs::*;
//!
//! let birth = BirthInput::parse("1990-01-15", "08:30", 28.6139, 77.2090, 5.5)?;
//! let chart = compute_chart(&birth, &ChartConfig::default())?;
//! let moon = chart.position(Graha::Chandra).map(|p| p.point.rashi);
//! println!("Lagna in {}, Moon in {:?}", chart.ascendant.rashi.name(), moon);
//! # Ok::<(), JyotiError>(())
//! ```

pub mod birth;
pub mod chart;
pub mod config;
pub mod error;
pub mod timeline;

pub use birth::BirthInput;
pub use chart::{ChartPosition, ChartResult, ZodiacPoint, compute_chart};
pub use config::{ChartConfig, TimelineConfig};
pub use error::JyotiError;
pub use timeline::{DashaEntry, DashaTimeline, dasha_timeline};

// Re-export the value types callers match on so they need not depend on
// the lower crates directly.
pub use jyoti_time::{CivilDate, CivilTime, TimeError, UtDateTime};
pub use jyoti_vedic_base::{
    AyanamshaSystem, BirthBalance, DashaLevel, DashaPeriod, DashaSnapshot, Dignity, Dms, Graha,
    Nakshatra, NodeMode, ObliquityMode, Rashi, VedicError,
};
