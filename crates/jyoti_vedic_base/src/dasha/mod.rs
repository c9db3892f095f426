//! Vimshottari dasha (planetary period) calculation.
//!
//! The Moon's nakshatra at birth picks the first lord; the fraction of the
//! nakshatra still ahead of the Moon sets how much of that lord's period
//! remains. Full periods then follow in fixed order, each subdividing
//! proportionally through five levels (Mahadasha through Pranadasha).

pub mod balance;
pub mod generator;
pub mod subperiod;
pub mod timeline;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, birth_balance};
pub use generator::MahadashaGenerator;
pub use subperiod::{snap_last_child_end, sub_periods};
pub use timeline::{TimelineConfig, VimshottariTimeline};
pub use types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSnapshot, find_active_period};
pub use vimshottari::{
    VIMSHOTTARI_CYCLE_YEARS, VIMSHOTTARI_SEQUENCE, nakshatra_lord, next_lord, vimshottari_years,
};
