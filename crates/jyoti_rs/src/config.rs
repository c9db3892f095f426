//! Calculation options.

use serde::{Deserialize, Serialize};

use jyoti_vedic_base::{AyanamshaSystem, NodeMode, ObliquityMode};

pub use jyoti_vedic_base::TimelineConfig;

/// Options that change computed positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub ayanamsha: AyanamshaSystem,
    pub node_mode: NodeMode,
    pub obliquity: ObliquityMode,
}
