use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use jyoti_rs::{ChartConfig, TimelineConfig};

use crate::cli::ChartOverrides;

/// Contents of the optional TOML settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JyotiConfig {
    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub timeline: TimelineConfig,
}

impl JyotiConfig {
    /// Read the file if one was given, else use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        config
            .timeline
            .validate()
            .context("invalid [timeline] settings")?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Chart settings with command-line flags applied on top.
    pub fn chart_with(&self, overrides: &ChartOverrides) -> ChartConfig {
        let mut chart = self.chart;
        if let Some(a) = overrides.ayanamsha {
            chart.ayanamsha = a.into();
        }
        if let Some(n) = overrides.node {
            chart.node_mode = n.into();
        }
        if let Some(o) = overrides.obliquity {
            chart.obliquity = o.into();
        }
        chart
    }
}
