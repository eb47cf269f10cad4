//! Analysis configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use insole_cop::CopParams;
use insole_io::ColumnOrder;
use insole_layout::LayoutParams;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Everything that shapes one analysis run.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Sensor layout parameters.
    pub layout: LayoutParams,
    /// COP and equivalent force parameters.
    pub cop: CopParams,
    /// Pairing of sensor columns with layout positions.
    pub column_order: ColumnOrder,
}

impl AnalysisConfig {
    /// Read a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Configuration for a command line: the file if given, then flags.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let config = base.with_overrides(cli);
        config
            .layout
            .validate()
            .context("invalid layout parameters")?;
        Ok(config)
    }

    /// Apply command-line flags on top of this configuration.
    #[must_use]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(policy) = cli.zero_distance {
            self.cop = self.cop.zero_distance(policy.into());
        }
        if let Some(policy) = cli.center_zone {
            self.layout = self.layout.center_zone(policy.into());
        }
        if let Some(order) = cli.column_order {
            self.column_order = order.into();
        }
        if let Some(interval) = cli.interval {
            self.layout = self.layout.interval(interval);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use clap::Parser;
    use insole_cop::ZeroDistancePolicy;
    use insole_layout::CenterZonePolicy;

    fn cli(extra: &[&str]) -> Cli {
        let mut args = vec!["cop-trajectory", "--pressure", "p.csv", "--coordinates", "c.csv"];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: AnalysisConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config: AnalysisConfig = serde_json::from_str(
            r#"{
                "layout": {"interval": 2.0, "center_zone": "corrected"},
                "cop": {"zero_distance": "exclude-coincident"},
                "column_order": "layout-aligned"
            }"#,
        )
        .unwrap();

        assert_relative_eq!(config.layout.interval, 2.0);
        assert_eq!(config.layout.center_zone, CenterZonePolicy::Corrected);
        assert_relative_eq!(config.layout.width, 12.0);
        assert_eq!(config.cop.zero_distance, ZeroDistancePolicy::ExcludeCoincident);
        assert!(config.cop.require_finite);
        assert_eq!(config.column_order, ColumnOrder::LayoutAligned);
    }

    #[test]
    fn test_flags_override_config() {
        let base = AnalysisConfig {
            cop: CopParams::default().zero_distance(ZeroDistancePolicy::ExcludeCoincident),
            ..AnalysisConfig::default()
        };
        let config = base.with_overrides(&cli(&["--zero-distance", "limit", "--interval", "0.5"]));
        assert_eq!(config.cop.zero_distance, ZeroDistancePolicy::Limit);
        assert_relative_eq!(config.layout.interval, 0.5);
        assert_eq!(config.column_order, ColumnOrder::Recorded);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let base = AnalysisConfig {
            column_order: ColumnOrder::LayoutAligned,
            ..AnalysisConfig::default()
        };
        assert_eq!(base.with_overrides(&cli(&[])), base);
    }

    #[test]
    fn test_resolve_rejects_bad_interval() {
        assert!(AnalysisConfig::resolve(&cli(&["--interval=-1"])).is_err());
        assert!(AnalysisConfig::resolve(&cli(&[])).is_ok());
    }

    #[test]
    fn test_missing_config_file() {
        let err = AnalysisConfig::resolve(&cli(&["--config", "/nonexistent/config.json"]))
            .unwrap_err();
        assert!(format!("{err}").contains("failed to read config"));
    }
}
