//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use insole_cop::ZeroDistancePolicy;
use insole_io::ColumnOrder;
use insole_layout::CenterZonePolicy;

/// COP trajectory analysis for pressure insoles
///
/// Reads a pressure table and a rectangle anchor table, places the sixteen
/// sensors of each foot and reports the center of pressure and equivalent
/// force of every (timestamp, foot) frame.
#[derive(Debug, Parser)]
#[command(name = "cop-trajectory")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Pressure table (timestamp, foot, sensor1..sensor16)
    #[arg(long, value_name = "CSV")]
    pub pressure: PathBuf,

    /// Coordinate table (timestamp, foot, x, y)
    #[arg(long, value_name = "CSV")]
    pub coordinates: PathBuf,

    /// Analysis configuration; flags override its values
    #[arg(long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Treatment of a loaded sensor lying exactly on the COP
    #[arg(long, value_enum)]
    pub zero_distance: Option<ZeroDistanceArg>,

    /// Position of the left midfoot sensor C6
    #[arg(long, value_enum)]
    pub center_zone: Option<CenterZoneArg>,

    /// Order in which sensor columns are paired with layout positions
    #[arg(long, value_enum)]
    pub column_order: Option<ColumnOrderArg>,

    /// Grid spacing between adjacent sensors
    #[arg(long)]
    pub interval: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Zero-distance policy names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ZeroDistanceArg {
    /// Fail the frame
    Reject,
    /// Leave coincident sensors out
    Exclude,
    /// Use the limit as the distance goes to zero
    Limit,
}

impl From<ZeroDistanceArg> for ZeroDistancePolicy {
    fn from(arg: ZeroDistanceArg) -> Self {
        match arg {
            ZeroDistanceArg::Reject => Self::Reject,
            ZeroDistanceArg::Exclude => Self::ExcludeCoincident,
            ZeroDistanceArg::Limit => Self::Limit,
        }
    }
}

/// Center-zone policy names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CenterZoneArg {
    /// Keep C6 where the recorded layout put it
    Recorded,
    /// Move C6 to the mirror of the right foot
    Corrected,
}

impl From<CenterZoneArg> for CenterZonePolicy {
    fn from(arg: CenterZoneArg) -> Self {
        match arg {
            CenterZoneArg::Recorded => Self::Recorded,
            CenterZoneArg::Corrected => Self::Corrected,
        }
    }
}

/// Column order names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColumnOrderArg {
    /// Zone groups in label order
    Recorded,
    /// Each column paired with its own sensor position
    LayoutAligned,
}

impl From<ColumnOrderArg> for ColumnOrder {
    fn from(arg: ColumnOrderArg) -> Self {
        match arg {
            ColumnOrderArg::Recorded => Self::Recorded,
            ColumnOrderArg::LayoutAligned => Self::LayoutAligned,
        }
    }
}

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable table
    Table,
    /// Full report as JSON
    Json,
}

impl Cli {
    /// Default log filter for the verbosity count.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
