//! Report rendering.

use std::io::Write;

use anyhow::Result;
use insole_cop::TrajectoryReport;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::config::AnalysisConfig;

/// JSON document written by `--format json`.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// Configuration the run used.
    pub config: &'a AnalysisConfig,
    /// Analysis results.
    pub report: &'a TrajectoryReport,
}

/// Write the report as pretty-printed JSON.
pub fn write_json<W: Write>(
    mut out: W,
    config: &AnalysisConfig,
    report: &TrajectoryReport,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, &JsonOutput { config, report })?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Write the report as a table followed by a summary.
pub fn write_table<W: Write>(mut out: W, report: &TrajectoryReport) -> Result<()> {
    let header = format!(
        "{:<20} {:<6} {:>10} {:>10} {:>12} {:>12}",
        "timestamp", "foot", "cop_x", "cop_y", "total", "f_cop"
    );
    writeln!(
        out,
        "{}",
        header.if_supports_color(Stream::Stdout, |h| h.bold())
    )?;

    for point in &report.points {
        let a = &point.analysis;
        writeln!(
            out,
            "{:<20} {:<6} {:>10.4} {:>10.4} {:>12.3} {:>12.3}",
            point.timestamp.as_str(),
            a.side.name(),
            a.cop.position.x,
            a.cop.position.y,
            a.cop.total_pressure,
            a.equivalent_force
        )?;
    }

    if report.has_failures() {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            "Failed frames:".if_supports_color(Stream::Stdout, |t| t.yellow())
        )?;
        for failure in &report.failures {
            writeln!(
                out,
                "  {:<20} {:<6} {}",
                failure.timestamp.as_str(),
                failure.side.name(),
                failure.reason
            )?;
        }
    }

    writeln!(out)?;
    write!(out, "{report}")?;
    out.flush()?;
    Ok(())
}
