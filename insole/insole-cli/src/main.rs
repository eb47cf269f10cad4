//! `cop-trajectory`: COP trajectory analysis of insole recordings.
//!
//! Loads a pressure table and a rectangle anchor table, assembles one frame
//! per (timestamp, foot), and reports the center of pressure and equivalent
//! force of each.
//!
//! # Usage
//!
//! ```text
//! cop-trajectory --pressure pressure.csv --coordinates coordinates.csv
//! cop-trajectory --pressure p.csv --coordinates c.csv --zero-distance limit --format json
//! ```
//!
//! Frames that cannot be assembled or analyzed are listed in the report.
//! The exit code is nonzero only when an input cannot be read.
//!
//! Logs go to stderr. `RUST_LOG` overrides the `-v` level.

mod cli;
mod config;
mod output;

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use insole_cop::analyze_trajectory;
use insole_io::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Format};
use crate::config::AnalysisConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());
    run(&cli)
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = AnalysisConfig::resolve(cli)?;
    info!(
        pressure = %cli.pressure.display(),
        coordinates = %cli.coordinates.display(),
        zero_distance = ?config.cop.zero_distance,
        center_zone = ?config.layout.center_zone,
        column_order = %config.column_order,
        "Starting analysis"
    );

    let session = Session::load(&cli.pressure, &cli.coordinates).with_context(|| {
        format!(
            "failed to load session from {} and {}",
            cli.pressure.display(),
            cli.coordinates.display()
        )
    })?;

    let assembled = session.frames(&config.layout, config.column_order);
    let mut report = analyze_trajectory(&assembled.frames, &config.cop);
    report.record_failures(assembled.failures);

    let stdout = BufWriter::new(io::stdout().lock());
    match cli.format {
        Format::Json => output::write_json(stdout, &config, &report),
        Format::Table => output::write_table(stdout, &report),
    }
}
