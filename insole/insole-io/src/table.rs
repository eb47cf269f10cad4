//! Shared CSV plumbing for the recorded tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use insole_types::{FootSide, Timestamp};
use tracing::warn;

use crate::error::{IoError, IoResult};

/// Timestamp column name.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Foot indicator column name.
pub const FOOT_COLUMN: &str = "foot";

/// A data row skipped because one of its cells did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRejection {
    /// 1-based line in the file.
    pub line: u64,
    /// Timestamp of the row.
    pub timestamp: Timestamp,
    /// Foot of the row; `None` when the foot indicator itself is invalid.
    pub side: Option<FootSide>,
    /// Parse error text.
    pub reason: String,
}

impl RowRejection {
    /// Whether this rejection belongs to the given timestamp and foot.
    #[must_use]
    pub fn is_for(&self, timestamp: &Timestamp, side: FootSide) -> bool {
        self.side == Some(side) && self.timestamp == *timestamp
    }
}

/// Build a rejection for `record` and log it.
pub(crate) fn reject(
    table: &'static str,
    record: &StringRecord,
    timestamp: Timestamp,
    side: Option<FootSide>,
    err: &IoError,
) -> RowRejection {
    let rejection = RowRejection {
        line: line_of(record),
        timestamp,
        side,
        reason: err.to_string(),
    };
    warn!(
        table,
        line = rejection.line,
        timestamp = %rejection.timestamp,
        side = ?rejection.side,
        reason = %rejection.reason,
        "Skipped unparsable row"
    );
    rejection
}

pub(crate) fn csv_reader<R: Read>(reader: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader)
}

pub(crate) fn open_file(path: &Path) -> IoResult<File> {
    File::open(path).map_err(|e| IoError::open(path.to_path_buf(), e))
}

/// Position of `column` in the header.
pub(crate) fn column_index(
    headers: &StringRecord,
    table: &'static str,
    column: &str,
) -> IoResult<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| IoError::missing_column(table, column))
}

pub(crate) fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

pub(crate) fn field<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("")
}

pub(crate) fn parse_f64(record: &StringRecord, index: usize, column: &str) -> IoResult<f64> {
    let raw = field(record, index);
    raw.parse::<f64>()
        .map_err(|_| IoError::invalid_value(line_of(record), column, raw))
}

pub(crate) fn parse_foot(record: &StringRecord, index: usize) -> IoResult<FootSide> {
    let raw = field(record, index);
    raw.parse::<FootSide>().map_err(|_| IoError::InvalidFoot {
        line: line_of(record),
        value: raw.to_string(),
    })
}
