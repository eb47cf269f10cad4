//! Rectangle anchor table ingestion.
//!
//! One row per (timestamp, foot) with columns `timestamp`, `foot`, `x`, `y`.
//! `(x, y)` is the top-left corner of the rectangle enclosing the insole.
//! Rows with a cell that does not parse are kept aside as
//! [`RowRejection`]s.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use insole_layout::{LayoutParams, generate_layout};
use insole_types::{FootSide, Point2, Timestamp};
use tracing::{debug, info};

use crate::error::IoResult;
use crate::pair::FootPair;
use crate::table::{
    FOOT_COLUMN, RowRejection, TIMESTAMP_COLUMN, column_index, csv_reader, field, open_file,
    parse_f64, parse_foot, reject,
};

const TABLE: &str = "coordinate";

/// Rectangle anchors grouped by timestamp and foot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorTable {
    rows: BTreeMap<Timestamp, FootPair<Point2<f64>>>,
    rejections: Vec<RowRejection>,
}

impl AnchorTable {
    /// Number of timestamps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Timestamps in order.
    pub fn timestamps(&self) -> impl Iterator<Item = &Timestamp> {
        self.rows.keys()
    }

    /// Anchor of one foot at one timestamp.
    #[must_use]
    pub fn get(&self, timestamp: &Timestamp, side: FootSide) -> Option<Point2<f64>> {
        self.rows
            .get(timestamp)
            .and_then(|pair| pair.get(side))
            .copied()
    }

    /// Rows skipped while reading, in file order.
    #[must_use]
    pub fn rejections(&self) -> &[RowRejection] {
        &self.rejections
    }

    /// First skipped row for one foot at one timestamp.
    #[must_use]
    pub fn rejection(&self, timestamp: &Timestamp, side: FootSide) -> Option<&RowRejection> {
        self.rejections.iter().find(|r| r.is_for(timestamp, side))
    }

    /// Left-then-right flattened sensor positions at one timestamp.
    ///
    /// Returns `Ok(None)` unless both feet were recorded.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Layout`](crate::IoError::Layout) if an anchor or
    /// the parameters are invalid.
    pub fn combined(
        &self,
        timestamp: &Timestamp,
        params: &LayoutParams,
    ) -> IoResult<Option<Vec<Point2<f64>>>> {
        let (Some(left), Some(right)) = (
            self.get(timestamp, FootSide::Left),
            self.get(timestamp, FootSide::Right),
        ) else {
            return Ok(None);
        };
        let mut points = generate_layout(FootSide::Left, left, params)?.points();
        points.extend(generate_layout(FootSide::Right, right, params)?.points());
        Ok(Some(points))
    }
}

/// Read an anchor table from CSV.
///
/// # Errors
///
/// Returns an error if a required column is missing or the CSV is
/// malformed. A row whose foot indicator or coordinate does not parse is
/// skipped and listed in [`AnchorTable::rejections`]; the first valid row
/// per (timestamp, foot) wins.
///
/// # Example
///
/// ```
/// use insole_io::read_anchors;
/// use insole_types::{FootSide, Point2, Timestamp};
///
/// let table = read_anchors("timestamp,foot,x,y\n0,1,20,6\n".as_bytes()).unwrap();
/// assert_eq!(table.get(&Timestamp::new("0"), FootSide::Right), Some(Point2::new(20.0, 6.0)));
/// ```
pub fn read_anchors<R: Read>(reader: R) -> IoResult<AnchorTable> {
    let mut csv = csv_reader(reader);
    let headers = csv.headers()?.clone();

    let ts_idx = column_index(&headers, TABLE, TIMESTAMP_COLUMN)?;
    let foot_idx = column_index(&headers, TABLE, FOOT_COLUMN)?;
    let x_idx = column_index(&headers, TABLE, "x")?;
    let y_idx = column_index(&headers, TABLE, "y")?;

    let mut table = AnchorTable::default();
    let mut row_count = 0usize;
    let mut duplicates = 0usize;

    for record in csv.records() {
        let record = record?;
        row_count += 1;

        let timestamp = Timestamp::new(field(&record, ts_idx));
        let side = match parse_foot(&record, foot_idx) {
            Ok(side) => side,
            Err(err) => {
                table
                    .rejections
                    .push(reject(TABLE, &record, timestamp, None, &err));
                continue;
            }
        };
        let anchor = match (
            parse_f64(&record, x_idx, "x"),
            parse_f64(&record, y_idx, "y"),
        ) {
            (Ok(x), Ok(y)) => Point2::new(x, y),
            (Err(err), _) | (_, Err(err)) => {
                table
                    .rejections
                    .push(reject(TABLE, &record, timestamp, Some(side), &err));
                continue;
            }
        };

        let pair = table.rows.entry(timestamp).or_default();
        if !pair.insert_first(side, anchor) {
            duplicates += 1;
        }
    }

    if duplicates > 0 {
        debug!(duplicates, "Ignored repeated foot rows within a timestamp");
    }
    info!(
        rows = row_count,
        timestamps = table.len(),
        rejected = table.rejections.len(),
        "Loaded coordinate table"
    );

    Ok(table)
}

/// Load an anchor table from a CSV file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`](crate::IoError::FileNotFound) if the file
/// does not exist, otherwise the errors of [`read_anchors`].
pub fn load_anchors<P: AsRef<Path>>(path: P) -> IoResult<AnchorTable> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading coordinate table");
    read_anchors(open_file(path)?)
}
