//! Pressure table ingestion.
//!
//! The table has one row per (timestamp, foot) with columns `timestamp`,
//! `foot` (`0` left, `1` right) and `sensor1`..`sensor16`. Other columns are
//! ignored. Rows with a cell that does not parse are kept aside as
//! [`RowRejection`]s.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use insole_types::{FootSide, SENSOR_COUNT, SensorId, Timestamp};
use tracing::{debug, info};

use crate::error::IoResult;
use crate::order::ColumnOrder;
use crate::pair::FootPair;
use crate::table::{
    FOOT_COLUMN, RowRejection, TIMESTAMP_COLUMN, column_index, csv_reader, field, open_file,
    parse_f64, parse_foot, reject,
};

const TABLE: &str = "pressure";

/// The sixteen pressures of one foot, indexed by sensor label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReadings([f64; SENSOR_COUNT]);

impl SensorReadings {
    /// Create readings from values in label order (`C1` first).
    #[must_use]
    pub const fn new(values: [f64; SENSOR_COUNT]) -> Self {
        Self(values)
    }

    /// Pressure of one sensor.
    #[must_use]
    pub const fn get(&self, sensor: SensorId) -> f64 {
        self.0[sensor.index()]
    }

    /// Pressures in the given column order.
    #[must_use]
    pub fn project(&self, order: ColumnOrder, side: FootSide) -> Vec<f64> {
        order
            .sensors(side)
            .into_iter()
            .map(|s| self.get(s))
            .collect()
    }
}

/// Pressures grouped by timestamp and foot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PressureTable {
    rows: BTreeMap<Timestamp, FootPair<SensorReadings>>,
    rejections: Vec<RowRejection>,
}

impl PressureTable {
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

    /// Readings of one foot at one timestamp.
    #[must_use]
    pub fn get(&self, timestamp: &Timestamp, side: FootSide) -> Option<&SensorReadings> {
        self.rows.get(timestamp).and_then(|pair| pair.get(side))
    }

    /// Left-then-right pressures at one timestamp, each foot in `order`.
    ///
    /// Returns `None` unless both feet were recorded.
    #[must_use]
    pub fn combined(&self, timestamp: &Timestamp, order: ColumnOrder) -> Option<Vec<f64>> {
        let pair = self.rows.get(timestamp)?;
        let left = pair.get(FootSide::Left)?;
        let right = pair.get(FootSide::Right)?;
        let mut values = left.project(order, FootSide::Left);
        values.extend(right.project(order, FootSide::Right));
        Some(values)
    }

    /// Iterate over timestamps and their per-foot readings.
    pub fn iter(&self) -> impl Iterator<Item = (&Timestamp, &FootPair<SensorReadings>)> {
        self.rows.iter()
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
}

/// Read a pressure table from CSV.
///
/// # Errors
///
/// Returns an error if a required column is missing or the CSV is
/// malformed. A row whose foot indicator or pressure does not parse is
/// skipped and listed in [`PressureTable::rejections`]; the first valid row
/// per (timestamp, foot) wins.
///
/// # Example
///
/// ```
/// use insole_io::read_pressures;
/// use insole_types::{FootSide, SensorId, Timestamp};
///
/// let csv = "timestamp,foot,sensor1,sensor2,sensor3,sensor4,sensor5,sensor6,sensor7,sensor8,\
/// sensor9,sensor10,sensor11,sensor12,sensor13,sensor14,sensor15,sensor16\n\
/// 0,0,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16\n";
///
/// let table = read_pressures(csv.as_bytes()).unwrap();
/// let left = table.get(&Timestamp::new("0"), FootSide::Left).unwrap();
/// assert_eq!(left.get(SensorId::C9), 9.0);
/// ```
pub fn read_pressures<R: Read>(reader: R) -> IoResult<PressureTable> {
    let mut csv = csv_reader(reader);
    let headers = csv.headers()?.clone();

    let ts_idx = column_index(&headers, TABLE, TIMESTAMP_COLUMN)?;
    let foot_idx = column_index(&headers, TABLE, FOOT_COLUMN)?;
    let sensor_idx = SensorId::ALL
        .iter()
        .map(|s| column_index(&headers, TABLE, &s.column_name()))
        .collect::<IoResult<Vec<usize>>>()?;

    let mut table = PressureTable::default();
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
        let readings = match parse_readings(&record, &sensor_idx) {
            Ok(readings) => readings,
            Err(err) => {
                table
                    .rejections
                    .push(reject(TABLE, &record, timestamp, Some(side), &err));
                continue;
            }
        };

        let pair = table.rows.entry(timestamp).or_default();
        if !pair.insert_first(side, readings) {
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
        "Loaded pressure table"
    );

    Ok(table)
}

fn parse_readings(record: &StringRecord, sensor_idx: &[usize]) -> IoResult<SensorReadings> {
    let mut values = [0.0; SENSOR_COUNT];
    for (value, (&idx, sensor)) in values
        .iter_mut()
        .zip(sensor_idx.iter().zip(SensorId::ALL.iter()))
    {
        *value = parse_f64(record, idx, &sensor.column_name())?;
    }
    Ok(SensorReadings(values))
}

/// Load a pressure table from a CSV file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`](crate::IoError::FileNotFound) if the file
/// does not exist, otherwise the errors of [`read_pressures`].
pub fn load_pressures<P: AsRef<Path>>(path: P) -> IoResult<PressureTable> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading pressure table");
    read_pressures(open_file(path)?)
}
