//! Joining pressure and anchor tables into timed foot frames.

use std::collections::BTreeSet;
use std::path::Path;

use insole_cop::{FrameFailure, TimedFrame};
use insole_layout::{LayoutParams, generate_layout};
use insole_types::{FootFrame, FootSide, Point2, Timestamp};
use tracing::{info, warn};

use crate::anchor::{AnchorTable, load_anchors};
use crate::error::IoResult;
use crate::order::ColumnOrder;
use crate::pressure::{PressureTable, load_pressures};
use crate::table::RowRejection;

/// A recorded session: pressures and rectangle anchors for both feet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Pressure table.
    pub pressures: PressureTable,
    /// Anchor table.
    pub anchors: AnchorTable,
}

/// Frames assembled from a session, plus the ones that could not be.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssembledFrames {
    /// Frames ready for analysis, by timestamp then left before right.
    pub frames: Vec<TimedFrame>,
    /// Frames missing data, with an unparsable row, or with an invalid anchor.
    pub failures: Vec<FrameFailure>,
}

impl Session {
    /// Create a session from loaded tables.
    #[must_use]
    pub const fn new(pressures: PressureTable, anchors: AnchorTable) -> Self {
        Self { pressures, anchors }
    }

    /// Load both tables from CSV files.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or parsed.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(pressure_path: P, anchor_path: Q) -> IoResult<Self> {
        Ok(Self::new(
            load_pressures(pressure_path)?,
            load_anchors(anchor_path)?,
        ))
    }

    /// Every timestamp present in either table, in order.
    ///
    /// Includes timestamps whose only rows for a foot were rejected.
    #[must_use]
    pub fn timestamps(&self) -> Vec<Timestamp> {
        let rejected = self
            .pressures
            .rejections()
            .iter()
            .chain(self.anchors.rejections())
            .filter(|r| r.side.is_some())
            .map(|r| &r.timestamp);

        self.pressures
            .timestamps()
            .chain(self.anchors.timestamps())
            .chain(rejected)
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Build one frame per (timestamp, foot).
    ///
    /// A foot missing from either table at a timestamp, whose row was
    /// rejected while reading, or whose anchor produces no valid layout, is
    /// logged and returned as a failure.
    #[must_use]
    pub fn frames(&self, params: &LayoutParams, order: ColumnOrder) -> AssembledFrames {
        let mut assembled = AssembledFrames::default();

        for timestamp in self.timestamps() {
            for side in FootSide::ALL {
                match self.frame(&timestamp, side, params, order) {
                    Ok(frame) => assembled
                        .frames
                        .push(TimedFrame::new(timestamp.clone(), frame)),
                    Err(reason) => {
                        warn!(
                            timestamp = %timestamp,
                            side = %side,
                            reason = %reason,
                            "Frame assembly failed"
                        );
                        assembled
                            .failures
                            .push(FrameFailure::new(timestamp.clone(), side, reason));
                    }
                }
            }
        }

        info!(
            frames = assembled.frames.len(),
            failed = assembled.failures.len(),
            column_order = %order,
            "Assembled session frames"
        );

        assembled
    }

    fn frame(
        &self,
        timestamp: &Timestamp,
        side: FootSide,
        params: &LayoutParams,
        order: ColumnOrder,
    ) -> Result<FootFrame, String> {
        let readings = self
            .pressures
            .get(timestamp, side)
            .ok_or_else(|| missing_row("pressure", self.pressures.rejection(timestamp, side)))?;
        let anchor = self
            .anchors
            .get(timestamp, side)
            .ok_or_else(|| missing_row("coordinate", self.anchors.rejection(timestamp, side)))?;

        let layout = generate_layout(side, anchor, params).map_err(|e| e.to_string())?;
        FootFrame::new(layout, readings.project(order, side)).map_err(|e| e.to_string())
    }

    /// Left-then-right pressures at one timestamp (32 values).
    #[must_use]
    pub fn combined_pressures(&self, timestamp: &Timestamp, order: ColumnOrder) -> Option<Vec<f64>> {
        self.pressures.combined(timestamp, order)
    }

    /// Left-then-right sensor positions at one timestamp (32 points).
    ///
    /// # Errors
    ///
    /// Returns an error if an anchor produces no valid layout.
    pub fn combined_coordinates(
        &self,
        timestamp: &Timestamp,
        params: &LayoutParams,
    ) -> IoResult<Option<Vec<Point2<f64>>>> {
        self.anchors.combined(timestamp, params)
    }
}

fn missing_row(table: &str, rejection: Option<&RowRejection>) -> String {
    match rejection {
        Some(r) => format!("rejected {table} row: {}", r.reason),
        None => format!("no {table} row"),
    }
}
