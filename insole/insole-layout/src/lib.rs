//! Sensor layout generation for pressure insoles.
//!
//! Every insole carries the same sixteen sensors in three zones
//! (forefoot, midfoot, heel). Given the top-left corner of the rectangle
//! enclosing one foot's insole, this crate places each sensor on the grid.
//!
//! # Algorithm
//!
//! Each foot side has a fixed table of `(sensor, zone, offset)` entries,
//! where the offset is measured from the rectangle anchor in `interval`
//! steps. Generating a layout is a single pass over the table:
//! `position = anchor + offset * interval`. The table order is the emitted
//! order, which pressure vectors are aligned to.
//!
//! The left and right tables are mirror images of each other (see
//! [`mirror_axis`]), with one exception recorded in
//! [`KNOWN_LEFT_CENTER_ANOMALY`].
//!
//! # Layer 0 Crate
//!
//! This crate is pure computation with no I/O. It can be used in:
//! - CLI tools
//! - Offline gait analysis
//! - Servers
//!
//! # Example
//!
//! ```
//! use insole_layout::{generate_layout, LayoutParams};
//! use insole_types::{FootSide, Point2, SensorId};
//!
//! let layout = generate_layout(
//!     FootSide::Left,
//!     Point2::new(0.0, 6.0),
//!     &LayoutParams::default(),
//! ).unwrap();
//!
//! assert_eq!(layout.len(), 16);
//! assert_eq!(layout.position_of(SensorId::C3), Some(Point2::new(3.0, 2.0)));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod mirror;
mod params;
mod rule;
mod table;

pub use error::{LayoutError, LayoutResult};
pub use mirror::{MIRROR_AXIS_STEPS, mirror_axis, mirror_mismatches};
pub use params::{CenterZonePolicy, LayoutParams};
pub use rule::{LayoutRule, LeftLayout, RightLayout, generate_layout, rule_for};
pub use table::{
    FOREFOOT_OFFSET, GridOffset, KNOWN_LEFT_CENTER_ANOMALY, LEFT_TABLE, LayoutAnomaly,
    LayoutEntry, RIGHT_TABLE,
};
