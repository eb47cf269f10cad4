//! CSV ingestion for insole recordings.
//!
//! A recording is two tables sharing a `timestamp` and `foot` key:
//!
//! - a **pressure table** with `sensor1`..`sensor16` columns
//! - a **coordinate table** with the `x`, `y` top-left anchor of the
//!   rectangle enclosing each insole
//!
//! [`Session`] joins the two into [`TimedFrame`](insole_cop::TimedFrame)s
//! ready for [`analyze_trajectory`](insole_cop::analyze_trajectory).
//!
//! # Example
//!
//! ```
//! use insole_io::{ColumnOrder, Session, read_anchors, read_pressures};
//! use insole_layout::LayoutParams;
//!
//! let pressures = "timestamp,foot,sensor1,sensor2,sensor3,sensor4,sensor5,sensor6,sensor7,sensor8,\
//! sensor9,sensor10,sensor11,sensor12,sensor13,sensor14,sensor15,sensor16\n\
//! 0,0,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1\n";
//! let anchors = "timestamp,foot,x,y\n0,0,0,6\n";
//!
//! let session = Session::new(
//!     read_pressures(pressures.as_bytes()).unwrap(),
//!     read_anchors(anchors.as_bytes()).unwrap(),
//! );
//! let assembled = session.frames(&LayoutParams::default(), ColumnOrder::Recorded);
//! assert_eq!(assembled.frames.len(), 1);
//! assert_eq!(assembled.failures.len(), 1); // no right foot
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod anchor;
mod error;
mod order;
mod pair;
mod pressure;
mod session;
mod table;

pub use anchor::{AnchorTable, load_anchors, read_anchors};
pub use error::{IoError, IoResult};
pub use order::ColumnOrder;
pub use pair::FootPair;
pub use pressure::{PressureTable, SensorReadings, load_pressures, read_pressures};
pub use session::{AssembledFrames, Session};
pub use table::{FOOT_COLUMN, RowRejection, TIMESTAMP_COLUMN};
